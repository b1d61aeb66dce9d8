// SPDX-License-Identifier: Apache-2.0
use clap::ValueEnum;

use crate::error::Result;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `.theme-<name>` custom-property block per theme.
    #[default]
    Css,
    /// Pretty-printed JSON array of the derived themes.
    Json,
}

pub fn render(themes: &[Theme], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Css => Ok(render_css(themes)),
        OutputFormat::Json => render_json(themes),
    }
}

/// CSS rule blocks in theme order, each followed by a blank line.
#[must_use]
pub fn render_css(themes: &[Theme]) -> String {
    let mut css = String::new();
    for theme in themes {
        css.push_str(&format!(
            ".theme-{name} {{\n    --theme-main: {main};\n    --theme-text: {text};\n    --theme-input: {input};\n    --theme-link: {link};\n}}\n\n",
            name = theme.name,
            main = theme.main,
            text = theme.text,
            input = theme.input,
            link = theme.link,
        ));
    }
    css
}

pub fn render_json(themes: &[Theme]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(themes)?;
    json.push('\n');
    Ok(json)
}
