use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::Result;
use crate::palette::PaletteTable;
use crate::render::{OutputFormat, render};
use crate::theme::{check_known_themes, derive_themes};
use crate::util::write_output;

pub const DEFAULT_INPUT: &str = "material-colors.json";

#[derive(Debug, Parser)]
#[command(
    name = "palette_themes",
    about = "Generate per-shade CSS theme blocks from a Material Design palette table",
    version
)]
pub struct Cli {
    /// Palette table to read.
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Write here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
    pub format: OutputFormat,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let rendered = generate(&cli.input, cli.format)?;
    write_output(cli.output.as_deref(), &rendered)
}

/// Load, derive and render without writing anything.
pub fn generate(input: &Path, format: OutputFormat) -> Result<String> {
    let table = PaletteTable::from_path(input)?;
    let themes = derive_themes(&table)?;
    check_known_themes(&themes);
    tracing::info!(
        input = %input.display(),
        themes = themes.len(),
        "generated themes"
    );
    render(&themes, format)
}
