// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("cannot read input file {path}: {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed palette table in {path}: {source}")]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("palette '{shade}' has {found} colors, at least {required} are required")]
    PaletteShape {
        shade: String,
        found: usize,
        required: usize,
    },

    #[error("palette '{shade}' color #{index} is not a #RRGGBB value: {value:?}")]
    InvalidColor {
        shade: String,
        index: usize,
        value: String,
    },

    #[error("no palette with shade \"Blue\" to derive link colors from")]
    MissingBluePalette,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl GenError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 2,
            Self::MalformedInput { .. } => 3,
            Self::PaletteShape { .. } | Self::InvalidColor { .. } => 4,
            Self::MissingBluePalette => 5,
            Self::Io(_) | Self::Json(_) => 1,
        }
    }
}
