#![forbid(unsafe_code)]

pub mod cli;
pub mod color;
pub mod error;
pub mod palette;
pub mod render;
pub mod theme;
pub mod util;

pub use cli::{generate, run_from_env};
pub use error::{GenError, Result};
