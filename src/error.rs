use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading and interpreting puzzle input.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file is missing or unreadable.
    #[error("could not read input file at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Text does not have the expected shape.
    #[error("format error: {0}")]
    Format(String),
    /// Input is well-formed but describes something that cannot be evaluated.
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
