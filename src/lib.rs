pub mod config;
mod error;
pub mod harness;
pub mod input;
pub mod scan;
pub mod solutions;

pub use error::{Error, Result};
pub use harness::DAYS;

/// Reads the puzzle input for day `n` from the configured input directory.
pub fn default_input(n: usize) -> anyhow::Result<String> {
    let path = config::Config::from_env().input_path(n);
    Ok(input::read_string(path)?)
}
