use std::path::PathBuf;

/// Environment variable overriding the directory puzzle inputs are read from.
pub const INPUT_DIR_VAR: &str = "AOC_INPUT_DIR";

const DEFAULT_INPUT_DIR: &str = "inputs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        std::env::var_os(INPUT_DIR_VAR)
            .filter(|dir| !dir.is_empty())
            .map(|dir| Self {
                input_dir: PathBuf::from(dir),
            })
            .unwrap_or_default()
    }

    /// Input file for day `n`, e.g. `inputs/7.txt`.
    pub fn input_path(&self, n: usize) -> PathBuf {
        self.input_dir.join(format!("{}.txt", n))
    }
}
