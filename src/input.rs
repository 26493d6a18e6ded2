//! Loading puzzle input and splitting it into the shapes the solvers need.
//!
//! The `read_*` functions load a file; the remaining functions work on text that is
//! already in memory.

use std::{path::Path, sync::OnceLock};

use regex::Regex;

use crate::{Error, Result};

/// Reads a whole file. Line separators are normalized to `\n`.
pub fn read_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading input");
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.replace("\r\n", "\n").replace('\r', "\n"))
}

pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(read_string(path)?.lines().map(String::from).collect())
}

pub fn read_single_line(path: impl AsRef<Path>) -> Result<String> {
    first_line(&read_string(path)?).map(String::from)
}

pub fn read_char_matrix(path: impl AsRef<Path>) -> Result<Vec<Vec<char>>> {
    Ok(char_matrix(&read_string(path)?))
}

pub fn read_line_blocks(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    Ok(line_blocks(&read_string(path)?)
        .into_iter()
        .map(|block| block.into_iter().map(String::from).collect())
        .collect())
}

/// The first line of `input`, without its terminator.
pub fn first_line(input: &str) -> Result<&str> {
    input
        .lines()
        .next()
        .ok_or_else(|| Error::Format("input is empty".to_string()))
}

/// One row per line. Rows keep their own length, so the matrix may be ragged.
pub fn char_matrix(input: &str) -> Vec<Vec<char>> {
    input.lines().map(|line| line.chars().collect()).collect()
}

/// Groups of lines separated by one or more blank lines.
pub fn line_blocks(input: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in input.lines() {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Every integer in `input`, in order of appearance. All other characters are ignored,
/// so `"I have 5 apples and -12 bananas"` gives `[5, -12]`.
pub fn parse_ints(input: &str) -> Result<Vec<i64>> {
    static DECIMAL: OnceLock<Regex> = OnceLock::new();
    let decimal = DECIMAL.get_or_init(|| Regex::new("-?[0-9]+").expect("valid regex"));
    decimal
        .find_iter(input)
        .map(|m| {
            m.as_str()
                .parse()
                .map_err(|_| Error::Format(format!("integer out of range: {}", m.as_str())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;
    use std::io::Write;

    fn temp_input(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn reads_lines_and_first_line() -> anyhow::Result<()> {
        let file = temp_input("first\r\nsecond\r\nthird")?;
        assert_eq!(read_lines(file.path())?, ["first", "second", "third"]);
        assert_eq!(read_single_line(file.path())?, "first");
        assert_eq!(read_string(file.path())?, "first\nsecond\nthird");
        Ok(())
    }

    #[test]
    fn reads_ragged_char_matrix() -> anyhow::Result<()> {
        let file = temp_input("ab\nc\n\ndef\n")?;
        let matrix = read_char_matrix(file.path())?;
        assert_eq!(
            matrix,
            vec![vec!['a', 'b'], vec!['c'], vec![], vec!['d', 'e', 'f']]
        );
        Ok(())
    }

    #[test]
    fn splits_blocks_on_blank_lines() -> anyhow::Result<()> {
        let input = indoc! {"
            1000
            2000

            3000


            4000
            5000
        "};
        assert_eq!(
            line_blocks(input),
            vec![vec!["1000", "2000"], vec!["3000"], vec!["4000", "5000"]]
        );

        let file = temp_input(input)?;
        assert_eq!(read_line_blocks(file.path())?.len(), 3);
        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_lines("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "{err:?}");
    }

    #[test]
    fn empty_input_has_no_first_line() {
        assert!(matches!(first_line(""), Err(Error::Format(_))));
    }

    #[test]
    fn extracts_integers() -> anyhow::Result<()> {
        assert_eq!(parse_ints("I have 5 apples and -12 bananas.")?, [5, -12]);
        assert_eq!(parse_ints("2x3x4")?, [2, 3, 4]);
        assert!(parse_ints("no numbers")?.is_empty());
        assert!(parse_ints("99999999999999999999").is_err());
        Ok(())
    }
}
