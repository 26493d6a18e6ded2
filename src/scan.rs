//! A small `scanf`-like scanner built on top of [`regex`].
//!
//! A template is literal text with the placeholders `%d` (an unsigned integer), `%c`
//! (a single character) and `%s` (a greedy string). Regex metacharacters such as `(`,
//! `.` or `*` must be escaped with a backslash to match literally; an unescaped one is
//! rejected when the template is compiled.

use std::fmt;

use regex::Regex;

use crate::{Error, Result};

/// A value captured by one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Int(i64),
    Char(char),
    Str(String),
}

impl Field {
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Field::Int(value) => Ok(*value),
            other => Err(Error::Format(format!("expected an integer, found {other}"))),
        }
    }

    pub fn as_char(&self) -> Result<char> {
        match self {
            Field::Char(value) => Ok(*value),
            other => Err(Error::Format(format!("expected a character, found {other}"))),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Field::Str(value) => Ok(value),
            other => Err(Error::Format(format!("expected a string, found {other}"))),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Int(value) => write!(f, "{value}"),
            Field::Char(value) => write!(f, "{value:?}"),
            Field::Str(value) => write!(f, "{value:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Int,
    Char,
    Str,
}

/// A compiled template. Build it once and reuse it for every line of an input.
#[derive(Debug, Clone)]
pub struct Scanner {
    template: String,
    regex: Regex,
    placeholders: Vec<Placeholder>,
}

impl Scanner {
    pub fn new(template: &str) -> Result<Self> {
        let mut pattern = String::from("^(?:");
        let mut placeholders = Vec::new();
        let mut chars = template.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                let escaped = chars.next().ok_or_else(|| {
                    Error::Format(format!("dangling \\ at end of template {template:?}"))
                })?;
                pattern.push(c);
                pattern.push(escaped);
                continue;
            }
            if is_meta_character(c) {
                return Err(Error::Format(format!(
                    "unescaped {c:?} in template {template:?}"
                )));
            }
            if c != '%' {
                pattern.push(c);
                continue;
            }
            let (placeholder, group) = match chars.next() {
                Some('d') => (Placeholder::Int, "([0-9]+)"),
                Some('c') => (Placeholder::Char, "(.)"),
                Some('s') => (Placeholder::Str, "(.*)"),
                Some(other) => {
                    return Err(Error::Format(format!(
                        "unknown placeholder %{other} in template {template:?}"
                    )))
                }
                None => {
                    return Err(Error::Format(format!(
                        "dangling % at end of template {template:?}"
                    )))
                }
            };
            placeholders.push(placeholder);
            pattern.push_str(group);
        }
        pattern.push_str(")$");

        let regex = Regex::new(&pattern).map_err(|err| {
            Error::Format(format!("template {template:?} is not a valid pattern: {err}"))
        })?;
        tracing::debug!(template, pattern = %pattern, "compiled scan template");

        Ok(Self {
            template: template.to_string(),
            regex,
            placeholders,
        })
    }

    /// Scans `input`, returning one field per placeholder from left to right.
    pub fn scan(&self, input: &str) -> Result<Vec<Field>> {
        let captures = self.regex.captures(input).ok_or_else(|| {
            Error::Format(format!(
                "input {input:?} does not match template {:?}",
                self.template
            ))
        })?;

        // Group 0 is the whole match.
        let groups = captures.len() - 1;
        if groups != self.placeholders.len() {
            return Err(Error::Format(format!(
                "input {input:?} has {groups} groups instead of {} for template {:?}",
                self.placeholders.len(),
                self.template
            )));
        }

        self.placeholders
            .iter()
            .zip(captures.iter().skip(1))
            .map(|(placeholder, group)| {
                let text = group.map_or("", |m| m.as_str());
                match placeholder {
                    Placeholder::Int => text
                        .parse()
                        .map(Field::Int)
                        .map_err(|_| Error::Format(format!("integer out of range: {text}"))),
                    Placeholder::Char => text
                        .chars()
                        .next()
                        .map(Field::Char)
                        .ok_or_else(|| Error::Format("empty character field".to_string())),
                    Placeholder::Str => Ok(Field::Str(text.to_string())),
                }
            })
            .collect()
    }
}

fn is_meta_character(c: char) -> bool {
    matches!(
        c,
        '.' | '*' | '+' | '?' | '|' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$'
    )
}

/// Compiles `template` and scans a single `input` with it.
pub fn scan(input: &str, template: &str) -> Result<Vec<Field>> {
    Scanner::new(template)?.scan(input)
}
