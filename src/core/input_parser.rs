// Turns what the user typed into integers
//
// Lists may be separated by commas, spaces, or both.

use crate::error::{ExplainerError, Result};
use regex::Regex;

const SEPARATOR_PATTERN: &str = r"[,\s]+";

pub struct InputParser {
    separator: Regex,
}

impl InputParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            separator: Regex::new(SEPARATOR_PATTERN)?,
        })
    }

    /// Split on commas and whitespace, dropping empty pieces
    pub fn tokens<'a>(&self, raw: &'a str) -> Vec<&'a str> {
        self.separator
            .split(raw.trim())
            .filter(|part| !part.is_empty())
            .collect()
    }

    /// Parse a whole list strictly
    ///
    /// Every token must be an integer and there must be at least one.
    pub fn parse_numbers(&self, raw: &str) -> Result<Vec<i64>> {
        let parts = self.tokens(raw);

        if parts.is_empty() {
            return Err(ExplainerError::InvalidInput(
                "list cannot be empty".to_string(),
            ));
        }

        parts
            .iter()
            .map(|part| {
                part.parse::<i64>().map_err(|_| {
                    ExplainerError::InvalidInput(format!("'{}' is not an integer", part))
                })
            })
            .collect()
    }

    /// Try to read a menu entry as an inline list
    ///
    /// Returns `None` for anything that is not purely integers, so labels and
    /// commands fall through untouched.
    pub fn parse_inline(&self, raw: &str) -> Option<Vec<i64>> {
        self.parse_numbers(raw).ok()
    }

    /// Parse a single search target
    pub fn parse_target(&self, raw: &str) -> Result<i64> {
        let trimmed = raw.trim();
        trimmed.parse::<i64>().map_err(|_| {
            ExplainerError::InvalidInput(format!("'{}' is not an integer", trimmed))
        })
    }
}
