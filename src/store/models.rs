/// Data models shared by the stores and the session
///
/// `QuestionSet` mirrors the question file, `ResultRecord` mirrors one entry
/// of the result log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label for lists typed in through the manual prompt
pub const MANUAL_LABEL: &str = "manual";

/// Prefix for lists typed straight into the main menu
pub const INLINE_PREFIX: &str = "inline: ";

/// Predefined lists keyed by label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet(BTreeMap<String, Vec<i64>>);

impl QuestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, label: &str) -> Option<&[i64]> {
        self.0.get(label).map(Vec::as_slice)
    }

    /// Labels in sorted order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[i64])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<i64>)> for QuestionSet {
    fn from_iter<I: IntoIterator<Item = (String, Vec<i64>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The list currently being searched and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    pub label: String,
    pub numbers: Vec<i64>,
}

impl SearchInput {
    pub fn from_question(label: &str, numbers: &[i64]) -> Self {
        Self {
            label: label.to_string(),
            numbers: numbers.to_vec(),
        }
    }

    pub fn manual(numbers: Vec<i64>) -> Self {
        Self {
            label: MANUAL_LABEL.to_string(),
            numbers,
        }
    }

    /// `raw` is what the user typed, kept verbatim (trimmed) in the label
    pub fn inline(raw: &str, numbers: Vec<i64>) -> Self {
        Self {
            label: format!("{}{}", INLINE_PREFIX, raw.trim()),
            numbers,
        }
    }
}

/// Whether a search located its target
///
/// Stored as the strings "Found" / "Not Found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "Found")]
    Found,
    #[serde(rename = "Not Found")]
    NotFound,
}

impl From<bool> for Outcome {
    fn from(found: bool) -> Self {
        if found {
            Outcome::Found
        } else {
            Outcome::NotFound
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Outcome::Found => "Found",
            Outcome::NotFound => "Not Found",
        };
        write!(f, "{}", s)
    }
}

/// One logged algorithm run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub question: String,
    pub method: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub steps: usize,
    pub found: Outcome,
    /// Missing in logs written before timestamps were recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl ResultRecord {
    /// One-line description used when a record is cleared
    pub fn summary(&self) -> String {
        format!(
            "{} on '{}' ({}, {} steps)",
            self.method, self.question, self.found, self.steps
        )
    }
}
