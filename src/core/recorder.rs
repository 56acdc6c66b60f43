// Records search results to the result log
//
// Cleans up the question label, turns a SearchResult into a ResultRecord and
// hands it to the log.

use crate::core::searcher::SearchResult;
use crate::error::{ExplainerError, Result};
use crate::store::{Outcome, ResultLog, ResultRecord};
use chrono::Utc;

const COMPARE_SUFFIX: &str = " (compare mode)";

/// How the run was started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Single,
    Compare,
}

pub struct Recorder {
    log: ResultLog,
}

impl Recorder {
    pub fn new(log: ResultLog) -> Self {
        Self { log }
    }

    pub fn log(&self) -> &ResultLog {
        &self.log
    }

    // Build the record and append it. The record is returned even though it
    // is already on disk so the caller can show it.
    pub fn record(
        &self,
        label: &str,
        result: &SearchResult,
        mode: RunMode,
    ) -> Result<ResultRecord> {
        let record = self.build_record(label, result, mode)?;
        self.log.append(record.clone())?;
        Ok(record)
    }

    /// Turn a finished search into a log entry without persisting it
    pub fn build_record(
        &self,
        label: &str,
        result: &SearchResult,
        mode: RunMode,
    ) -> Result<ResultRecord> {
        let question = self.sanitize_label(label);
        if question.is_empty() {
            return Err(ExplainerError::InvalidRecord(
                "empty question label".to_string(),
            ));
        }

        let method = match mode {
            RunMode::Single => result.method.name().to_string(),
            RunMode::Compare => format!("{}{}", result.method.name(), COMPARE_SUFFIX),
        };

        Ok(ResultRecord {
            question,
            method,
            time_complexity: result.method.time_complexity().to_string(),
            space_complexity: result.method.space_complexity().to_string(),
            steps: result.steps,
            found: Outcome::from(result.found()),
            recorded_at: Some(Utc::now()),
        })
    }

    /// Sanitize a question label
    ///
    /// - Removes null bytes
    /// - Normalizes whitespace (runs of whitespace to a single space)
    ///
    /// Length is left alone; inline labels keep every number typed.
    fn sanitize_label(&self, label: &str) -> String {
        label
            .replace('\0', "")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
