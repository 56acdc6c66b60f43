/// Question source loading
///
/// Reads the label -> integer list mapping. Any problem with the file
/// degrades to an empty set plus a warning; the session can still run on
/// manual and inline lists.

use crate::error::{ExplainerError, Result};
use crate::store::models::QuestionSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

pub struct QuestionStore;

impl QuestionStore {
    /// Load questions, never failing
    ///
    /// # Arguments
    /// * `path` - Path to the JSON question file
    ///
    /// # Returns
    /// * The decoded set, or an empty one if the file is missing, unreadable,
    ///   or not an object of integer lists
    pub fn load<P: AsRef<Path>>(path: P) -> QuestionSet {
        let path = path.as_ref();

        match Self::read(path) {
            Ok(questions) => {
                debug!(path = %path.display(), count = questions.len(), "loaded questions");
                questions
            }
            Err(e) => {
                let message = Self::describe_failure(path, &e);
                warn!(path = %path.display(), error = %e, "question source unusable");
                eprintln!("Warning: {}", message);
                QuestionSet::new()
            }
        }
    }

    /// Strict variant of [`QuestionStore::load`] that reports what went wrong
    pub fn read<P: AsRef<Path>>(path: P) -> Result<QuestionSet> {
        let content = fs::read_to_string(path.as_ref())?;

        // Blank file is the same as an empty object
        if content.trim().is_empty() {
            return Ok(QuestionSet::new());
        }

        let questions: QuestionSet = serde_json::from_str(&content)?;
        Ok(questions)
    }

    fn describe_failure(path: &Path, error: &ExplainerError) -> String {
        match error {
            ExplainerError::Io(e) if e.kind() == ErrorKind::NotFound => {
                format!("{} not found.", path.display())
            }
            ExplainerError::Io(e) => {
                format!("Unable to read '{}': {}", path.display(), e)
            }
            ExplainerError::Serialization(e) => format!(
                "'{}' must contain a JSON object mapping labels to lists of integers ({})",
                path.display(),
                e
            ),
            other => other.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("questions.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid() {
        let temp = TempDir::new().unwrap();
        let path = write_source(&temp, r#"{"small": [5, 3, 8, 1], "empty": []}"#);

        let questions = QuestionStore::load(&path);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions.get("small"), Some(&[5, 3, 8, 1][..]));
        assert_eq!(questions.get("empty"), Some(&[][..]));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.json");

        // twice: loading a missing source never changes anything
        assert!(QuestionStore::load(&path).is_empty());
        assert!(QuestionStore::load(&path).is_empty());

        match QuestionStore::read(&path) {
            Err(ExplainerError::Io(e)) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = write_source(&temp, "  \n");
        assert!(QuestionStore::load(&path).is_empty());
    }

    #[test]
    fn test_malformed_json_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = write_source(&temp, "{not json");
        assert!(QuestionStore::load(&path).is_empty());
    }

    #[test]
    fn test_wrong_shape_is_empty() {
        let temp = TempDir::new().unwrap();

        let path = write_source(&temp, "[1, 2, 3]");
        assert!(QuestionStore::load(&path).is_empty());

        let path = write_source(&temp, r#"{"a": [1, "two"]}"#);
        assert!(QuestionStore::load(&path).is_empty());
        assert!(matches!(
            QuestionStore::read(&path),
            Err(ExplainerError::Serialization(_))
        ));
    }

    #[test]
    fn test_describe_failure() {
        let path = Path::new("questions.json");
        let missing = ExplainerError::Io(std::io::Error::from(ErrorKind::NotFound));
        assert_eq!(
            QuestionStore::describe_failure(path, &missing),
            "questions.json not found."
        );
    }
}
