/// Menu text and the commands each menu accepts
///
/// Parsing is kept apart from the controller so every accepted input can be
/// tested without driving a whole session.

use crate::core::InputParser;
use crate::store::{QuestionSet, SearchInput, MANUAL_LABEL};

const EXIT_WORDS: &[&str] = &["exit", "quit", "/end"];

fn is_exit_word(raw: &str) -> bool {
    EXIT_WORDS.iter().any(|w| raw.eq_ignore_ascii_case(w))
}

/// What the user picked at the input menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Question(String),
    Manual,
    Inline { raw: String, numbers: Vec<i64> },
    History,
    ClearResult,
    Exit,
    Empty,
    Unknown(String),
}

impl InputCommand {
    /// Classify one line
    ///
    /// Known labels win over everything else, then keywords, then inline
    /// number lists.
    pub fn parse(raw: &str, questions: &QuestionSet, parser: &InputParser) -> Self {
        let raw = raw.trim();

        if raw.is_empty() {
            return InputCommand::Empty;
        }
        if questions.get(raw).is_some() {
            return InputCommand::Question(raw.to_string());
        }
        if raw.eq_ignore_ascii_case(MANUAL_LABEL) {
            return InputCommand::Manual;
        }
        if is_exit_word(raw) {
            return InputCommand::Exit;
        }
        if raw.eq_ignore_ascii_case("/history") {
            return InputCommand::History;
        }
        if raw.eq_ignore_ascii_case("/clearresult") {
            return InputCommand::ClearResult;
        }
        if let Some(numbers) = parser.parse_inline(raw) {
            return InputCommand::Inline {
                raw: raw.to_string(),
                numbers,
            };
        }

        InputCommand::Unknown(raw.to_string())
    }
}

/// What the user picked at the algorithm menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmChoice {
    Linear,
    Binary,
    Compare,
    Back,
    Exit,
    Unknown(String),
}

impl AlgorithmChoice {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        match raw.to_ascii_lowercase().as_str() {
            "1" | "linear" => AlgorithmChoice::Linear,
            "2" | "binary" => AlgorithmChoice::Binary,
            "3" | "compare" => AlgorithmChoice::Compare,
            "4" | "back" => AlgorithmChoice::Back,
            "5" => AlgorithmChoice::Exit,
            other if is_exit_word(other) => AlgorithmChoice::Exit,
            _ => AlgorithmChoice::Unknown(raw.to_string()),
        }
    }
}

pub fn welcome() -> String {
    format!(
        "{}\nSearch Algorithms Explainer v{}\nLearn how linear and binary search work, step by step.\n{}",
        "=".repeat(60),
        env!("CARGO_PKG_VERSION"),
        "=".repeat(60)
    )
}

/// Main menu listing every question and its size
pub fn input_menu(questions: &QuestionSet) -> String {
    let mut out = String::from("\nAvailable questions:\n");

    if questions.is_empty() {
        out.push_str("  (none loaded)\n");
    }
    for (label, numbers) in questions.iter() {
        out.push_str(&format!("  - {} ({} numbers)\n", label, numbers.len()));
    }

    out.push_str("\nType a question label, 'manual' to enter a list, or numbers like \"4 2 9\".\n");
    out.push_str("Other commands: /history, /clearresult, exit");

    out
}

/// Algorithm menu for the list currently selected
pub fn algorithm_menu(input: &SearchInput) -> String {
    format!(
        "\nSelected: {}\nList: {:?}\n\n  1. Linear search\n  2. Binary search\n  3. Compare both\n  4. Back\n  5. Exit",
        input.label, input.numbers
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> QuestionSet {
        vec![
            ("small".to_string(), vec![5, 3, 8, 1]),
            ("42".to_string(), vec![42]),
        ]
        .into_iter()
        .collect()
    }

    fn parse(raw: &str) -> InputCommand {
        InputCommand::parse(raw, &questions(), &InputParser::new().unwrap())
    }

    #[test]
    fn test_input_commands() {
        assert_eq!(parse("small"), InputCommand::Question("small".into()));
        assert_eq!(parse("MANUAL"), InputCommand::Manual);
        assert_eq!(parse("exit"), InputCommand::Exit);
        assert_eq!(parse("/end"), InputCommand::Exit);
        assert_eq!(parse("/history"), InputCommand::History);
        assert_eq!(parse("/clearresult"), InputCommand::ClearResult);
        assert_eq!(parse("   "), InputCommand::Empty);
        assert_eq!(parse("smal"), InputCommand::Unknown("smal".into()));
    }

    #[test]
    fn test_inline_list() {
        assert_eq!(
            parse("4 2 9"),
            InputCommand::Inline {
                raw: "4 2 9".into(),
                numbers: vec![4, 2, 9]
            }
        );
        assert_eq!(parse("4 2 x"), InputCommand::Unknown("4 2 x".into()));
    }

    #[test]
    fn test_label_beats_inline() {
        // "42" is both a label and a valid list
        assert_eq!(parse("42"), InputCommand::Question("42".into()));
    }

    #[test]
    fn test_algorithm_choices() {
        assert_eq!(AlgorithmChoice::parse("1"), AlgorithmChoice::Linear);
        assert_eq!(AlgorithmChoice::parse("Binary"), AlgorithmChoice::Binary);
        assert_eq!(AlgorithmChoice::parse(" 3 "), AlgorithmChoice::Compare);
        assert_eq!(AlgorithmChoice::parse("back"), AlgorithmChoice::Back);
        assert_eq!(AlgorithmChoice::parse("5"), AlgorithmChoice::Exit);
        assert_eq!(AlgorithmChoice::parse("quit"), AlgorithmChoice::Exit);
        assert_eq!(AlgorithmChoice::parse("9"), AlgorithmChoice::Unknown("9".into()));
    }

    #[test]
    fn test_menus_mention_inputs() {
        let menu = input_menu(&questions());
        assert!(menu.contains("small (4 numbers)"));
        assert!(input_menu(&QuestionSet::new()).contains("(none loaded)"));

        let input = SearchInput::inline("4 2 9", vec![4, 2, 9]);
        let menu = algorithm_menu(&input);
        assert!(menu.contains("inline: 4 2 9"));
        assert!(menu.contains("[4, 2, 9]"));
    }
}
