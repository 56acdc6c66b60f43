/// Command-line arguments
///
/// One optional command token plus path flags. Commands may be written with
/// or without their leading slash (`/history` or `history`).

use crate::config::Config;
use crate::error::{ExplainerError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Start,
    End,
    History,
    ClearResult,
    Help,
    Version,
    Unknown(String),
}

impl CliCommand {
    fn parse(token: &str) -> Self {
        match token.trim_start_matches('/') {
            "start" => CliCommand::Start,
            "end" => CliCommand::End,
            "history" => CliCommand::History,
            "clearresult" => CliCommand::ClearResult,
            _ => match token {
                "-h" | "--help" | "help" => CliCommand::Help,
                "-v" | "--version" | "version" => CliCommand::Version,
                other => CliCommand::Unknown(other.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: CliCommand,
    pub questions: Option<String>,
    pub results: Option<String>,
}

impl CliArgs {
    /// Parse arguments, excluding the program name
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut command = None;
        let mut questions = None;
        let mut results = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--questions" => {
                    i += 1;
                    questions = Some(Self::flag_value(args, i, "--questions")?);
                }
                "--results" => {
                    i += 1;
                    results = Some(Self::flag_value(args, i, "--results")?);
                }
                arg => {
                    // First command wins; extra tokens are an error
                    if command.is_some() {
                        return Err(ExplainerError::InvalidInput(format!(
                            "unexpected argument '{}'",
                            arg
                        )));
                    }
                    command = Some(CliCommand::parse(arg));
                }
            }
            i += 1;
        }

        Ok(Self {
            command: command.unwrap_or(CliCommand::Start),
            questions,
            results,
        })
    }

    fn flag_value(args: &[String], i: usize, flag: &str) -> Result<String> {
        args.get(i)
            .cloned()
            .ok_or_else(|| ExplainerError::Config(format!("missing value for {}", flag)))
    }

    /// Apply path flags on top of an environment-derived config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(path) = &self.questions {
            config = config.with_questions_path(path);
        }
        if let Some(path) = &self.results {
            config = config.with_results_path(path);
        }
        config
    }
}

pub fn usage() -> String {
    format!(
        r#"search-explainer v{} - Linear and binary search, step by step

USAGE:
    search-explainer [COMMAND] [OPTIONS]

COMMANDS:
    /start          Start the interactive program (default)
    /end            Exit the program
    /history        Show search history
    /clearresult    Clear the last search result
    -h, --help      Show this help
    -v, --version   Show version

OPTIONS:
    --questions <PATH>   Question file (default: questions.json)
    --results <PATH>     Result log (default: results.json)

ENVIRONMENT:
    SEARCH_EXPLAINER_QUESTIONS, SEARCH_EXPLAINER_RESULTS   Default paths
    RUST_LOG                                               Diagnostic log level

EXAMPLES:
    search-explainer
    search-explainer /history
    search-explainer /clearresult --results ~/search-results.json
"#,
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_is_start() {
        let parsed = CliArgs::parse(&[]).unwrap();
        assert_eq!(parsed.command, CliCommand::Start);
        assert_eq!(parsed.questions, None);
    }

    #[test]
    fn test_commands() {
        let cases = [
            ("/start", CliCommand::Start),
            ("start", CliCommand::Start),
            ("/end", CliCommand::End),
            ("/history", CliCommand::History),
            ("clearresult", CliCommand::ClearResult),
            ("-h", CliCommand::Help),
            ("--version", CliCommand::Version),
            ("/bogus", CliCommand::Unknown("/bogus".into())),
        ];

        for (token, expected) in cases {
            assert_eq!(CliArgs::parse(&args(&[token])).unwrap().command, expected);
        }
    }

    #[test]
    fn test_path_flags() {
        let parsed = CliArgs::parse(&args(&[
            "--results",
            "/tmp/r.json",
            "/history",
            "--questions",
            "q.json",
        ]))
        .unwrap();

        assert_eq!(parsed.command, CliCommand::History);
        assert_eq!(parsed.results.as_deref(), Some("/tmp/r.json"));

        let config = parsed.apply(Config::default());
        assert_eq!(config.questions_path, PathBuf::from("q.json"));
        assert_eq!(config.results_path, PathBuf::from("/tmp/r.json"));
    }

    #[test]
    fn test_missing_flag_value() {
        match CliArgs::parse(&args(&["--results"])) {
            Err(ExplainerError::Config(msg)) => assert!(msg.contains("--results")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_command_rejected() {
        assert!(CliArgs::parse(&args(&["/history", "/end"])).is_err());
    }

    #[test]
    fn test_usage_lists_commands() {
        let text = usage();
        for cmd in ["/start", "/end", "/history", "/clearresult", "--help", "--version"] {
            assert!(text.contains(cmd), "usage missing {}", cmd);
        }
    }
}
