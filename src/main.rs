// search-explainer - watch linear and binary search work, one step at a time
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::Context;
use search_explainer_lib::{
    cli::{self, CliArgs, CliCommand},
    core::Recorder,
    logging,
    session::{history, Console, Session},
    Config, QuestionStore, ResultLog,
};
use std::env;
use std::io;

fn main() -> anyhow::Result<()> {
    logging::init();

    // Grab whatever the user typed
    let args: Vec<String> = env::args().skip(1).collect();

    let parsed = match CliArgs::parse(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            println!("{}", cli::usage());
            std::process::exit(2);
        }
    };

    let config = parsed.apply(Config::from_env());
    tracing::debug!(?config, "resolved configuration");

    match parsed.command {
        CliCommand::Start => handle_start(&config),
        CliCommand::End => {
            println!("Goodbye!");
            Ok(())
        }
        CliCommand::History => {
            handle_history(&config);
            Ok(())
        }
        CliCommand::ClearResult => {
            handle_clear_result(&config);
            Ok(())
        }
        CliCommand::Version => {
            println!("search-explainer v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", cli::usage());
            Ok(())
        }
        CliCommand::Unknown(command) => {
            eprintln!("Unknown command: {}", command);
            println!("{}", cli::usage());
            Ok(())
        }
    }
}

fn handle_start(config: &Config) -> anyhow::Result<()> {
    let questions = QuestionStore::load(&config.questions_path);
    let recorder = Recorder::new(ResultLog::new(&config.results_path));

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session =
        Session::new(console, questions, recorder).context("failed to set up the session")?;

    session.run().context("interactive session failed")?;
    Ok(())
}

fn handle_history(config: &Config) {
    let log = ResultLog::new(&config.results_path);
    println!("{}", history::render(&log.list_all()));
}

fn handle_clear_result(config: &Config) {
    let log = ResultLog::new(&config.results_path);
    println!("{}", history::clear_last(&log));
}
