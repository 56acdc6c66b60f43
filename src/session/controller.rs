/// Interactive session state machine
///
/// Two working states: picking a list (`SelectInput`) and picking an
/// algorithm for that list (`SelectAlgorithm`). `Exited` is terminal. Every
/// step reads at most one menu line and returns the next state; running out
/// of input always leads to `Exited`.

use crate::core::{
    binary_search, compare, linear_search, Comparison, InputParser, LabelMatcher, Method,
    Recorder, RunMode, SearchResult, Verdict,
};
use crate::error::Result;
use crate::session::console::Console;
use crate::session::history;
use crate::session::menu::{self, AlgorithmChoice, InputCommand};
use crate::store::{QuestionSet, SearchInput};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    SelectInput,
    SelectAlgorithm(SearchInput),
    Exited,
}

pub struct Session<R, W> {
    console: Console<R, W>,
    questions: QuestionSet,
    recorder: Recorder,
    parser: InputParser,
    matcher: LabelMatcher,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, questions: QuestionSet, recorder: Recorder) -> Result<Self> {
        Ok(Self {
            console,
            questions,
            recorder,
            parser: InputParser::new()?,
            matcher: LabelMatcher::new(),
        })
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        self.console.say(&menu::welcome())?;

        if self.questions.is_empty() {
            self.console.say(
                "No saved questions were loaded. You can still type 'manual' or enter numbers directly.",
            )?;
        }

        let mut state = SessionState::SelectInput;
        while state != SessionState::Exited {
            state = self.step(state)?;
        }

        info!("session ended");
        Ok(())
    }

    /// Advance the machine by one transition
    pub fn step(&mut self, state: SessionState) -> Result<SessionState> {
        match state {
            SessionState::SelectInput => self.select_input(),
            SessionState::SelectAlgorithm(input) => self.select_algorithm(input),
            SessionState::Exited => Ok(SessionState::Exited),
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn select_input(&mut self) -> Result<SessionState> {
        let menu_text = menu::input_menu(&self.questions);
        self.console.say(&menu_text)?;

        let Some(line) = self.console.prompt("\nYour choice: ")? else {
            return self.exit();
        };

        match InputCommand::parse(&line, &self.questions, &self.parser) {
            InputCommand::Question(label) => {
                let numbers = self.questions.get(&label).unwrap_or_default();
                debug!(%label, len = numbers.len(), "question selected");
                Ok(SessionState::SelectAlgorithm(SearchInput::from_question(
                    &label, numbers,
                )))
            }
            InputCommand::Manual => match self.read_manual_list()? {
                Some(numbers) => Ok(SessionState::SelectAlgorithm(SearchInput::manual(numbers))),
                None => self.exit(),
            },
            InputCommand::Inline { raw, numbers } => {
                Ok(SessionState::SelectAlgorithm(SearchInput::inline(&raw, numbers)))
            }
            InputCommand::History => {
                let text = history::render(&self.recorder.log().list_all());
                self.console.say(&text)?;
                Ok(SessionState::SelectInput)
            }
            InputCommand::ClearResult => {
                let text = history::clear_last(self.recorder.log());
                self.console.say(&text)?;
                Ok(SessionState::SelectInput)
            }
            InputCommand::Exit => self.exit(),
            InputCommand::Empty => Ok(SessionState::SelectInput),
            InputCommand::Unknown(raw) => {
                let message = match self.matcher.suggest(&self.questions, &raw) {
                    Some(label) => format!("Unknown option '{}'. Did you mean '{}'?", raw, label),
                    None => format!("Unknown option '{}'. Please try again.", raw),
                };
                self.console.say(&message)?;
                Ok(SessionState::SelectInput)
            }
        }
    }

    fn select_algorithm(&mut self, input: SearchInput) -> Result<SessionState> {
        self.console.say(&menu::algorithm_menu(&input))?;

        let Some(line) = self.console.prompt("\nChoose an option (1-5): ")? else {
            return self.exit();
        };

        let choice = AlgorithmChoice::parse(&line);
        let method = match choice {
            AlgorithmChoice::Linear => Some(Method::Linear),
            AlgorithmChoice::Binary => Some(Method::Binary),
            AlgorithmChoice::Compare => None,
            AlgorithmChoice::Back => return Ok(SessionState::SelectInput),
            AlgorithmChoice::Exit => return self.exit(),
            AlgorithmChoice::Unknown(raw) => {
                self.console
                    .say(&format!("Invalid option '{}'. Pick 1-5.", raw))?;
                return Ok(SessionState::SelectAlgorithm(input));
            }
        };

        let Some(target) = self.read_target()? else {
            return self.exit();
        };

        match method {
            Some(method) => self.run_single(&input, method, target)?,
            None => self.run_compare(&input, target)?,
        }

        Ok(SessionState::SelectAlgorithm(input))
    }

    /// Prompt until a non-empty all-integer list is given
    fn read_manual_list(&mut self) -> Result<Option<Vec<i64>>> {
        loop {
            let Some(line) = self
                .console
                .prompt("\nEnter list of numbers (comma or space separated): ")?
            else {
                return Ok(None);
            };

            match self.parser.parse_numbers(&line) {
                Ok(numbers) => return Ok(Some(numbers)),
                Err(e) => self.console.say(&format!("{} Try again.", e.user_message()))?,
            }
        }
    }

    /// Prompt until an integer target is given
    fn read_target(&mut self) -> Result<Option<i64>> {
        loop {
            let Some(line) = self.console.prompt("Enter the number to search for: ")? else {
                return Ok(None);
            };

            match self.parser.parse_target(&line) {
                Ok(target) => return Ok(Some(target)),
                Err(e) => self.console.say(&format!("{} Try again.", e.user_message()))?,
            }
        }
    }

    fn run_single(&mut self, input: &SearchInput, method: Method, target: i64) -> Result<()> {
        let result = match method {
            Method::Linear => linear_search(&input.numbers, target),
            Method::Binary => binary_search(&input.numbers, target),
        };

        self.show_run(input, &result)?;
        self.save(&input.label, &result, RunMode::Single)
    }

    fn run_compare(&mut self, input: &SearchInput, target: i64) -> Result<()> {
        let comparison = compare(&input.numbers, target);

        self.show_run(input, &comparison.linear)?;
        self.show_run(input, &comparison.binary)?;
        self.show_comparison(&comparison)?;

        // Each run is logged on its own; one failing does not skip the other
        self.save(&input.label, &comparison.linear, RunMode::Compare)?;
        self.save(&input.label, &comparison.binary, RunMode::Compare)
    }

    fn show_run(&mut self, input: &SearchInput, result: &SearchResult) -> Result<()> {
        self.console.say(&format!("\n--- {} ---", result.method))?;

        match &result.sorted {
            Some(sorted) => {
                self.console.say(&format!("Sorted list: {:?}", sorted))?;
                self.console
                    .say("Note: binary search indexes refer to the sorted list.")?;
            }
            None => self.console.say(&format!("List: {:?}", input.numbers))?,
        }

        if result.trace.is_empty() {
            self.console.say("The list is empty; nothing to inspect.")?;
        }
        for step in &result.trace {
            self.console.say(&step.to_string())?;
        }

        self.console.say(&format!("Result: {}", describe(result)))?;
        self.console.say(&format!(
            "Time complexity: {} | Space complexity: {}",
            result.method.time_complexity(),
            result.method.space_complexity()
        ))
    }

    fn show_comparison(&mut self, comparison: &Comparison) -> Result<()> {
        self.console.say(&format!(
            "\n=== Comparison (target {}) ===",
            comparison.linear.target
        ))?;
        self.console
            .say(&format!("{:<15} {:<32} {}", "Method", "Result", "Steps"))?;

        for result in [&comparison.linear, &comparison.binary] {
            self.console.say(&format!(
                "{:<15} {:<32} {}",
                result.method.name(),
                outcome_text(result),
                result.steps
            ))?;
        }

        let verdict = match comparison.verdict() {
            Verdict::Faster(method) => format!("{} needed fewer steps.", method),
            Verdict::Tie => "Both methods needed the same number of steps.".to_string(),
        };
        self.console.say(&verdict)
    }

    // Log failures are reported and the session carries on
    fn save(&mut self, label: &str, result: &SearchResult, mode: RunMode) -> Result<()> {
        match self.recorder.record(label, result, mode) {
            Ok(record) => {
                debug!(question = %record.question, method = %record.method, "result saved");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "result not saved");
                self.console
                    .say(&format!("Warning: result not saved. {}", e.user_message()))
            }
        }
    }

    fn exit(&mut self) -> Result<SessionState> {
        self.console.say("Goodbye!")?;
        Ok(SessionState::Exited)
    }
}

fn outcome_text(result: &SearchResult) -> String {
    match (result.index, result.method) {
        (Some(i), Method::Binary) => format!("Found at index {} (sorted)", i),
        (Some(i), Method::Linear) => format!("Found at index {}", i),
        (None, _) => "Not Found".to_string(),
    }
}

fn describe(result: &SearchResult) -> String {
    let plural = if result.steps == 1 { "" } else { "s" };
    format!(
        "{} after {} step{}.",
        outcome_text(result),
        result.steps,
        plural
    )
}
