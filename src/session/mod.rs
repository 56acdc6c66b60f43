/// Interactive session
///
/// The menu loop, its console, and the history commands it shares with the
/// command line.

pub mod console;
pub mod controller;
pub mod history;
pub mod menu;

pub use console::Console;
pub use controller::{Session, SessionState};
pub use menu::{AlgorithmChoice, InputCommand};
