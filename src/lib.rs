/// search-explainer library
///
/// Step-by-step linear and binary search for the classroom, with a JSON
/// history of every run.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod session;
pub mod store;

// Re-exports for convenience
pub use config::Config;
pub use error::{ExplainerError, Result};
pub use store::{QuestionStore, ResultLog};
