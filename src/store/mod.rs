/// Persistence for search-explainer
///
/// Questions come in from one JSON file, results go out to another.
/// Both are flat JSON, read and written whole.

pub mod models;
pub mod questions;
pub mod results;

pub use models::*;
pub use questions::QuestionStore;
pub use results::{LogContents, ResultLog};
