/// Core functionality modules
///
/// Contains the search algorithms and the pieces that feed and record them:
/// input parsing, label suggestions, and result recording.

pub mod input_parser;
pub mod label_matcher;
pub mod recorder;
pub mod searcher;

pub use input_parser::InputParser;
pub use label_matcher::LabelMatcher;
pub use recorder::{Recorder, RunMode};
pub use searcher::{
    binary_search, compare, linear_search, Comparison, Method, SearchResult, TraceStep, Verdict,
};
