//! Query building blocks: pattern matching, state filtering, result
//! collection and column formatting.

mod collector;
mod filter;
pub mod format;
mod matcher;

pub use collector::{MatchResult, ResultCollector};
pub use filter::StateFilter;
pub use matcher::{PatternMatcher, compile_glob, contains_ignore_case, glob_matches};
