//! Terminal output formatting
//!
//! Display utilities for the line-mode front-end and CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_rejection, print_round, print_score_result};
