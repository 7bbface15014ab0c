//! Operator detection for the display buffer.
//!
//! Knows which characters act as operators and how the buffer splits
//! into number segments around them.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches any single operator character. Used to split the buffer
    /// into number segments.
    static ref OPERATOR_SPLIT: Regex = Regex::new(r"[/*\-+]").unwrap();
}

/// Check if a character is one of `+ - * /`.
pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Check if the buffer currently ends with an operator character.
pub fn ends_with_operator(buffer: &str) -> bool {
    buffer.chars().next_back().is_some_and(is_operator)
}

/// Return the rightmost (still open) number segment of the buffer.
///
/// This is everything after the last operator, or the whole buffer
/// when there is no operator at all. It is empty right after an operator.
pub fn open_segment(buffer: &str) -> &str {
    OPERATOR_SPLIT.split(buffer).last().unwrap_or(buffer)
}
