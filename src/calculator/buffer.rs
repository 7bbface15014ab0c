//! The display buffer holding the expression as it is typed.

use std::fmt;

use super::detection::{ends_with_operator, is_operator, open_segment};

/// The in-progress expression, exactly as the user typed it.
///
/// Never holds two operators in a row, never starts with an operator
/// other than `-`, and allows at most one `.` per number segment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key to the buffer.
    ///
    /// Returns `true` if the buffer changed. Rejected keys are ignored
    /// without any other effect.
    pub fn append(&mut self, key: char) -> bool {
        if is_operator(key) {
            if self.text.is_empty() {
                // Only a unary minus may open an expression
                if key != '-' {
                    return false;
                }
            } else if ends_with_operator(&self.text) {
                return false;
            }
        } else if key == '.' && open_segment(&self.text).contains('.') {
            return false;
        }

        self.text.push(key);
        true
    }

    /// Reset to the empty string.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Remove the last character, if any.
    pub fn delete_last(&mut self) {
        self.text.pop();
    }

    /// Overwrite the whole buffer, e.g. with an evaluation result.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for DisplayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
