//! Calculator module for editing and evaluating keypad expressions.
//!
//! This module provides functionality to:
//! - Edit the display buffer while keeping it a well-formed expression
//! - Detect operators and number segments
//! - Evaluate the buffer through a remote service and render the answer

mod buffer;
mod controller;
mod detection;
mod evaluation;

pub use buffer::DisplayBuffer;
pub use controller::{Calculator, Command};
pub use detection::{ends_with_operator, is_operator, open_segment};
pub use evaluation::{CalcResult, DEFAULT_ERROR, RESULT_DECIMALS, format_result};
