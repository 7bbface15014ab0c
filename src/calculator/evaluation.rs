//! Evaluation results and their rendering for the display.

/// Text shown when the service gave no usable message.
pub const DEFAULT_ERROR: &str = "Error";

/// Decimal places kept when rendering a result.
pub const RESULT_DECIMALS: usize = 10;

/// Result of evaluating the buffer through the calculation service.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// The service returned a number.
    Success {
        /// The expression that was sent.
        expression: String,
        /// The raw value from the service.
        value: f64,
        /// The rounded value as it is written back to the display.
        display_result: String,
    },
    /// The service reported a failure or could not be reached.
    Error {
        /// The expression that was sent.
        expression: String,
        /// Message written back to the display.
        message: String,
    },
}

impl CalcResult {
    pub fn success(expression: impl Into<String>, value: f64) -> Self {
        Self::Success {
            expression: expression.into(),
            display_result: format_result(value),
            value,
        }
    }

    pub fn error(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            expression: expression.into(),
            message: message.into(),
        }
    }

    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }
}

/// Render a service result for the display.
///
/// Rounds to [`RESULT_DECIMALS`] decimal places and strips trailing zeros,
/// so floating point noise such as `0.30000000000000004` reads as `0.3`.
pub fn format_result(value: f64) -> String {
    let formatted = format!("{:.*}", RESULT_DECIMALS, value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
