//! The calculator controller: one display buffer plus the service that
//! evaluates it.

use tracing::{error, info};

use super::buffer::DisplayBuffer;
use super::evaluation::{CalcResult, DEFAULT_ERROR};
use crate::service::{EvaluationService, Outcome};

/// A single keypad action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Type a digit, `.`, or operator.
    Append(char),
    /// Empty the display.
    Clear,
    /// Remove the last character.
    DeleteLast,
    /// Send the expression to the service and show the answer.
    Evaluate,
}

/// Owns the display buffer and routes keypad commands to it.
///
/// `evaluate` borrows the calculator mutably for the whole round trip, so
/// no edit or second evaluation can run while a request is in flight.
pub struct Calculator<S> {
    buffer: DisplayBuffer,
    service: S,
}

impl<S: EvaluationService> Calculator<S> {
    pub fn new(service: S) -> Self {
        Self {
            buffer: DisplayBuffer::new(),
            service,
        }
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Run one command. Returns the evaluation result for `Evaluate`
    /// on a non-empty buffer, `None` otherwise.
    pub async fn dispatch(&mut self, command: Command) -> Option<CalcResult> {
        match command {
            Command::Append(key) => {
                self.append(key);
                None
            }
            Command::Clear => {
                self.clear();
                None
            }
            Command::DeleteLast => {
                self.delete_last();
                None
            }
            Command::Evaluate => self.evaluate().await,
        }
    }

    /// Append a key; invalid keys are silently ignored.
    pub fn append(&mut self, key: char) {
        self.buffer.append(key);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn delete_last(&mut self) {
        self.buffer.delete_last();
    }

    /// Evaluate the buffer through the service and replace it with the
    /// answer. Does nothing on an empty buffer.
    pub async fn evaluate(&mut self) -> Option<CalcResult> {
        if self.buffer.is_empty() {
            return None;
        }

        let expression = self.buffer.as_str().to_string();
        info!(%expression, "sending expression to calculation service");

        let result = match self.service.calculate(&expression).await {
            Ok(Outcome::Success(value)) => {
                info!(%expression, value, "received result from calculation service");
                CalcResult::success(expression, value)
            }
            Ok(Outcome::Failure(message)) => {
                info!(%expression, %message, "received failure from calculation service");
                error!(%message, "calculation error");
                CalcResult::error(expression, message)
            }
            Err(e) => {
                error!(error = %e, "calculation request failed");
                CalcResult::error(expression, DEFAULT_ERROR)
            }
        };

        self.buffer.replace(result.display());
        Some(result)
    }
}
