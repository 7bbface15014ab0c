//! Client side of the remote calculation service.
//!
//! The service takes an expression string and answers with either a
//! number or an error message. This module provides:
//! - The [`EvaluationService`] seam the calculator talks through
//! - The JSON wire format
//! - An HTTP implementation

mod http;
pub mod wire;

use std::future::Future;

use crate::error::ServiceError;

pub use http::{CALCULATE_PATH, HttpEvaluationService};

/// What the service answered.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Success-class status with a numeric result.
    Success(f64),
    /// Any other status, with the service's message or the default text.
    Failure(String),
}

/// Something that can evaluate an expression remotely.
///
/// `Err` means no answer was obtained at all (network failure, unreadable body).
pub trait EvaluationService {
    fn calculate(
        &self,
        expression: &str,
    ) -> impl Future<Output = Result<Outcome, ServiceError>> + Send;
}
