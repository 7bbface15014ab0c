//! Keypad calculator client.
//!
//! A display buffer is edited key by key and evaluated by a remote
//! calculation service over `POST /api/calculate`.

pub mod calculator;
pub mod config;
pub mod error;
pub mod keypad;
pub mod logging;
pub mod service;

pub use calculator::{CalcResult, Calculator, Command, DisplayBuffer};
pub use config::Config;
pub use error::{ConfigError, ServiceError};
pub use service::{EvaluationService, HttpEvaluationService, Outcome};
