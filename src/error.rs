use std::path::PathBuf;

use thiserror::Error;

/// The calculation service could not produce an answer.
///
/// A service that answers with an error status is not a `ServiceError`;
/// that is a regular [`Outcome::Failure`](crate::service::Outcome::Failure).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to calculation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response from calculation service: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("invalid service url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
