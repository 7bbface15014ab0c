//! Calculation service client over HTTP.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};

use super::wire::{CalculateRequest, FailureBody, SuccessBody};
use super::{EvaluationService, Outcome};
use crate::calculator::DEFAULT_ERROR;
use crate::error::ServiceError;

/// Path of the calculate endpoint, relative to the service base url.
pub const CALCULATE_PATH: &str = "api/calculate";

/// Talks to a calculation service at `base_url` with `POST /api/calculate`.
#[derive(Clone, Debug)]
pub struct HttpEvaluationService {
    client: Client,
    endpoint: Url,
}

impl HttpEvaluationService {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// Without a timeout the request waits for as long as the transport does.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self::with_client(base_url, builder.build()?)
    }

    /// Create a client that sends through a preconfigured `reqwest::Client`.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self, ServiceError> {
        Ok(Self {
            client,
            endpoint: endpoint_url(base_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl EvaluationService for HttpEvaluationService {
    async fn calculate(&self, expression: &str) -> Result<Outcome, ServiceError> {
        let request = CalculateRequest {
            expression: expression.to_string(),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%status, bytes = body.len(), "calculation service responded");

        if status.is_success() {
            let body: SuccessBody = serde_json::from_slice(&body)?;
            Ok(Outcome::Success(body.result))
        } else {
            let body: FailureBody = serde_json::from_slice(&body)?;
            let message = body
                .error
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR.to_string());
            Ok(Outcome::Failure(message))
        }
    }
}

/// Join the calculate path onto the base url, keeping any path prefix.
fn endpoint_url(base_url: &str) -> Result<Url, ServiceError> {
    let invalid = |reason: String| ServiceError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", base.scheme())));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(CALCULATE_PATH).map_err(|e| invalid(e.to_string()))
}
