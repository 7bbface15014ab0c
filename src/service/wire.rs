//! JSON bodies exchanged with `POST /api/calculate`.

use serde::{Deserialize, Serialize};

/// Request body: the raw buffer contents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub expression: String,
}

/// Body of a success-class response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SuccessBody {
    pub result: f64,
}

/// Body of any other response. The message is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FailureBody {
    #[serde(default)]
    pub error: Option<String>,
}
