//! Resilient upstream HTTP client.
//!
//! # Responsibilities
//! - GET upstream endpoints and parse JSON or plain text
//! - Convert every transport, status and parse failure into a caller-supplied
//!   default value
//!
//! # Design Decisions
//! - Never returns an error; degradation is the contract
//! - One shared reqwest client: keep-alive connections are pooled per
//!   scheme/host and shared read-only across concurrent calls
//! - No timeout at this layer; plans bound failure, not latency

use serde_json::Value;

/// Non-throwing GET client shared by all data-fetch plans.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    http: reqwest::Client,
}

impl FetchClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// GET `url` and parse the body as JSON; `Value::Null` on any failure.
    pub async fn json(&self, url: &str) -> Value {
        self.json_or(url, Value::Null).await
    }

    /// GET `url` and parse the body as JSON; `default` on any failure.
    pub async fn json_or(&self, url: &str, default: Value) -> Value {
        match self.http.get(url).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<Value>().await {
                    Ok(value) => value,
                    Err(e) => {
                        tracing::warn!(url = %url, error = %e, "upstream body was not valid JSON");
                        default
                    }
                }
            }
            Ok(response) => {
                tracing::warn!(url = %url, status = %response.status(), "upstream returned non-success status");
                default
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "upstream request failed");
                default
            }
        }
    }

    /// GET `url` as plain text; `default` on any failure.
    pub async fn text_or(&self, url: &str, default: String) -> String {
        match self.http.get(url).send().await {
            Ok(response) if response.status().is_success() => match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "failed reading upstream text body");
                    default
                }
            },
            Ok(response) => {
                tracing::warn!(url = %url, status = %response.status(), "upstream returned non-success status");
                default
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "upstream request failed");
                default
            }
        }
    }
}
