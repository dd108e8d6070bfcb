//! Configuration validation.
//!
//! Semantic checks applied after parsing; all failures are collected so the
//! operator sees every problem at once.

use thiserror::Error;

use crate::config::schema::UnfurlerConfig;

/// A single semantic problem in a parsed configuration.
#[derive(Debug, Error, PartialEq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

/// Validate a parsed configuration. Returns all problems found.
pub fn validate_config(config: &UnfurlerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("api.mempool", &config.api.mempool),
        ("api.esplora", &config.api.esplora),
    ] {
        match url::Url::parse(value) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => errors.push(ValidationError {
                field,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            }),
            Err(e) => errors.push(ValidationError {
                field,
                reason: format!("not a valid URL: {e}"),
            }),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
