//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::UnfurlerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<UnfurlerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: UnfurlerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: UnfurlerConfig = toml::from_str("").unwrap();
        assert_eq!(config, UnfurlerConfig::default());
    }

    #[test]
    fn partial_toml_overrides_one_section() {
        let config: UnfurlerConfig = toml::from_str(
            r#"
            [api]
            mempool = "http://localhost:8999/api/v1"
            esplora = "http://localhost:3000/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.mempool, "http://localhost:8999/api/v1");
        assert_eq!(config.observability.log_level, "info");
    }
}
