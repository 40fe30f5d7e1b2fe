//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
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
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// Environment overrides (`GAS_URL`, `WORKER_KEY`) are applied after
/// parsing and before validation, matching how the original worker
/// deployment supplied these as secrets.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => GatewayConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut GatewayConfig) {
    if let Ok(url) = std::env::var("GAS_URL") {
        if !url.is_empty() {
            config.upstream.url = Some(url);
        }
    }
    if let Ok(key) = std::env::var("WORKER_KEY") {
        if !key.is_empty() {
            config.security.worker_key = Some(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_when_no_file() {
        std::env::remove_var("GAS_URL");
        std::env::remove_var("WORKER_KEY");

        let config = load_config(None).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert!(config.upstream.url.is_none());
        assert!(config.security.worker_key.is_none());
    }

    #[test]
    #[serial]
    fn env_overrides_take_precedence() {
        std::env::set_var("GAS_URL", "https://script.example.com/exec");
        std::env::set_var("WORKER_KEY", "hunter2");

        let config = load_config(None).unwrap();
        assert_eq!(
            config.upstream.url.as_deref(),
            Some("https://script.example.com/exec")
        );
        assert_eq!(config.security.worker_key.as_deref(), Some("hunter2"));

        std::env::remove_var("GAS_URL");
        std::env::remove_var("WORKER_KEY");
    }

    #[test]
    #[serial]
    fn parses_toml_config() {
        std::env::remove_var("GAS_URL");
        std::env::remove_var("WORKER_KEY");

        let dir = std::env::temp_dir();
        let path = dir.join("submit-gateway-loader-test.toml");
        fs::write(
            &path,
            r#"
[listener]
bind_address = "127.0.0.1:9999"

[upstream]
url = "https://script.example.com/exec"
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9999");
        assert!(config.upstream_url().is_some());

        let _ = fs::remove_file(&path);
    }
}
