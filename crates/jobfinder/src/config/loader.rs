use std::path::{Path, PathBuf};

use crate::config::schema::ClientConfig;
use crate::error::ConfigError;

const CONFIG_DIR_NAME: &str = "jobfinder";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Platform config location, e.g. `~/.config/jobfinder/config.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClientConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

/// Parses YAML (or JSON, which YAML accepts) and validates the result.
pub fn load_config_from_str(content: &str) -> Result<ClientConfig, ConfigError> {
    let config: ClientConfig = if content.trim().is_empty() {
        ClientConfig::default()
    } else {
        serde_yaml::from_str(content)?
    };

    validate_config(&config)?;

    Ok(config)
}

/// Loads the explicit path if given, else the platform default if it exists,
/// else the built-in defaults. Environment overrides are applied last.
pub fn load_config_or_default(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(default_path) => {
                log::debug!("Loading config from {}", default_path.display());
                load_config(default_path)?
            }
            None => ClientConfig::default(),
        },
    };

    config.apply_env_overrides();
    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &ClientConfig) -> Result<(), ConfigError> {
    let url = reqwest::Url::parse(&config.api_url).map_err(|e| ConfigError::Validation {
        message: format!("Invalid apiUrl '{}': {}", config.api_url, e),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            message: format!("apiUrl must use http or https, got '{}'", url.scheme()),
        });
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation {
            message: "connectTimeoutSecs must be greater than 0".to_string(),
        });
    }

    if config.request_timeout_secs == 0 {
        return Err(ConfigError::Validation {
            message: "requestTimeoutSecs must be greater than 0".to_string(),
        });
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation {
            message: "userAgent must not be empty".to_string(),
        });
    }

    Ok(())
}
