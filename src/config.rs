use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_SECRETS_PATH: &str = ".streamlit/secrets.toml";

#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    #[serde(rename = "GEMINI_API_KEY", default)]
    gemini_api_key: Option<String>,
}

/// Process-wide settings, read once at start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub api_key: Option<String>,
}

impl Settings {
    /// Reads the credential from the environment, then from the secrets file.
    /// `secrets` names a file that must exist; `None` tries the default path
    /// and tolerates its absence.
    pub fn load(secrets: Option<&Path>) -> Result<Self, ConfigError> {
        let env_key = std::env::var(API_KEY_VAR).ok();
        Self::from_sources(env_key, secrets)
    }

    pub fn from_sources(env_key: Option<String>, secrets: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(key) = non_blank(env_key) {
            tracing::debug!("credential taken from {API_KEY_VAR}");
            return Ok(Self { api_key: Some(key) });
        }

        let file = match secrets {
            Some(path) => Some(read_secrets(path)?),
            None => {
                let path = PathBuf::from(DEFAULT_SECRETS_PATH);
                if path.is_file() {
                    Some(read_secrets(&path)?)
                } else {
                    None
                }
            }
        };

        Ok(Self {
            api_key: file.and_then(|f| non_blank(f.gemini_api_key)),
        })
    }
}

fn read_secrets(path: &Path) -> Result<SecretsFile, ConfigError> {
    let shown = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: shown.clone(),
        source,
    })?;
    let parsed: SecretsFile = toml::from_str(&content).map_err(|source| ConfigError::Toml {
        path: shown.clone(),
        source,
    })?;
    tracing::debug!(path = %shown, "loaded secrets file");
    Ok(parsed)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
