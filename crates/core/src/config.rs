use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    assets::data_dir_from,
    completion::ExecutionSettings,
    model::{ApiKey, ModelConfig},
};

pub const MODEL_VAR: &str = "MY_AZURE_OPENAI_MODEL";
pub const ENDPOINT_VAR: &str = "MY_AZURE_OPENAI_ENDPOINT";
pub const API_KEY_VAR: &str = "MY_AZURE_OPENAI_API_KEY";
pub const API_VERSION_VAR: &str = "MY_AZURE_OPENAI_API_VERSION";
pub const HISTORY_FILE_VAR: &str = "MY_CHAT_HISTORY_FILE";

pub const DEFAULT_MODEL: &str = "gpt-35-turbo";
pub const DEFAULT_API_VERSION: &str = "2024-06-01";
pub const DEFAULT_HISTORY_FILE: &str = "MyChatHistory.txt";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("Invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub settings: ExecutionSettings,
    pub history_path: PathBuf,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`. Blank values count as unset.
    #[instrument(skip(lookup))]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint = get(ENDPOINT_VAR);
        let api_key = get(API_KEY_VAR);
        let (endpoint, api_key) = match (endpoint, api_key) {
            (Some(endpoint), Some(api_key)) => (endpoint, api_key),
            (endpoint, api_key) => {
                let mut missing = Vec::new();
                if endpoint.is_none() {
                    missing.push(ENDPOINT_VAR);
                }
                if api_key.is_none() {
                    missing.push(API_KEY_VAR);
                }
                return Err(ConfigError::Missing(missing));
            }
        };

        url::Url::parse(&endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            endpoint: endpoint.clone(),
            source,
        })?;

        let model = ModelConfig {
            name: get(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: ApiKey::new(api_key),
            api_version: get(API_VERSION_VAR).unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        };

        let history_path = match get(HISTORY_FILE_VAR) {
            Some(path) => expand_path(&path),
            None => data_dir_from(&lookup).join(DEFAULT_HISTORY_FILE),
        };

        debug!(model = %model.name, endpoint = %model.endpoint, history = %history_path.display(), "Loaded configuration");

        Ok(Self {
            settings: ExecutionSettings::from(&model),
            model,
            history_path,
        })
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
