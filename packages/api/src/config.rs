use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MODEL_PATH: &str = "iris_model.json";

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// Location of the artifact written by the trainer
    pub model_path: PathBuf,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(ServiceConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: match lookup("PORT") {
                Some(port) => port
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
                None => DEFAULT_PORT,
            },
            model_path: lookup("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for: {0}")]
    InvalidValue(String),
}
