use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("The UI configuration is not valid JSON: {0}")]
    InvalidJson(String),
}

impl From<serde_json_wasm::de::Error> for ConfigError {
    fn from(value: serde_json_wasm::de::Error) -> Self {
        ConfigError::InvalidJson(value.to_string())
    }
}
