use thiserror::Error;

/// Failures talking to the property search service.
///
/// The `Display` text is what ends up in the chat thread after `"Error: "`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Server returned {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid endpoint url: {0}")]
    Url(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
