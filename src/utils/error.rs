use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeferredError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid config value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Logger initialization failed: {message}")]
    LoggerInitError { message: String },
}

pub type Result<T> = std::result::Result<T, DeferredError>;
