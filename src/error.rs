use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got `{value}`")]
    InvalidPort { value: String },
    #[error("CORS origin `{origin}` is not a valid header value")]
    InvalidOrigin { origin: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
