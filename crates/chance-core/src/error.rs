use thiserror::Error;

/// Errors emitted by the Chance engine.
#[derive(Debug, Error)]
pub enum ChanceError {
    /// A numeric bound is outside its declared domain.
    #[error("range error: {0}")]
    Range(String),
    /// A length that must be positive was not.
    #[error("length error: {0}")]
    Length(String),
    /// A digit sequence or numeral has the wrong shape.
    #[error("validation error: {0}")]
    Validation(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by the engine.
pub type Result<T> = std::result::Result<T, ChanceError>;
