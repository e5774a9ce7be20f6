//! error type shared by the parsing, configuration and logging layers
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BalanceError {
    /// the equation text does not contain exactly one '=' separator
    #[error("invalid equation: expected exactly one '=', found {separators}")]
    InvalidEquation { separators: usize },
    #[error("unknown item type: {0}")]
    UnknownItem(String),
    /// unit weight override that is not an integer
    #[error("invalid weight value: {0:?}")]
    InvalidWeight(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("loglevel must be debug, info, warn, error, off or none, got {0:?}")]
    InvalidLogLevel(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
