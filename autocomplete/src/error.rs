//! Error types for the fallible parts of the crate: terminal I/O and
//! configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid autocomplete config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid color `{0}`")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
