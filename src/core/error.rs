use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalkthroughError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Unknown move: {0}")]
    UnknownMove(String),
}

pub type Result<T> = std::result::Result<T, WalkthroughError>;
