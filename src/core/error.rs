use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Unknown character: {0}")]
    UnknownCharacter(crate::core::types::CharacterId),

    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
