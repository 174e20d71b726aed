use crate::model::NoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlitzError {
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Package error: {0}")]
    Package(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BlitzError>;
