use thiserror::Error;

use crate::routes::LoadError;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
