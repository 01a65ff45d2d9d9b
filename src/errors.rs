use mongodb::error::Error as MongoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database connection is not established")]
    NotConnected,

    #[error("Database error: {0}")]
    Database(#[from] MongoError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<anyhow::Error> for StoreError {
    fn from(error: anyhow::Error) -> Self {
        StoreError::Config(error.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
