//! Error types for host adapters.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid repository: {0}")]
    InvalidRepository(String),

    #[error("registration failed for {target}: {message}")]
    Registration { target: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
