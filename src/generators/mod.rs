// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
pub mod entropy;
pub mod password;
pub mod rng;
pub mod sampler;

pub use password::PasswordGenerator;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// Caller-supplied parameters violate a precondition.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// An invariant the generator guarantees was broken. Never carries
    /// password material.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
