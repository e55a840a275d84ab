//! Unified application error type.
//! The engines (timeline, duration, travel), the config layer and the CLI
//! all return AppError to keep the error handling consistent.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / decoding
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid log data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Engine errors
    // ---------------------------
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Unknown status code: {0}")]
    UnknownStatusCode(String),

    #[error("Invalid average speed: {0} km/h (must be greater than zero)")]
    InvalidSpeed(f64),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No log found with id {0}")]
    LogNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
