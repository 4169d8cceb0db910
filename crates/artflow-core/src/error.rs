//! Core error types for artflow-core.
//!
//! This module defines the error hierarchy using thiserror. Errors fall into
//! four families: storage, configuration, authentication and input
//! validation, with [`CoreError`] as the umbrella the CLI reports from.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for artflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
///
/// A missing or corrupt user snapshot is not an error at this level: the
/// database reads it back as absent. These variants cover the database file
/// itself being unusable.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the database file
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Snapshot could not be serialized for writing
    #[error("Snapshot encode failed: {0}")]
    Encode(String),

    /// The data directory could not be created
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::QueryFailed(err.to_string())
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Authentication errors.
///
/// Unknown email and bad password both surface as [`AuthError::InvalidCredentials`]
/// so sign-in failures do not reveal which accounts exist.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Sign-up with an email that already has an account
    #[error("An account with email '{0}' already exists")]
    DuplicateEmail(String),

    /// Credential mismatch at sign-in
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    Hash(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Malformed email address
    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),

    /// Password below the minimum length
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    /// Anxiety level outside the 1..=10 scale
    #[error("Anxiety level {value} is outside the 1..=10 scale")]
    AnxietyOutOfRange { value: u8 },

    /// Activity title not present in the catalog
    #[error("Unknown activity: '{0}'")]
    UnknownActivity(String),

    /// Duration not offered as a preset
    #[error("Duration {secs}s is not one of the configured presets")]
    InvalidDuration { secs: u32 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
