//! Error types for the mycal application.
//!
//! Store mutations are total functions and never fail; these errors cover
//! the outer surface only (CLI feedback, mode gating, login, serialization).

use std::io;

use thiserror::Error;

/// The main error type for the mycal application.
#[derive(Error, Debug)]
pub enum CalError {
    /// Errors related to file I/O operations (config loading).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Event was not found when an operation needed a target.
    #[error("Event not found: {id}")]
    EventNotFound { id: String },

    /// An action was attempted in the wrong UI mode, e.g. adding an event
    /// while an edit session is active.
    #[error("Cannot {action} while {mode}")]
    WrongMode { action: String, mode: String },

    /// The authentication collaborator reported a login failure.
    #[error("Login failed: {message}")]
    AuthFailed { message: String },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}
