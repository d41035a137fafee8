//! Error types for the clinic_core library.
//!
//! The reservation state machine never produces these; they surface only
//! when loading configuration or parsing outside input.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for clinic_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Time outside the fixed slot grid
    #[error("Invalid time slot: {0}")]
    InvalidTimeSlot(String),

    /// Date that is malformed or not bookable
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Treatment name not present in the catalog
    #[error("Unknown treatment: {0}")]
    UnknownTreatment(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
