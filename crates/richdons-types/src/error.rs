//! Error types for the budget estimator

use thiserror::Error;

use crate::CategoryKind;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A category value that is not one of the known variants, or that has
    /// no entry in the pricing table in use.
    #[error("Unknown {kind}: {value}")]
    InvalidCategory { kind: CategoryKind, value: String },

    #[error("Invalid guest count: {0}")]
    InvalidGuestCount(String),

    #[error("Arithmetic overflow while computing {0}")]
    ArithmeticOverflow(String),

    #[error("Cannot {event} while {state}")]
    InvalidTransition {
        event: &'static str,
        state: &'static str,
    },

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Invalid pricing table: {0}")]
    InvalidPricing(String),

    #[error("Excel export error: {0}")]
    Export(String),
}

impl Error {
    pub fn invalid_category(kind: CategoryKind, value: impl Into<String>) -> Self {
        Error::InvalidCategory {
            kind,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
