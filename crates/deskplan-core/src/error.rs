//! Error handling for DeskPlan
//!
//! Placement itself never fails: an infeasible layout is reported through
//! `ok = false` on the candidate. The errors here cover the boundaries where
//! outside data enters the engine:
//! - Catalog errors (unknown keys, bad dimensions, malformed documents)
//! - Layout input errors (unparseable wall sides, swings, priority modes)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Furniture catalog error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No catalog entry exists for the requested key
    #[error("Unknown furniture key: {key}")]
    UnknownFurniture {
        /// The key that was looked up.
        key: String,
    },

    /// A catalog entry has a non-positive footprint
    #[error("Invalid dimensions for '{key}': {w}x{d}")]
    InvalidDimensions {
        /// The offending catalog key.
        key: String,
        /// Width in millimeters.
        w: i64,
        /// Depth in millimeters.
        d: i64,
    },

    /// The catalog document could not be interpreted
    #[error("Malformed catalog: {reason}")]
    Malformed {
        /// What was wrong with the document.
        reason: String,
    },
}

/// Layout input error type
///
/// Raised when textual layout parameters cannot be mapped onto the
/// engine's enums.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Wall side was not one of L, R, T, B
    #[error("Invalid wall side: {value}")]
    InvalidSide {
        /// The rejected input.
        value: String,
    },

    /// Door swing was not "in" or "out"
    #[error("Invalid door swing: {value}")]
    InvalidSwing {
        /// The rejected input.
        value: String,
    },

    /// Priority mode was not recognised
    #[error("Invalid priority mode: {value}")]
    InvalidPriority {
        /// The rejected input.
        value: String,
    },

    /// Pattern name was not recognised
    #[error("Invalid layout pattern: {value}")]
    InvalidPattern {
        /// The rejected input.
        value: String,
    },
}

/// Main error type for DeskPlan
///
/// Unifies all error types into a single type for convenient error handling.
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Layout input error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a catalog error
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, Error::Catalog(_))
    }

    /// Check if this is a layout input error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
