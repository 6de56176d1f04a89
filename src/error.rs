//! Error types for Tourkit

use crate::types::TourId;
use thiserror::Error;

/// Main error type for Tourkit
#[derive(Error, Debug)]
pub enum TourkitError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid price amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Invalid currency registry: {0}")]
    InvalidRegistry(String),

    #[error("Comparison list is full: {count} of {limit} tours already selected")]
    ComparisonFull { count: usize, limit: usize },

    #[error("Tour {0} is already selected for comparison")]
    AlreadySelected(TourId),

    #[error("Tour {0} is not selected for comparison")]
    NotSelected(TourId),

    #[error("Tour not found: {0}")]
    TourNotFound(TourId),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for Tourkit operations
pub type Result<T> = std::result::Result<T, TourkitError>;
