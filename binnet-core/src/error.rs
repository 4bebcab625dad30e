//! Error types for binnet-core.

use thiserror::Error;

/// Result type alias for binnet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for binnet operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Waste type code outside the canonical `A P B G C T` set.
    #[error("unknown waste type code: {0:?}")]
    UnknownWasteCode(char),

    /// Capacity range whose lower bound exceeds the upper bound.
    #[error("invalid capacity range: {min}-{max}")]
    InvalidCapacityRange { min: i64, max: i64 },

    /// Capacity range text that is not `MIN-MAX`.
    #[error("capacity range must look like MIN-MAX, got {0:?}")]
    CapacitySyntax(String),
}
