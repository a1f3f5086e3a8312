//! Error types for glass property evaluation.
//!
//! Every operation in this crate is a pure function call, so none of these
//! errors are transient. They describe either malformed catalog data or a
//! lookup that has no answer.

use thiserror::Error;

/// Errors from glass property queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GlassError {
    #[error("Unknown dispersion formula: {0}")]
    UnknownFormula(String),

    #[error("Unknown derived quantity: {0}")]
    UnknownQuantity(String),

    #[error("Unknown spectral line: {0}")]
    UnknownSpectralLine(String),

    #[error("Unknown glass status: {0}")]
    UnknownStatus(String),

    #[error("Coefficient index {index} is out of bounds (capacity {capacity})")]
    CoefficientIndex { index: usize, capacity: usize },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid sample thickness: {0} mm")]
    InvalidThickness(f64),

    #[error("Wavelengths must be strictly increasing (violated at index {index})")]
    NonMonotonic { index: usize },

    #[error("Parallel sequences differ in length: {expected} vs {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Glass not found: {0}")]
    GlassNotFound(String),
}

/// Shorthand result type for this crate.
pub type Result<T> = std::result::Result<T, GlassError>;
