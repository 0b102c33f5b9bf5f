//! Error types for oxchroma
//!
//! The numeric core never fails: degenerate input propagates as NaN or
//! infinity. These errors come from the checked constructors, preset lookup,
//! slice helpers and binary I/O.

use thiserror::Error;

/// Result type for oxchroma operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxchroma operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Regular spectral curve whose start is not below its end
    #[error("Invalid wavelength range: start {start} must be below end {end}")]
    InvalidRange { start: f64, end: f64 },

    /// Parallel tables of different lengths
    #[error("Length mismatch: {wavelengths} wavelengths, {amplitudes} amplitudes")]
    LengthMismatch {
        wavelengths: usize,
        amplitudes: usize,
    },

    /// Sampled table with fewer entries than interpolation needs
    #[error("Table too short: {len} entries, need at least {min}")]
    TableTooShort { len: usize, min: usize },

    /// Gamma must be positive and finite, break point non-negative
    #[error("Invalid transfer function: gamma {gamma}, break point {break_point}")]
    InvalidTransfer { gamma: f64, break_point: f64 },

    /// White point with zero luminance chromaticity
    #[error("Degenerate white point: ({x}, {y})")]
    DegenerateWhitePoint { x: f64, y: f64 },

    /// Unknown named color space
    #[error("Unknown color space preset: {0}")]
    UnknownPreset(String),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
