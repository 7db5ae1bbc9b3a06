//! Error type for the validated and parsing parts of the API.
//!
//! The filter arithmetic itself never fails. Errors only come from
//! [`FilterParams::validate`](crate::FilterParams::validate) and from parsing
//! a [`FilterType`](crate::FilterType) by name.

use thiserror::Error;

/// Errors reported when checking filter parameters or parsing filter names.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The name did not match any filter type
    #[error("unknown filter type: '{0}'")]
    UnknownFilterType(String),
    /// Normalized cutoff outside the open interval (0, 0.5)
    #[error("cutoff {0} is outside the open interval (0, 0.5)")]
    CutoffOutOfRange(f64),
    /// Q must be finite and strictly positive
    #[error("q must be finite and greater than zero, got {0}")]
    InvalidQ(f64),
    /// Peak gain must be a finite number of decibels
    #[error("peak gain must be finite, got {0} dB")]
    NonFiniteGain(f64),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
