//! A second-order IIR ("biquad") filter for per-sample audio processing.
//!
//! The filter derives five coefficients from a filter family, a normalized
//! cutoff, a Q factor and (for peak and shelf types) a gain in dB, using the
//! bilinear transform of the analog prototype. Samples run through a
//! transposed direct form II recurrence with two delay registers.
//!
//! ```
//! use biquad_filter::{Biquad, FilterType};
//!
//! let mut filter = Biquad::with_params(FilterType::LowPass, 0.1, 0.707, 0.0);
//! let block: Vec<f64> = [1.0, 0.0, 0.0].iter().map(|&x| filter.process(x)).collect();
//! assert_eq!(block[0], filter.coefficients().a0);
//! ```

pub mod error;
pub mod filters;
pub mod signal;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use filters::{Biquad, BiquadFilter, Coefficients, FilterParams, FilterType};
pub use signal::{Impulse, Signal, Sine};
