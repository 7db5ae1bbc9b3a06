//! The four user-facing filter parameters as one value.

use super::{Coefficients, FilterType};
use crate::{Error, Result};

/// Filter family, normalized cutoff, Q and peak gain.
///
/// `cutoff` is `frequency / sample_rate`; the usable range is the open
/// interval `(0, 0.5)`. `peak_gain` is in decibels and only affects
/// [`FilterType::Peak`], [`FilterType::LowShelf`] and [`FilterType::HighShelf`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    pub filter_type: FilterType,
    pub cutoff: f64,
    pub q: f64,
    pub peak_gain: f64,
}

impl FilterParams {
    pub fn new(filter_type: FilterType, cutoff: f64, q: f64, peak_gain: f64) -> Self {
        Self {
            filter_type,
            cutoff,
            q,
            peak_gain,
        }
    }

    /// Builds parameters from a cutoff in Hz and a sample rate in Hz.
    ///
    /// # Examples
    ///
    /// ```
    /// use biquad_filter::{FilterParams, FilterType};
    ///
    /// let params = FilterParams::from_hz(FilterType::LowPass, 4410.0, 44100.0, 0.707, 0.0);
    /// assert!((params.cutoff - 0.1).abs() < 1e-15);
    /// ```
    pub fn from_hz(
        filter_type: FilterType,
        frequency: f64,
        sample_rate: f64,
        q: f64,
        peak_gain: f64,
    ) -> Self {
        Self::new(filter_type, frequency / sample_rate, q, peak_gain)
    }

    /// Checks the parameters against the domain the coefficient formulas
    /// are defined on.
    ///
    /// Nothing is clamped. Out-of-range values passed to the unchecked
    /// setters simply produce infinite or NaN coefficients.
    pub fn validate(&self) -> Result<()> {
        if !(self.cutoff > 0.0 && self.cutoff < 0.5) {
            return Err(Error::CutoffOutOfRange(self.cutoff));
        }
        if !(self.q.is_finite() && self.q > 0.0) {
            return Err(Error::InvalidQ(self.q));
        }
        if !self.peak_gain.is_finite() {
            return Err(Error::NonFiniteGain(self.peak_gain));
        }
        Ok(())
    }

    /// Derives the coefficient set for these parameters.
    pub fn coefficients(&self) -> Coefficients {
        Coefficients::derive(self.filter_type, self.cutoff, self.q, self.peak_gain)
    }
}

impl Default for FilterParams {
    fn default() -> Self {
        Self::new(FilterType::LowPass, 0.5, 0.707, 0.0)
    }
}
