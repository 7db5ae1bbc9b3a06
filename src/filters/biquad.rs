//! The biquad filter unit.
//!
//! [`Biquad`] owns one parameter set, the coefficients derived from it and
//! two delay registers. Every setter recomputes the coefficients before it
//! returns, so [`Biquad::process`] always runs with a current design.
//!
//! Reconfiguring does not clear the delay registers. Changing parameters
//! while audio is flowing keeps the energy already in the filter, which can
//! be heard as a small click on large jumps. Call [`Biquad::reset`]
//! explicitly when a clean start is needed.

use super::{Coefficients, FilterParams, FilterType};
use crate::Result;

/// A second-order IIR filter in transposed direct form II.
///
/// The unit is not synchronized: the host must serialize parameter changes
/// with calls to `process`.
///
/// # Examples
///
/// ```
/// use biquad_filter::{Biquad, FilterType};
///
/// let mut filter = Biquad::with_params(FilterType::LowPass, 0.1, 0.707, 0.0);
/// let first = filter.process(1.0);
/// assert_eq!(first, filter.coefficients().a0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Biquad {
    filter_type: FilterType,
    cutoff: f64,
    q: f64,
    peak_gain: f64,

    coefficients: Coefficients,

    // Delay registers
    z1: f64,
    z2: f64,
}

impl Biquad {
    /// Creates a low-pass unit with cutoff 0.5, Q 0.707 and 0 dB gain.
    ///
    /// The stored cutoff sits on the Nyquist pole of the prewarp, so no
    /// design is derived: the unit passes its input through unchanged until
    /// the first setter is called.
    pub fn new() -> Self {
        let FilterParams {
            filter_type,
            cutoff,
            q,
            peak_gain,
        } = FilterParams::default();

        Self {
            filter_type,
            cutoff,
            q,
            peak_gain,
            coefficients: Coefficients::PASSTHROUGH,
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// Creates a unit with explicit parameters and zeroed state.
    ///
    /// # Arguments
    ///
    /// * `filter_type` - Filter family
    /// * `cutoff` - Normalized cutoff (`frequency / sample_rate`), in `(0, 0.5)`
    /// * `q` - Quality factor, `> 0`
    /// * `peak_gain` - Gain in dB, used by peak and shelf types
    pub fn with_params(filter_type: FilterType, cutoff: f64, q: f64, peak_gain: f64) -> Self {
        let mut filter = Self::new();
        filter.configure(filter_type, cutoff, q, peak_gain);
        filter
    }

    /// Creates a unit from a parameter set without validating it.
    pub fn from_params(params: FilterParams) -> Self {
        Self::with_params(params.filter_type, params.cutoff, params.q, params.peak_gain)
    }

    /// Creates a unit after checking the parameters against their valid ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use biquad_filter::{Biquad, Error, FilterParams, FilterType};
    ///
    /// let params = FilterParams::new(FilterType::Peak, 0.25, 0.0, 6.0);
    /// assert_eq!(Biquad::try_from_params(params), Err(Error::InvalidQ(0.0)));
    /// ```
    pub fn try_from_params(params: FilterParams) -> Result<Self> {
        params.validate()?;
        Ok(Self::from_params(params))
    }

    /// Sets the filter family and recomputes the coefficients.
    pub fn set_type(&mut self, filter_type: FilterType) {
        self.filter_type = filter_type;
        self.recalculate();
    }

    /// Sets the normalized cutoff and recomputes the coefficients.
    pub fn set_cutoff(&mut self, cutoff: f64) {
        self.cutoff = cutoff;
        self.recalculate();
    }

    /// Sets the quality factor and recomputes the coefficients.
    pub fn set_q(&mut self, q: f64) {
        self.q = q;
        self.recalculate();
    }

    /// Sets the peak gain in dB and recomputes the coefficients.
    pub fn set_peak_gain(&mut self, peak_gain: f64) {
        self.peak_gain = peak_gain;
        self.recalculate();
    }

    /// Sets all four parameters at once with a single recomputation.
    pub fn configure(&mut self, filter_type: FilterType, cutoff: f64, q: f64, peak_gain: f64) {
        self.filter_type = filter_type;
        self.cutoff = cutoff;
        self.q = q;
        self.peak_gain = peak_gain;
        self.recalculate();
    }

    /// Validates and applies a parameter set. On error nothing changes.
    pub fn try_configure(&mut self, params: FilterParams) -> Result<()> {
        if let Err(err) = params.validate() {
            #[cfg(feature = "tracing")]
            tracing::debug!(%err, filter_type = %params.filter_type, "rejected biquad parameters");
            return Err(err);
        }

        self.configure(params.filter_type, params.cutoff, params.q, params.peak_gain);
        Ok(())
    }

    fn recalculate(&mut self) {
        self.coefficients =
            Coefficients::derive(self.filter_type, self.cutoff, self.q, self.peak_gain);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            filter_type = %self.filter_type,
            cutoff = self.cutoff,
            q = self.q,
            peak_gain = self.peak_gain,
            coefficients = ?self.coefficients,
            "recalculated biquad coefficients"
        );
    }

    /// Filters one sample.
    ///
    /// Five multiplies, no allocation, no locking.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let Coefficients { a0, a1, a2, b1, b2 } = self.coefficients;

        let output = input * a0 + self.z1;
        self.z1 = input * a1 + self.z2 - b1 * output;
        self.z2 = input * a2 - b2 * output;
        output
    }

    /// Filters a host-owned buffer in place.
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clears the delay registers. Coefficients and parameters are kept.
    pub fn reset(&mut self) {
        self.z1 = 0.0;
        self.z2 = 0.0;

        #[cfg(feature = "tracing")]
        tracing::debug!(filter_type = %self.filter_type, "biquad state reset");
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    /// Peak gain in dB.
    pub fn peak_gain(&self) -> f64 {
        self.peak_gain
    }

    /// The current parameter set.
    pub fn params(&self) -> FilterParams {
        FilterParams::new(self.filter_type, self.cutoff, self.q, self.peak_gain)
    }

    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// The delay registers `(z1, z2)`.
    pub fn state(&self) -> (f64, f64) {
        (self.z1, self.z2)
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new()
    }
}
