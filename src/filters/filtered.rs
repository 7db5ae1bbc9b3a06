//! A [`Biquad`] applied to a [`Signal`] source.

use super::{Biquad, FilterParams, FilterType};
use crate::Signal;

/// A signal source followed by a biquad.
///
/// Pulling a sample pulls one from the source and runs it through the
/// filter. The inner [`Biquad`] stays reachable through
/// [`biquad_mut`](Self::biquad_mut) for live parameter changes.
///
/// # Examples
///
/// ```
/// use biquad_filter::{BiquadFilter, Signal};
///
/// // DC through a high-pass decays towards silence
/// let mut filter = BiquadFilter::highpass(1.0, 0.05, 0.707);
/// let mut buffer = vec![0.0; 2000];
/// filter.process(&mut buffer);
/// assert!(buffer[1999].abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct BiquadFilter<S: Signal> {
    source: S,
    biquad: Biquad,
}

impl<S: Signal> BiquadFilter<S> {
    pub fn new(source: S, params: FilterParams) -> Self {
        Self {
            source,
            biquad: Biquad::from_params(params),
        }
    }

    fn without_gain(source: S, filter_type: FilterType, cutoff: f64, q: f64) -> Self {
        Self::new(source, FilterParams::new(filter_type, cutoff, q, 0.0))
    }

    /// Creates a low-pass filter.
    ///
    /// # Arguments
    ///
    /// * `source` - Input signal
    /// * `cutoff` - Normalized cutoff frequency
    /// * `q` - Q factor (resonance), 0.707 gives a Butterworth response
    pub fn lowpass(source: S, cutoff: f64, q: f64) -> Self {
        Self::without_gain(source, FilterType::LowPass, cutoff, q)
    }

    /// Creates a high-pass filter.
    pub fn highpass(source: S, cutoff: f64, q: f64) -> Self {
        Self::without_gain(source, FilterType::HighPass, cutoff, q)
    }

    /// Creates a band-pass filter. Higher `q` narrows the band.
    pub fn bandpass(source: S, center: f64, q: f64) -> Self {
        Self::without_gain(source, FilterType::BandPass, center, q)
    }

    /// Creates a notch filter. Higher `q` narrows the notch.
    pub fn notch(source: S, center: f64, q: f64) -> Self {
        Self::without_gain(source, FilterType::Notch, center, q)
    }

    /// Creates an all-pass filter.
    pub fn allpass(source: S, frequency: f64, q: f64) -> Self {
        Self::without_gain(source, FilterType::AllPass, frequency, q)
    }

    /// Creates a peaking EQ band.
    ///
    /// # Arguments
    ///
    /// * `source` - Input signal
    /// * `center` - Normalized center frequency
    /// * `q` - Bandwidth of the bell
    /// * `gain` - Boost (positive) or cut (negative) in dB at the center
    pub fn peak(source: S, center: f64, q: f64, gain: f64) -> Self {
        Self::new(source, FilterParams::new(FilterType::Peak, center, q, gain))
    }

    /// Creates a low shelf. `q` is not used by the shelf designs.
    pub fn lowshelf(source: S, cutoff: f64, gain: f64) -> Self {
        Self::new(
            source,
            FilterParams::new(FilterType::LowShelf, cutoff, 0.707, gain),
        )
    }

    /// Creates a high shelf. `q` is not used by the shelf designs.
    pub fn highshelf(source: S, cutoff: f64, gain: f64) -> Self {
        Self::new(
            source,
            FilterParams::new(FilterType::HighShelf, cutoff, 0.707, gain),
        )
    }

    pub fn biquad(&self) -> &Biquad {
        &self.biquad
    }

    pub fn biquad_mut(&mut self) -> &mut Biquad {
        &mut self.biquad
    }

    /// Returns the source and the filter.
    pub fn into_inner(self) -> (S, Biquad) {
        (self.source, self.biquad)
    }
}

impl<S: Signal> Signal for BiquadFilter<S> {
    fn next_sample(&mut self) -> f64 {
        let input = self.source.next_sample();
        self.biquad.process(input)
    }
}
