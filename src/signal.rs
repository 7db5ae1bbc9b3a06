//! Pull-based sample sources.
//!
//! A [`Signal`] yields one `f64` sample per call. Filters wrap signals (see
//! [`BiquadFilter`](crate::BiquadFilter)), and the small sources here are
//! the probes used to measure a filter: a constant (DC), a unit impulse and
//! a sinusoid at a normalized frequency.

use std::f64::consts::PI;

/// Common interface for sample sources and processors.
///
/// The trait provides two operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    fn next_sample(&mut self) -> f64;

    /// Fills `buffer` with consecutive samples.
    ///
    /// Default implementation calls `next_sample()` for each element.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// A constant `f64` is a DC signal.
///
/// # Examples
///
/// ```
/// use biquad_filter::Signal;
///
/// let mut dc = 1.0_f64;
/// let mut buffer = [0.0; 3];
/// dc.process(&mut buffer);
/// assert_eq!(buffer, [1.0, 1.0, 1.0]);
/// ```
impl Signal for f64 {
    fn next_sample(&mut self) -> f64 {
        *self
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(*self);
    }
}

/// Unit impulse: `amplitude` on the first sample, zero afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    amplitude: f64,
    fired: bool,
}

impl Impulse {
    /// Creates a unit impulse (amplitude 1.0).
    pub fn new() -> Self {
        Self::with_amplitude(1.0)
    }

    /// Creates an impulse of the given height.
    pub fn with_amplitude(amplitude: f64) -> Self {
        Self {
            amplitude,
            fired: false,
        }
    }
}

impl Default for Impulse {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal for Impulse {
    fn next_sample(&mut self) -> f64 {
        if self.fired {
            0.0
        } else {
            self.fired = true;
            self.amplitude
        }
    }
}

/// Sine wave at a normalized frequency (cycles per sample).
///
/// `Sine::new(0.25)` completes one cycle every four samples. The phase stays
/// in `[0, 1)` for any frequency, so aliased (`>= 1`) and negative
/// frequencies run indefinitely without drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sine {
    /// Current phase (0.0 to 1.0)
    phase: f64,
    /// Phase increment per sample
    frequency: f64,
}

impl Sine {
    /// Creates a sine at `frequency` cycles per sample, starting at phase 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use biquad_filter::{Signal, Sine};
    ///
    /// let mut sine = Sine::new(0.25);
    /// assert!(sine.next_sample().abs() < 1e-12);
    /// assert!((sine.next_sample() - 1.0).abs() < 1e-12);
    /// ```
    pub fn new(frequency: f64) -> Self {
        Self {
            phase: 0.0,
            frequency,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl Signal for Sine {
    fn next_sample(&mut self) -> f64 {
        let sample = (self.phase * 2.0 * PI).sin();

        self.phase = (self.phase + self.frequency).rem_euclid(1.0);

        sample
    }
}
