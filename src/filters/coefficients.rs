//! Biquad coefficient design.
//!
//! All designs start from the analog second-order prototype of the family,
//! prewarped with `K = tan(π · cutoff)` and mapped through the bilinear
//! transform. Each formula is divided through by its own `norm` so the
//! leading denominator coefficient is 1 and never stored.

use std::f64::consts::{PI, SQRT_2};

use super::FilterType;

/// Normalized biquad coefficients.
///
/// `a0, a1, a2` are the feed-forward (zero) coefficients and `b1, b2` the
/// feedback (pole) coefficients of
///
/// ```text
/// H(z) = (a0 + a1 z^-1 + a2 z^-2) / (1 + b1 z^-1 + b2 z^-2)
/// ```
///
/// Coefficients and state are `f64`. Results agree with an `f32`
/// implementation of the same formulas only to single precision; the low
/// bits differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub b1: f64,
    pub b2: f64,
}

impl Coefficients {
    /// `y[n] = x[n]`
    pub const PASSTHROUGH: Coefficients = Coefficients {
        a0: 1.0,
        a1: 0.0,
        a2: 0.0,
        b1: 0.0,
        b2: 0.0,
    };

    /// Derives the coefficients for one filter design.
    ///
    /// # Arguments
    ///
    /// * `filter_type` - Filter family
    /// * `cutoff` - Normalized cutoff (`frequency / sample_rate`), valid in `(0, 0.5)`
    /// * `q` - Quality factor, valid when `> 0`. Ignored by shelves and one-pole types.
    /// * `peak_gain` - Gain in dB for peak and shelf types; the sign picks boost or cut
    ///
    /// Inputs outside the valid ranges are not clamped and give infinite or
    /// NaN coefficients. Extreme gains with unusual `cutoff`/`q` combinations
    /// can place poles outside the unit circle; see [`Coefficients::is_stable`].
    ///
    /// # Examples
    ///
    /// ```
    /// use biquad_filter::{Coefficients, FilterType};
    ///
    /// let c = Coefficients::derive(FilterType::LowPass, 0.1, 0.707, 0.0);
    /// assert!((c.a0 - 0.0675).abs() < 1e-4);
    /// assert_eq!(c.a1, 2.0 * c.a0);
    /// ```
    pub fn derive(filter_type: FilterType, cutoff: f64, q: f64, peak_gain: f64) -> Self {
        let v = 10f64.powf(peak_gain.abs() / 20.0);
        let k = (PI * cutoff).tan();
        let k2 = k * k;
        let boost = peak_gain >= 0.0;

        match filter_type {
            FilterType::LowPass => {
                let norm = 1.0 / (1.0 + k / q + k2);
                let a0 = k2 * norm;
                Self {
                    a0,
                    a1: 2.0 * a0,
                    a2: a0,
                    b1: 2.0 * (k2 - 1.0) * norm,
                    b2: (1.0 - k / q + k2) * norm,
                }
            }

            FilterType::LowPassOnePole | FilterType::LowPassOnePoleOneZero => {
                let norm = 1.0 / (1.0 / k + 1.0);
                Self {
                    a0: norm,
                    a1: norm,
                    a2: 0.0,
                    b1: (1.0 - 1.0 / k) * norm,
                    b2: 0.0,
                }
            }

            FilterType::HighPass => {
                let norm = 1.0 / (1.0 + k / q + k2);
                let a0 = norm;
                Self {
                    a0,
                    a1: -2.0 * a0,
                    a2: a0,
                    b1: 2.0 * (k2 - 1.0) * norm,
                    b2: (1.0 - k / q + k2) * norm,
                }
            }

            FilterType::HighPassOnePole | FilterType::HighPassOnePoleOneZero => {
                let norm = 1.0 / (k + 1.0);
                Self {
                    a0: norm,
                    a1: -norm,
                    a2: 0.0,
                    b1: (k - 1.0) * norm,
                    b2: 0.0,
                }
            }

            FilterType::BandPass => {
                let norm = 1.0 / (1.0 + k / q + k2);
                let a0 = k / q * norm;
                Self {
                    a0,
                    a1: 0.0,
                    a2: -a0,
                    b1: 2.0 * (k2 - 1.0) * norm,
                    b2: (1.0 - k / q + k2) * norm,
                }
            }

            FilterType::Notch => {
                let norm = 1.0 / (1.0 + k / q + k2);
                let a0 = (1.0 + k2) * norm;
                let a1 = 2.0 * (k2 - 1.0) * norm;
                Self {
                    a0,
                    a1,
                    a2: a0,
                    b1: a1,
                    b2: (1.0 - k / q + k2) * norm,
                }
            }

            FilterType::Peak => {
                // Boost and cut swap the roles of the 1/Q and V/Q terms
                let (zero_damping, pole_damping) = if boost {
                    (v / q, 1.0 / q)
                } else {
                    (1.0 / q, v / q)
                };
                let norm = 1.0 / (1.0 + pole_damping * k + k2);
                let a1 = 2.0 * (k2 - 1.0) * norm;
                Self {
                    a0: (1.0 + zero_damping * k + k2) * norm,
                    a1,
                    a2: (1.0 - zero_damping * k + k2) * norm,
                    b1: a1,
                    b2: (1.0 - pole_damping * k + k2) * norm,
                }
            }

            FilterType::LowShelf => {
                let sqrt_2v = (2.0 * v).sqrt();
                if boost {
                    let norm = 1.0 / (1.0 + SQRT_2 * k + k2);
                    Self {
                        a0: (1.0 + sqrt_2v * k + v * k2) * norm,
                        a1: 2.0 * (v * k2 - 1.0) * norm,
                        a2: (1.0 - sqrt_2v * k + v * k2) * norm,
                        b1: 2.0 * (k2 - 1.0) * norm,
                        b2: (1.0 - SQRT_2 * k + k2) * norm,
                    }
                } else {
                    let norm = 1.0 / (1.0 + sqrt_2v * k + v * k2);
                    Self {
                        a0: (1.0 + SQRT_2 * k + k2) * norm,
                        a1: 2.0 * (k2 - 1.0) * norm,
                        a2: (1.0 - SQRT_2 * k + k2) * norm,
                        b1: 2.0 * (v * k2 - 1.0) * norm,
                        b2: (1.0 - sqrt_2v * k + v * k2) * norm,
                    }
                }
            }

            FilterType::HighShelf => {
                let sqrt_2v = (2.0 * v).sqrt();
                if boost {
                    let norm = 1.0 / (1.0 + SQRT_2 * k + k2);
                    Self {
                        a0: (v + sqrt_2v * k + k2) * norm,
                        a1: 2.0 * (k2 - v) * norm,
                        a2: (v - sqrt_2v * k + k2) * norm,
                        b1: 2.0 * (k2 - 1.0) * norm,
                        b2: (1.0 - SQRT_2 * k + k2) * norm,
                    }
                } else {
                    let norm = 1.0 / (v + sqrt_2v * k + k2);
                    Self {
                        a0: (1.0 + SQRT_2 * k + k2) * norm,
                        a1: 2.0 * (k2 - 1.0) * norm,
                        a2: (1.0 - SQRT_2 * k + k2) * norm,
                        b1: 2.0 * (k2 - v) * norm,
                        b2: (v - sqrt_2v * k + k2) * norm,
                    }
                }
            }

            FilterType::AllPass => {
                let norm = 1.0 / (1.0 + k * (1.0 / q) + k2);
                let a0 = (1.0 - k * (1.0 / q) + k2) * norm;
                let a1 = 2.0 * (k2 - 1.0) * norm;
                Self {
                    a0,
                    a1,
                    a2: 1.0,
                    b1: a1,
                    b2: a0,
                }
            }
        }
    }

    /// Magnitude of the transfer function at a normalized frequency.
    ///
    /// `frequency` is in cycles per sample: 0.0 is DC, 0.5 is Nyquist.
    pub fn magnitude_at(&self, frequency: f64) -> f64 {
        let w = 2.0 * PI * frequency;
        let (sin1, cos1) = w.sin_cos();
        let (sin2, cos2) = (2.0 * w).sin_cos();

        let num_re = self.a0 + self.a1 * cos1 + self.a2 * cos2;
        let num_im = self.a1 * sin1 + self.a2 * sin2;
        let den_re = 1.0 + self.b1 * cos1 + self.b2 * cos2;
        let den_im = self.b1 * sin1 + self.b2 * sin2;

        num_re.hypot(num_im) / den_re.hypot(den_im)
    }

    /// Magnitude response in decibels at a normalized frequency.
    pub fn magnitude_db_at(&self, frequency: f64) -> f64 {
        20.0 * self.magnitude_at(frequency).log10()
    }

    /// Returns true if both poles lie strictly inside the unit circle.
    ///
    /// This is the stability triangle for `1 + b1 z^-1 + b2 z^-2`.
    pub fn is_stable(&self) -> bool {
        self.b2.abs() < 1.0 && self.b1.abs() < 1.0 + self.b2
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::PASSTHROUGH
    }
}
