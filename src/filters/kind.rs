//! Filter families.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The type of filter to apply.
///
/// Each variant selects one closed-form coefficient design in
/// [`Coefficients::derive`](super::Coefficients::derive). The one-pole
/// variants come in pairs that share a design: `LowPassOnePole` and
/// `LowPassOnePoleOneZero` produce identical coefficients, as do the two
/// high-pass one-pole variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterType {
    /// Two-pole low-pass, unity DC gain
    #[default]
    LowPass,
    /// One-pole low-pass
    LowPassOnePole,
    /// One-pole, one-zero low-pass (same design as `LowPassOnePole`)
    LowPassOnePoleOneZero,
    /// Two-pole high-pass, zero DC gain
    HighPass,
    /// One-pole high-pass
    HighPassOnePole,
    /// One-pole, one-zero high-pass (same design as `HighPassOnePole`)
    HighPassOnePoleOneZero,
    /// Band-pass with constant 0 dB peak gain
    BandPass,
    /// Band-reject around the cutoff
    Notch,
    /// Peaking EQ: boost or cut by the peak gain around the cutoff
    Peak,
    /// Shelf that boosts or cuts everything below the cutoff
    LowShelf,
    /// Shelf that boosts or cuts everything above the cutoff
    HighShelf,
    /// Unity magnitude at every frequency, phase shift only
    AllPass,
}

impl FilterType {
    /// Every filter type, in declaration order.
    pub const ALL: [FilterType; 12] = [
        FilterType::LowPass,
        FilterType::LowPassOnePole,
        FilterType::LowPassOnePoleOneZero,
        FilterType::HighPass,
        FilterType::HighPassOnePole,
        FilterType::HighPassOnePoleOneZero,
        FilterType::BandPass,
        FilterType::Notch,
        FilterType::Peak,
        FilterType::LowShelf,
        FilterType::HighShelf,
        FilterType::AllPass,
    ];

    /// Returns true if the peak gain parameter affects this design.
    pub fn uses_gain(self) -> bool {
        matches!(
            self,
            FilterType::Peak | FilterType::LowShelf | FilterType::HighShelf
        )
    }

    /// Returns true for the first-order designs (`a2 = b2 = 0`).
    pub fn is_one_pole(self) -> bool {
        matches!(
            self,
            FilterType::LowPassOnePole
                | FilterType::LowPassOnePoleOneZero
                | FilterType::HighPassOnePole
                | FilterType::HighPassOnePoleOneZero
        )
    }

    /// Canonical snake_case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            FilterType::LowPass => "lowpass",
            FilterType::LowPassOnePole => "lowpass_1pole",
            FilterType::LowPassOnePoleOneZero => "lowpass_1pole_1zero",
            FilterType::HighPass => "highpass",
            FilterType::HighPassOnePole => "highpass_1pole",
            FilterType::HighPassOnePoleOneZero => "highpass_1pole_1zero",
            FilterType::BandPass => "bandpass",
            FilterType::Notch => "notch",
            FilterType::Peak => "peak",
            FilterType::LowShelf => "lowshelf",
            FilterType::HighShelf => "highshelf",
            FilterType::AllPass => "allpass",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterType {
    type Err = Error;

    /// Parses a filter type from its canonical name.
    ///
    /// Matching ignores ASCII case, surrounding whitespace, and accepts `-`
    /// in place of `_`.
    ///
    /// # Examples
    ///
    /// ```
    /// use biquad_filter::FilterType;
    ///
    /// let kind: FilterType = "HighShelf".parse().unwrap();
    /// assert_eq!(kind, FilterType::HighShelf);
    ///
    /// let kind: FilterType = "lowpass-1pole".parse().unwrap();
    /// assert_eq!(kind, FilterType::LowPassOnePole);
    ///
    /// assert!("wobble".parse::<FilterType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");

        FilterType::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| Error::UnknownFilterType(s.to_string()))
    }
}
