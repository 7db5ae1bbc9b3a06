//! Second-order IIR filtering.
//!
//! This module provides the biquad filter unit and its pieces:
//! - [`FilterType`] selects one of twelve filter families
//! - [`FilterParams`] bundles family, cutoff, Q and peak gain
//! - [`Coefficients`] holds a derived design and evaluates its response
//! - [`Biquad`] is the stateful unit that processes samples
//! - [`BiquadFilter`] runs a [`Signal`](crate::Signal) source through a [`Biquad`]
//!
//! Cascades are built by chaining independent units.

mod biquad;
mod coefficients;
mod filtered;
mod kind;
mod params;

pub use self::biquad::Biquad;
pub use self::coefficients::Coefficients;
pub use self::filtered::BiquadFilter;
pub use self::kind::FilterType;
pub use self::params::FilterParams;
