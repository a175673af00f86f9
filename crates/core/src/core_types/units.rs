//! Semantic unit types for emission quantities
//!
//! Every category calculator reports in kilograms of CO₂ per month. Wrapping
//! the raw `f64` keeps monthly emission figures from being mixed up with the
//! survey quantities they are derived from (kilometres, hours, bags, spend).
//!
//! # Usage
//! ```
//! use carbon_footprint_core::core_types::units::KgCo2PerMonth;
//!
//! let road = KgCo2PerMonth::new(20.0);
//! let flights = KgCo2PerMonth::new(250.0);
//! assert_eq!(road + flights, KgCo2PerMonth::new(270.0));
//! assert_eq!(KgCo2PerMonth::new(208.333_333).round_to_cents(), KgCo2PerMonth::new(208.33));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Deref, Mul};

/// Round to two decimal places, ties to even.
///
/// Half-cent values settle on the even cent (0.125 -> 0.12, 0.375 -> 0.38).
#[inline]
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Round to the nearest whole number, ties to even.
///
/// Used for headline figures (prediction, trees owed) so that `x.5` totals
/// settle the same way regardless of sign.
#[inline]
#[must_use]
pub fn round_whole(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Monthly emissions in kilograms of CO₂
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct KgCo2PerMonth(f64);

impl Eq for KgCo2PerMonth {}

impl PartialOrd for KgCo2PerMonth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KgCo2PerMonth {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for KgCo2PerMonth {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KgCo2PerMonth {
    /// No emissions
    pub const ZERO: KgCo2PerMonth = KgCo2PerMonth(0.0);

    /// Create a monthly emission figure.
    ///
    /// Negative values are accepted: out-of-domain survey numbers propagate
    /// through the arithmetic unchanged.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KgCo2PerMonth(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Round to two decimal places
    #[inline]
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        KgCo2PerMonth(round2(self.0))
    }

    /// Whether the value is a finite number
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for KgCo2PerMonth {
    fn from(v: f64) -> Self {
        KgCo2PerMonth(v)
    }
}

impl From<KgCo2PerMonth> for f64 {
    fn from(v: KgCo2PerMonth) -> f64 {
        v.0
    }
}

impl Add for KgCo2PerMonth {
    type Output = KgCo2PerMonth;
    #[inline]
    fn add(self, rhs: KgCo2PerMonth) -> KgCo2PerMonth {
        KgCo2PerMonth(self.0 + rhs.0)
    }
}

impl AddAssign for KgCo2PerMonth {
    #[inline]
    fn add_assign(&mut self, rhs: KgCo2PerMonth) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for KgCo2PerMonth {
    type Output = KgCo2PerMonth;
    #[inline]
    fn mul(self, rhs: f64) -> KgCo2PerMonth {
        KgCo2PerMonth(self.0 * rhs)
    }
}

impl Sum for KgCo2PerMonth {
    fn sum<I: Iterator<Item = KgCo2PerMonth>>(iter: I) -> Self {
        iter.fold(KgCo2PerMonth::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a KgCo2PerMonth> for KgCo2PerMonth {
    fn sum<I: Iterator<Item = &'a KgCo2PerMonth>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl PartialEq<f64> for KgCo2PerMonth {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for KgCo2PerMonth {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl fmt::Display for KgCo2PerMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kg CO₂/month", self.0)
    }
}
