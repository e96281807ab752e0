//! Ratio-scale parts-per-million representation for fees and shares.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::{EngineError, Result};
use crate::math::{mul_div, PPM};

/// Largest value that represents 100%.
const MAX_PPM: u32 = 1_000_000;

/// A dimensionless fraction in parts per million (1 000 000 = 100%).
///
/// All `u32` values are constructible, but values above 1 000 000 are
/// not meaningful as fractions; configuration validation rejects them.
///
/// # Examples
///
/// ```
/// use tmctol_engine::domain::{Amount, Ppm, Rounding};
///
/// let fee = Ppm::new(5_000); // 0.5%
/// let cut = fee.apply(Amount::new(1_000_000), Rounding::Down).expect("no overflow");
/// assert_eq!(cut, Amount::new(5_000));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ppm(u32);

impl Ppm {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const ONE: Self = Self(MAX_PPM);

    /// Creates a new `Ppm` from a raw `u32`.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32`.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns the value widened to `u128` for arithmetic.
    #[must_use]
    pub const fn as_u128(&self) -> u128 {
        self.0 as u128
    }

    /// Returns `true` if the value is within `0..=1_000_000`.
    #[must_use]
    pub const fn is_valid_fraction(&self) -> bool {
        self.0 <= MAX_PPM
    }

    /// Returns `1 - self`, or `None` if `self` exceeds 100%.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        match MAX_PPM.checked_sub(self.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `amount * self / PPM` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the result does not fit.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        mul_div(amount.get(), self.as_u128(), PPM, rounding).map(Amount::new)
    }

    /// Sums a sequence of shares, failing on `u32` overflow.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the sum exceeds `u32::MAX`.
    pub fn checked_sum<'a>(shares: impl IntoIterator<Item = &'a Ppm>) -> Result<Ppm> {
        shares.into_iter().try_fold(Ppm::ZERO, |acc, s| {
            acc.0
                .checked_add(s.0)
                .map(Ppm)
                .ok_or(EngineError::Overflow("ppm sum overflow"))
        })
    }
}

impl fmt::Display for Ppm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ppm", self.0)
    }
}
