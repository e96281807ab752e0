//! Amount-scale fixed-point quantity with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Rounding;
use crate::math::{div_round, PRECISION};

/// An amount-scale fixed-point value: `Amount::new(PRECISION)` is `1.0`.
///
/// Token balances, reserves, prices and the curve slope all live on this
/// scale.  Ratios (fees, shares) never do; they use [`Ppm`](super::Ppm).
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking.
///
/// # Examples
///
/// ```
/// use tmctol_engine::domain::Amount;
///
/// let one = Amount::from_whole(1).expect("fits");
/// assert_eq!(one.get(), 1_000_000_000_000);
/// assert_eq!(one.checked_add(&one), Amount::from_whole(2));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// One whole unit (`1.0`).
    pub const ONE: Self = Self(PRECISION);

    /// Creates an `Amount` from a raw, already scaled `u128`.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Creates an `Amount` of `whole` units, i.e. `whole * PRECISION`.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub const fn from_whole(whole: u128) -> Option<Self> {
        match whole.checked_mul(PRECISION) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Returns the underlying raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Raw checked multiplication of the underlying integers.
    ///
    /// This does not rescale by `PRECISION`; use
    /// [`mul_div`](crate::math::mul_div) for fixed-point products.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        match div_round(self.0, divisor.0, rounding) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Absolute difference, never fails.
    pub const fn abs_diff(&self, other: &Self) -> Self {
        Self(self.0.abs_diff(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
