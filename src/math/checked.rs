//! Checked arithmetic returning [`EngineError`] instead of `Option`.
//!
//! The newtypes expose `Option`-returning `checked_*` methods; components
//! use [`CheckedArithmetic`] so that a failure surfaces as a typed error
//! through `?`.
//!
//! ```
//! use tmctol_engine::domain::Amount;
//! use tmctol_engine::math::CheckedArithmetic;
//!
//! let a = Amount::new(100);
//! assert_eq!(a.safe_add(&Amount::new(1)), Ok(Amount::new(101)));
//! assert!(Amount::ZERO.safe_sub(&a).is_err());
//! ```

use crate::domain::{Amount, AssetAmounts, Liquidity};
use crate::error::{EngineError, Result};

/// Fallible addition and subtraction for the engine's quantity types.
///
/// No saturation: every failure is an error.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the sum does not fit.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(EngineError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(EngineError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(EngineError::Overflow("liquidity addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(EngineError::Underflow("liquidity subtraction underflow"))
    }
}

impl CheckedArithmetic for AssetAmounts {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(EngineError::Overflow("asset pair addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(EngineError::Underflow("asset pair subtraction underflow"))
    }
}
