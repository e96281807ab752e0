//! The two assets of the system and amount pairs over them.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;

/// One side of the native/foreign pair.
///
/// The native asset is the one issued by the minting curve (token A of the
/// pool); the foreign asset is what buyers pay with (token B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    /// The minted token.
    Native,
    /// The payment token.
    Foreign,
}

impl Asset {
    /// Returns the other side of the pair.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Native => Self::Foreign,
            Self::Foreign => Self::Native,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Foreign => write!(f, "foreign"),
        }
    }
}

/// A pair of amounts, one per asset.
///
/// # Examples
///
/// ```
/// use tmctol_engine::domain::{Amount, Asset, AssetAmounts};
///
/// let pair = AssetAmounts::new(Amount::new(5), Amount::new(7));
/// assert_eq!(pair.get(Asset::Foreign), Amount::new(7));
/// assert!(!pair.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AssetAmounts {
    /// Native-side amount.
    pub native: Amount,
    /// Foreign-side amount.
    pub foreign: Amount,
}

impl AssetAmounts {
    /// Both sides zero.
    pub const ZERO: Self = Self {
        native: Amount::ZERO,
        foreign: Amount::ZERO,
    };

    /// Creates a pair from its native and foreign sides.
    pub const fn new(native: Amount, foreign: Amount) -> Self {
        Self { native, foreign }
    }

    /// A pair holding `amount` on the `asset` side and zero on the other.
    pub const fn single(asset: Asset, amount: Amount) -> Self {
        match asset {
            Asset::Native => Self::new(amount, Amount::ZERO),
            Asset::Foreign => Self::new(Amount::ZERO, amount),
        }
    }

    /// Returns the amount for `asset`.
    pub const fn get(&self, asset: Asset) -> Amount {
        match asset {
            Asset::Native => self.native,
            Asset::Foreign => self.foreign,
        }
    }

    /// Returns `true` if both sides are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.native.is_zero() && self.foreign.is_zero()
    }

    /// Returns `true` if both sides are non-zero.
    #[must_use]
    pub const fn is_two_sided(&self) -> bool {
        !self.native.is_zero() && !self.foreign.is_zero()
    }

    /// Side-wise checked addition.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match (
            self.native.checked_add(&other.native),
            self.foreign.checked_add(&other.foreign),
        ) {
            (Some(native), Some(foreign)) => Some(Self { native, foreign }),
            _ => None,
        }
    }

    /// Side-wise checked subtraction.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match (
            self.native.checked_sub(&other.native),
            self.foreign.checked_sub(&other.foreign),
        ) {
            (Some(native), Some(foreign)) => Some(Self { native, foreign }),
            _ => None,
        }
    }
}

impl fmt::Display for AssetAmounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(native {}, foreign {})", self.native, self.foreign)
    }
}

/// Which side of the router filled a buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Minting new supply on the bonding curve.
    Curve,
    /// Swapping against the constant-product pool.
    Pool,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curve => write!(f, "curve"),
            Self::Pool => write!(f, "pool"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_flips() {
        assert_eq!(Asset::Native.opposite(), Asset::Foreign);
        assert_eq!(Asset::Foreign.opposite(), Asset::Native);
    }

    #[test]
    fn pair_predicates() {
        assert!(AssetAmounts::ZERO.is_empty());
        let one_sided = AssetAmounts::new(Amount::ZERO, Amount::new(1));
        assert!(!one_sided.is_empty());
        assert!(!one_sided.is_two_sided());
        assert!(AssetAmounts::new(Amount::new(1), Amount::new(1)).is_two_sided());
    }

    #[test]
    fn pair_arithmetic() {
        let a = AssetAmounts::new(Amount::new(10), Amount::new(20));
        let b = AssetAmounts::new(Amount::new(3), Amount::new(5));
        assert_eq!(
            a.checked_add(&b),
            Some(AssetAmounts::new(Amount::new(13), Amount::new(25)))
        );
        assert_eq!(
            a.checked_sub(&b),
            Some(AssetAmounts::new(Amount::new(7), Amount::new(15)))
        );
        assert_eq!(b.checked_sub(&a), None);
    }

    #[test]
    fn route_display() {
        assert_eq!(Route::Curve.to_string(), "curve");
        assert_eq!(Route::Pool.to_string(), "pool");
    }
}
