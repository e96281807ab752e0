//! Integer division with an explicit rounding direction.
//!
//! [`div_round`] is the `u128` building block behind
//! [`Amount::checked_div`](crate::domain::Amount::checked_div) and the
//! fee and share arithmetic.
//!
//! ```
//! use tmctol_engine::domain::Rounding;
//! use tmctol_engine::math::div_round;
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use crate::domain::Rounding;

/// `numerator / denominator`, floored or ceiled.
///
/// Returns `None` if `denominator` is zero.  Never overflows: the ceiling
/// is derived from the remainder rather than from `n + d - 1`.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // q < u128::MAX whenever the remainder is non-zero
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}
