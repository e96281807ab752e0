//! Conversion of amount-scale integers into `fixed` numbers for reporting.
//!
//! The engine itself never computes in binary fixed point; this view exists
//! for off-chain tooling that wants a `I80F48` it can format or compare
//! against other fixed-point models.

use fixed::types::I80F48;

use crate::domain::Amount;
use crate::error::{EngineError, Result};
use crate::math::PRECISION;

/// Converts an amount-scale value to `I80F48` (`PRECISION` maps to `1.0`).
///
/// The integer part is exact; the fractional part is truncated to 48
/// binary digits.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if the integer part exceeds the
/// 79-bit signed range of `I80F48`.
pub fn to_fixed(amount: Amount) -> Result<I80F48> {
    let whole = amount.get() / PRECISION;
    let frac = amount.get() % PRECISION;
    let whole = I80F48::checked_from_num(whole)
        .ok_or(EngineError::Overflow("amount exceeds I80F48 range"))?;
    // frac < 10^12 < 2^40, so frac << 48 fits in u128
    let frac = I80F48::from_bits(((frac << 48) / PRECISION) as i128);
    whole
        .checked_add(frac)
        .ok_or(EngineError::Overflow("amount exceeds I80F48 range"))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn whole_units_are_exact() {
        let Ok(v) = to_fixed(Amount::new(3 * PRECISION)) else {
            panic!("fits");
        };
        assert_eq!(v, I80F48::from_num(3));
    }

    #[test]
    fn halves_are_exact() {
        let Ok(v) = to_fixed(Amount::new(PRECISION / 2)) else {
            panic!("fits");
        };
        assert_eq!(v, I80F48::from_num(0.5));
    }

    #[test]
    fn max_amount_overflows() {
        assert!(to_fixed(Amount::MAX).is_err());
    }
}
