//! Fixed-point primitives shared by every component.
//!
//! Products that can exceed `u128` (an amount times a reserve times a ratio,
//! the curve discriminant) are formed in 256 bits and narrowed back with an
//! explicit [`EngineError::Overflow`].

use primitive_types::U256;

use crate::domain::Rounding;
use crate::error::{EngineError, Result};

/// Amount-scale unit: `PRECISION` represents `1.0`.
pub const PRECISION: u128 = 1_000_000_000_000;

/// Ratio-scale unit: `PPM` represents 100%.
pub const PPM: u128 = 1_000_000;

/// Narrows a 256-bit intermediate back to `u128`.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] with `context` if `value` does not fit.
pub fn narrow(value: U256, context: &'static str) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(EngineError::Overflow(context));
    }
    Ok(value.low_u128())
}

/// `a * b / denominator` with a 256-bit intermediate and explicit rounding.
///
/// # Errors
///
/// - [`EngineError::DivisionByZero`] if `denominator` is zero.
/// - [`EngineError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use tmctol_engine::domain::Rounding;
/// use tmctol_engine::math::{mul_div, PRECISION};
///
/// // 2.5 * 4.0 = 10.0 on the amount scale
/// let r = mul_div(2_500_000_000_000, 4 * PRECISION, PRECISION, Rounding::Down);
/// assert_eq!(r, Ok(10 * PRECISION));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    let q = mul_div_wide(U256::from(a) * U256::from(b), U256::from(denominator), rounding)?;
    narrow(q, "mul_div quotient")
}

/// `numerator / denominator` over 256-bit operands with explicit rounding.
///
/// # Errors
///
/// Returns [`EngineError::DivisionByZero`] if `denominator` is zero.
pub fn mul_div_wide(numerator: U256, denominator: U256, rounding: Rounding) -> Result<U256> {
    if denominator.is_zero() {
        return Err(EngineError::DivisionByZero);
    }
    let (q, r) = numerator.div_mod(denominator);
    if rounding.is_up() && !r.is_zero() {
        // q < U256::MAX because the remainder is non-zero
        return Ok(q + U256::one());
    }
    Ok(q)
}

/// Floor integer square root of a 256-bit value.
#[must_use]
pub fn isqrt_wide(n: U256) -> U256 {
    n.integer_sqrt()
}

/// Multiplies two `u128` values into a 256-bit product.
#[must_use]
pub fn widening_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}
