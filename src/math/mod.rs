//! Fixed-point arithmetic for the engine.
//!
//! - [`PRECISION`] / [`PPM`]: the amount and ratio scales.
//! - [`mul_div`], [`div_round`]: division with explicit
//!   [`Rounding`](crate::domain::Rounding), 256-bit intermediates where needed.
//! - [`isqrt_wide`]: floor square root for LP issuance and the curve's
//!   quadratic.
//! - [`CheckedArithmetic`]: `?`-friendly add/sub on the quantity newtypes.
//!
//! # Feature-gated helpers
//!
//! | Feature | Item | Use case |
//! |---------|------|----------|
//! | `fixed-point` | `to_fixed` | Reporting amounts as `I80F48` |

mod checked;
mod fixed_point;
mod rounding;

#[cfg(feature = "fixed-point")]
mod fixed_view;

pub use checked::CheckedArithmetic;
pub use fixed_point::{isqrt_wide, mul_div, mul_div_wide, narrow, widening_mul, PPM, PRECISION};
pub use rounding::div_round;

#[cfg(feature = "fixed-point")]
pub use fixed_view::to_fixed;
