//! Configuration for the linear minting curve.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Ppm};
use crate::error::{EngineError, Result};
use crate::math::PRECISION;

/// Parameters of the bonding curve `price(s) = price_initial + slope * s / PRECISION`
/// and of the mint split.
///
/// # Validation
///
/// - `price_initial > 0`.
/// - `user_ppm + treasury_ppm == PPM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurveConfig {
    /// Price at zero supply (amount-scale, foreign per native).
    pub price_initial: Amount,
    /// Price increase per unit of supply (amount-scale).
    pub slope: Amount,
    /// Share of each mint delivered to the payer.
    pub user_ppm: Ppm,
    /// Share of each mint routed to treasury liquidity.
    pub treasury_ppm: Ppm,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            price_initial: Amount::new(PRECISION),
            slope: Amount::new(PRECISION / 1_000_000),
            user_ppm: Ppm::new(333_333),
            treasury_ppm: Ppm::new(666_667),
        }
    }
}

impl CurveConfig {
    /// Validates all curve invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] on the first violated rule.
    pub fn validate(&self) -> Result<()> {
        if self.price_initial.is_zero() {
            return Err(EngineError::InvalidConfig("price_initial must be positive"));
        }
        let split = Ppm::checked_sum([&self.user_ppm, &self.treasury_ppm])?;
        if split != Ppm::ONE {
            return Err(EngineError::InvalidConfig(
                "user_ppm + treasury_ppm must equal 1_000_000",
            ));
        }
        Ok(())
    }
}
