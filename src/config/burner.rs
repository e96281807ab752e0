//! Configuration for the fee burner.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Ppm};
use crate::error::{EngineError, Result};
use crate::math::PRECISION;

/// Thresholds for converting and burning collected fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BurnerConfig {
    /// The foreign buffer is only swapped once it reaches this amount.
    pub min_swap_threshold: Amount,
    /// Accepted shortfall of a conversion against its own quote.
    pub slippage_tolerance: Ppm,
}

impl Default for BurnerConfig {
    fn default() -> Self {
        Self {
            min_swap_threshold: Amount::new(PRECISION / 10),
            slippage_tolerance: Ppm::new(20_000),
        }
    }
}

impl BurnerConfig {
    /// Validates the tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if the tolerance exceeds 100%.
    pub fn validate(&self) -> Result<()> {
        if !self.slippage_tolerance.is_valid_fraction() {
            return Err(EngineError::InvalidConfig(
                "burner slippage_tolerance must not exceed 1_000_000",
            ));
        }
        Ok(())
    }
}
