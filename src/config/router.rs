//! Configuration for the router.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Ppm};
use crate::error::{EngineError, Result};
use crate::math::PRECISION;

/// Router fee and trade-size limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Fee taken from every trade's input, in the input asset.
    pub fee_ppm: Ppm,
    /// Smallest accepted trade.
    pub min_trade_amount: Amount,
    /// Smallest accepted buy while the pool is still empty.
    pub min_bootstrap_amount: Amount,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            fee_ppm: Ppm::new(5_000),
            min_trade_amount: Amount::new(PRECISION),
            min_bootstrap_amount: Amount::new(10 * PRECISION),
        }
    }
}

impl RouterConfig {
    /// Validates the fee.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if `fee_ppm >= PPM`.
    pub fn validate(&self) -> Result<()> {
        if self.fee_ppm >= Ppm::ONE {
            return Err(EngineError::InvalidConfig(
                "router fee_ppm must be below 1_000_000",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(RouterConfig::default().validate(), Ok(()));
    }

    #[test]
    fn full_fee_rejected() {
        let cfg = RouterConfig {
            fee_ppm: Ppm::ONE,
            ..RouterConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
