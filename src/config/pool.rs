//! Configuration for the constant-product pool.

use serde::{Deserialize, Serialize};

use crate::domain::Ppm;
use crate::error::{EngineError, Result};

/// Parameters of the `x · y = k` pool.
///
/// The pool always starts empty; the first treasury deposit sets its
/// reserves.
///
/// # Validation
///
/// - `fee_ppm < PPM` (a 100% fee would make every swap output zero).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    /// Swap fee retained in the reserves.
    pub fee_ppm: Ppm,
}

impl PoolConfig {
    /// Validates the fee.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if `fee_ppm >= PPM`.
    pub fn validate(&self) -> Result<()> {
        if self.fee_ppm >= Ppm::ONE {
            return Err(EngineError::InvalidConfig("pool fee_ppm must be below 1_000_000"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_fee_valid() {
        assert_eq!(PoolConfig::default().validate(), Ok(()));
    }

    #[test]
    fn full_fee_rejected() {
        let cfg = PoolConfig { fee_ppm: Ppm::ONE };
        assert!(cfg.validate().is_err());
    }
}
