//! Top-level engine configuration.
//!
//! [`EngineConfig`] is the single blueprint the
//! [`EngineFactory`](crate::factory::EngineFactory) consumes.  Each section
//! configures one component and is handed to that component's constructor
//! by reference; nothing is read from global state.
//!
//! Every struct is `#[serde(default)]`, so a partial document overrides only
//! the fields it names:
//!
//! ```
//! use tmctol_engine::config::EngineConfig;
//!
//! let cfg: EngineConfig =
//!     serde_json::from_str(r#"{ "router": { "fee_ppm": 0 } }"#).expect("valid json");
//! assert_eq!(cfg.router.fee_ppm.get(), 0);
//! assert_eq!(cfg.curve, EngineConfig::default().curve);
//! ```

use serde::{Deserialize, Serialize};

use super::{BurnerConfig, CurveConfig, PoolConfig, RouterConfig, TreasuryConfig};
use crate::error::Result;

/// Configuration for every component of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Minting curve and mint split.
    pub curve: CurveConfig,
    /// Constant-product pool.
    pub pool: PoolConfig,
    /// Treasury buckets.
    pub treasury: TreasuryConfig,
    /// Fee burner.
    pub burner: BurnerConfig,
    /// Router fee and limits.
    pub router: RouterConfig,
}

impl EngineConfig {
    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidConfig`](crate::error::EngineError::InvalidConfig)
    /// raised by a section's `validate()`.
    pub fn validate(&self) -> Result<()> {
        self.curve.validate()?;
        self.pool.validate()?;
        self.treasury.validate()?;
        self.burner.validate()?;
        self.router.validate()
    }
}
