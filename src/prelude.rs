//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use tmctol_engine::prelude::*;
//! ```

pub use crate::config::{
    BucketConfig, BurnerConfig, CurveConfig, EngineConfig, PoolConfig, RouterConfig, TreasuryConfig,
};
pub use crate::curve::CurveMinter;
pub use crate::domain::{
    Amount, Asset, AssetAmounts, Audit, Liquidity, Ppm, Rounding, Route, Settlement, TradeOutcome,
};
pub use crate::error::{EngineError, Result};
pub use crate::factory::EngineFactory;
pub use crate::fees::FeeBurner;
pub use crate::math::{CheckedArithmetic, PPM, PRECISION};
pub use crate::pools::ConstantProductPool;
pub use crate::router::{select_route, Router, SharedRouter};
pub use crate::traits::{FromConfig, QuoteSource};
pub use crate::treasury::{LiquidityBucket, TreasuryAllocator};
