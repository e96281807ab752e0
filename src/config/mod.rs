//! Engine configuration.
//!
//! [`EngineConfig`] groups one section per component.  Sections are plain
//! data with a `validate()` method; the factory validates the whole tree
//! once before wiring anything.

mod burner;
mod curve;
mod engine;
mod pool;
mod router;
mod treasury;

pub use burner::BurnerConfig;
pub use curve::CurveConfig;
pub use engine::EngineConfig;
pub use pool::PoolConfig;
pub use router::RouterConfig;
pub use treasury::{BucketConfig, TreasuryConfig};
