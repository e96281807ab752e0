//! Builds a wired [`Router`] from an [`EngineConfig`].

use tracing::info;

use crate::config::EngineConfig;
use crate::curve::CurveMinter;
use crate::error::Result;
use crate::fees::FeeBurner;
use crate::pools::ConstantProductPool;
use crate::router::{Router, SharedRouter};
use crate::traits::FromConfig;
use crate::treasury::TreasuryAllocator;

/// Stateless factory for engine instances.
///
/// # Thread Safety
///
/// [`create`](Self::create) is a pure function with no shared mutable
/// state.
///
/// # Example
///
/// ```rust
/// use tmctol_engine::config::EngineConfig;
/// use tmctol_engine::factory::EngineFactory;
///
/// let router = EngineFactory::create(&EngineConfig::default()).expect("valid config");
/// assert!(!router.pool().has_liquidity());
/// assert_eq!(router.buckets().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineFactory;

impl EngineFactory {
    /// Creates an engine at zero supply with an empty pool.
    ///
    /// # Flow
    ///
    /// 1. Validate the whole configuration via [`EngineConfig::validate`].
    /// 2. Build the pool, the treasury allocator and the fee burner from
    ///    their sections.
    /// 3. Hand the allocator to the minter and everything to the router.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidConfig`](crate::error::EngineError::InvalidConfig)
    ///   if any section is invalid.  Nothing is built in that case.
    pub fn create(config: &EngineConfig) -> Result<Router> {
        config.validate()?;

        let pool = ConstantProductPool::from_config(&config.pool)?;
        let allocator = TreasuryAllocator::from_config(&config.treasury)?;
        let minter = CurveMinter::new(&config.curve, allocator)?;
        let burner = FeeBurner::from_config(&config.burner)?;
        let router = Router::new(config.router.clone(), minter, pool, burner)?;

        info!(
            price_initial = %config.curve.price_initial,
            slope = %config.curve.slope,
            buckets = config.treasury.buckets.len(),
            "engine created"
        );
        Ok(router)
    }

    /// Same as [`create`](Self::create), behind a [`SharedRouter`].
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_shared(config: &EngineConfig) -> Result<SharedRouter> {
        Self::create(config).map(SharedRouter::new)
    }
}
