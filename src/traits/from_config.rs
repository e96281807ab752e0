//! Construction of components from their configuration section.
//!
//! Each component implements `FromConfig<C>` for its own section.
//! Implementations validate the section themselves, so a component built
//! through this trait always starts in a valid state even when it is
//! constructed outside the [`EngineFactory`](crate::factory::EngineFactory).
//!
//! # Implementors
//!
//! - `impl FromConfig<PoolConfig> for ConstantProductPool`
//! - `impl FromConfig<TreasuryConfig> for TreasuryAllocator`
//! - `impl FromConfig<BurnerConfig> for FeeBurner`
//!
//! The minter and the router also need already-built collaborators, so they
//! are wired by the factory instead.

use crate::error::Result;

/// Builds `Self` from a configuration section.
pub trait FromConfig<C> {
    /// Validates `config` and constructs the component.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`](crate::error::EngineError::InvalidConfig)
    /// if the section is invalid.
    fn from_config(config: &C) -> Result<Self>
    where
        Self: Sized;
}
