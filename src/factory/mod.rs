//! Engine construction.
//!
//! [`EngineFactory`] validates an [`EngineConfig`] once and wires the pool,
//! treasury, minter, burner and router together.
//!
//! # Usage
//!
//! ```rust
//! use tmctol_engine::config::EngineConfig;
//! use tmctol_engine::domain::Amount;
//! use tmctol_engine::factory::EngineFactory;
//! use tmctol_engine::math::PRECISION;
//!
//! let mut router = EngineFactory::create(&EngineConfig::default()).expect("valid config");
//! let trade = router.buy(Amount::new(100 * PRECISION), Amount::ZERO).expect("bootstrap buy");
//! assert!(router.pool().has_liquidity());
//! assert!(trade.amount_out > Amount::ZERO);
//! ```
//!
//! [`EngineConfig`]: crate::config::EngineConfig

mod engine_factory;

pub use engine_factory::EngineFactory;
