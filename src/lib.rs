//! # TMC/TOL engine
//!
//! Integer reference model of a token minting curve (TMC) coupled with
//! treasury-owned liquidity (TOL).  New native supply is only issued by a
//! linear bonding curve; most of every mint, together with the foreign
//! payment, is locked forever in a constant-product pool by the treasury
//! buckets.  A router arbitrates buys between minting and swapping, and
//! router fees are converted to native and burned.
//!
//! Every quantity is an integer: amounts on the `PRECISION = 10^12` scale,
//! ratios on the `PPM = 10^6` scale.  Conservation of supply, the
//! non-decreasing pool invariant and the non-decreasing treasury position
//! hold exactly, not approximately.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `fixed-point` | no | `I80F48` views of amounts for reporting |
//!
//! # Quick Start
//!
//! ```rust
//! use tmctol_engine::prelude::*;
//!
//! let mut router = EngineFactory::create(&EngineConfig::default()).expect("valid config");
//!
//! // The first buy must clear the bootstrap minimum; it mints and seeds the pool.
//! let first = router.buy(Amount::new(1_000 * PRECISION), Amount::ZERO).expect("bootstrap");
//! assert_eq!(first.route, Route::Curve);
//!
//! // Later buys take whichever route pays more, sells always use the pool.
//! let buy = router.buy(Amount::new(10 * PRECISION), Amount::ZERO).expect("buy");
//! let sell = router.sell(buy.amount_out, Amount::ZERO).expect("sell");
//! assert_eq!(sell.route, Route::Pool);
//!
//! let audit = router.audit().expect("audit");
//! assert!(audit.is_conserved());
//! assert!(audit.treasury_owns_pool());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  EngineConfig + EngineFactory
//! └──────┬───────┘
//!        │ buy / sell
//!        ▼
//! ┌──────────────┐   fee    ┌──────────────┐
//! │    Router     │ ───────► │  FeeBurner    │ ── swap ─► pool, burn ─► minter
//! └──┬────────┬──┘          └──────────────┘
//!    │ mint   │ swap
//!    ▼        ▼
//! ┌────────┐ ┌──────────────────────┐
//! │ Minter │ │ ConstantProductPool   │
//! └───┬────┘ └──────────▲───────────┘
//!     │ allocate         │ add_liquidity / zap
//!     ▼                  │
//! ┌──────────────────────┴┐
//! │ TreasuryAllocator      │ ─► LiquidityBucket × N
//! └───────────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Ppm`](domain::Ppm), [`Settlement`](domain::Settlement), outcome records |
//! | [`math`] | 256-bit `mul_div`, square roots, checked arithmetic |
//! | [`config`] | [`EngineConfig`](config::EngineConfig) and per-component sections |
//! | [`pools`] | [`ConstantProductPool`](pools::ConstantProductPool) |
//! | [`treasury`] | [`TreasuryAllocator`](treasury::TreasuryAllocator) and [`LiquidityBucket`](treasury::LiquidityBucket) |
//! | [`curve`] | [`CurveMinter`](curve::CurveMinter) |
//! | [`fees`] | [`FeeBurner`](fees::FeeBurner) |
//! | [`router`] | [`Router`](router::Router), [`select_route`](router::select_route), [`SharedRouter`](router::SharedRouter) |
//! | [`factory`] | [`EngineFactory`](factory::EngineFactory) |
//! | [`traits`] | [`FromConfig`](traits::FromConfig), [`QuoteSource`](traits::QuoteSource) |
//! | [`error`] | [`EngineError`](error::EngineError) |
//! | [`prelude`] | Common re-exports |

pub mod config;
pub mod curve;
pub mod domain;
pub mod error;
pub mod factory;
pub mod fees;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod router;
pub mod traits;
pub mod treasury;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;
