//! Secondary market for the native asset.
//!
//! | Pool | Style |
//! |------|-------|
//! | [`ConstantProductPool`] | Uniswap V2, native/foreign pair |
//!
//! The pool has no LP holders other than the treasury buckets: nothing
//! outside [`treasury`](crate::treasury) ever calls
//! [`add_liquidity`](ConstantProductPool::add_liquidity).

pub mod constant_product;

pub use constant_product::ConstantProductPool;
