//! Treasury-owned liquidity.
//!
//! The treasury share of every mint is split across a fixed list of
//! [`LiquidityBucket`]s by the [`TreasuryAllocator`].  Buckets turn what they
//! receive into pool shares they hold forever; the pool itself is borrowed
//! for each call and never copied.

mod allocator;
mod bucket;

pub use allocator::TreasuryAllocator;
pub use bucket::LiquidityBucket;
