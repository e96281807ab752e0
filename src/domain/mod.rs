//! Value types used throughout the engine.
//!
//! Newtypes keep the two fixed-point domains apart: [`Amount`] is
//! amount-scale (`PRECISION = 10^12`), [`Ppm`] is ratio-scale
//! (`PPM = 10^6`), and [`Liquidity`] counts pool shares.  The remaining
//! types describe assets, routes and the records returned by operations.

mod amount;
mod asset;
mod liquidity;
mod outcome;
mod ppm;
mod rounding;
mod settlement;

pub use amount::Amount;
pub use asset::{Asset, AssetAmounts, Route};
pub use liquidity::Liquidity;
pub use outcome::{
    Audit, BucketAllocation, BucketDeposit, BurnOutcome, BuyQuote, FeeReport, LiquidityDeposit,
    MintOutcome, MintQuote, SwapOutcome, TradeOutcome,
};
pub use ppm::Ppm;
pub use rounding::Rounding;
pub use settlement::Settlement;
