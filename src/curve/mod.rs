//! Primary issuance of the native asset.
//!
//! [`CurveMinter`] is the only source of new supply.  Its price is a pure
//! function of outstanding supply, so burning moves the price back down the
//! curve.

mod minter;

pub use minter::CurveMinter;
