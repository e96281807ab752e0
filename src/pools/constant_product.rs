//! Constant-product pool between the native and the foreign asset.
//!
//! The swap invariant is `x × y = k` with `x = reserve_native` and
//! `y = reserve_foreign`.  The fee is applied to the input inside the
//! pricing formula and is never paid out: `reserve_in` grows by the full
//! input while `reserve_out` shrinks only by the fee-reduced output.
//!
//! # Swap Algorithm
//!
//! ```text
//! effective = amount_in × (PPM − fee_ppm)
//! amount_out = ⌊ effective × reserve_out / (reserve_in × PPM + effective) ⌋
//! reserve_in  += amount_in
//! reserve_out -= amount_out
//! ```
//!
//! # Invariant
//!
//! `k_after ≥ k_before` for every swap, strictly when `fee_ppm > 0`.
//! Deposits keep the reserve ratio: the amounts consumed are derived from
//! the shares issued, not from the amounts offered.

use primitive_types::U256;
use tracing::debug;

use crate::config::PoolConfig;
use crate::domain::{Amount, Asset, AssetAmounts, Liquidity, LiquidityDeposit, Ppm, Rounding, SwapOutcome};
use crate::error::{EngineError, Result};
use crate::math::{isqrt_wide, mul_div, mul_div_wide, narrow, widening_mul, CheckedArithmetic, PPM, PRECISION};
use crate::traits::{FromConfig, QuoteSource};

/// A constant-product (`x · y = k`) pool.
///
/// The pool starts empty.  The first [`add_liquidity`](Self::add_liquidity)
/// sets the reserves and the initial price; afterwards deposits must match
/// the reserve ratio and swaps move along the curve.
///
/// # State
///
/// - `reserve_native` / `reserve_foreign`: both zero or both positive
/// - `lp_supply`: outstanding shares, `√(x₀ × y₀)` at genesis
///
/// # Example
///
/// ```rust
/// use tmctol_engine::domain::{Amount, Asset, Ppm};
/// use tmctol_engine::pools::ConstantProductPool;
///
/// let mut pool = ConstantProductPool::new(Ppm::new(3_000));
/// pool.add_liquidity(Amount::new(1_000_000), Amount::new(2_000_000)).expect("first deposit");
///
/// let quote = pool.quote(Amount::new(1_000), Asset::Foreign);
/// let swap = pool.swap(Amount::new(1_000), quote, Asset::Foreign).expect("swap ok");
/// assert_eq!(swap.amount_out, quote);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    fee: Ppm,
    reserve_native: Amount,
    reserve_foreign: Amount,
    lp_supply: Liquidity,
}

impl ConstantProductPool {
    /// Creates an empty pool with the given swap fee.
    pub const fn new(fee: Ppm) -> Self {
        Self {
            fee,
            reserve_native: Amount::ZERO,
            reserve_foreign: Amount::ZERO,
            lp_supply: Liquidity::ZERO,
        }
    }

    /// Returns the swap fee.
    pub const fn fee(&self) -> Ppm {
        self.fee
    }

    /// Returns the native reserve.
    pub const fn reserve_native(&self) -> Amount {
        self.reserve_native
    }

    /// Returns the foreign reserve.
    pub const fn reserve_foreign(&self) -> Amount {
        self.reserve_foreign
    }

    /// Returns both reserves.
    pub const fn reserves(&self) -> AssetAmounts {
        AssetAmounts::new(self.reserve_native, self.reserve_foreign)
    }

    /// Returns the outstanding LP shares.
    pub const fn lp_supply(&self) -> Liquidity {
        self.lp_supply
    }

    /// Returns `true` once both reserves are positive.
    #[must_use]
    pub const fn has_liquidity(&self) -> bool {
        !self.reserve_native.is_zero() && !self.reserve_foreign.is_zero()
    }

    /// Returns `k = reserve_native × reserve_foreign` without truncation.
    #[must_use]
    pub fn invariant(&self) -> U256 {
        widening_mul(self.reserve_native.get(), self.reserve_foreign.get())
    }

    /// Spot price `reserve_foreign × PRECISION / reserve_native`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoLiquidity`] if either reserve is zero.
    /// - [`EngineError::Overflow`] if the price does not fit.
    pub fn price(&self) -> Result<Amount> {
        if !self.has_liquidity() {
            return Err(EngineError::NoLiquidity);
        }
        spot_price(self.reserve_native, self.reserve_foreign)
    }

    /// Exact-in output for arbitrary reserves, using this pool's fee.
    ///
    /// Returns zero for a zero input or zero reserves, and when the
    /// intermediate product would not fit in 256 bits.  Never fails.
    pub fn quote_out(&self, amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Amount {
        if amount_in.is_zero() || reserve_in.is_zero() || reserve_out.is_zero() {
            return Amount::ZERO;
        }
        let Some(complement) = self.fee.complement() else {
            return Amount::ZERO;
        };
        let effective = widening_mul(amount_in.get(), complement.as_u128());
        let Some(numerator) = effective.checked_mul(U256::from(reserve_out.get())) else {
            return Amount::ZERO;
        };
        let Some(denominator) = widening_mul(reserve_in.get(), PPM).checked_add(effective) else {
            return Amount::ZERO;
        };
        mul_div_wide(numerator, denominator, Rounding::Down)
            .and_then(|q| narrow(q, "quote output"))
            .map_or(Amount::ZERO, Amount::new)
    }

    /// Exact-in output for selling `amount_in` of `asset_in` at the current
    /// reserves.
    pub fn quote(&self, amount_in: Amount, asset_in: Asset) -> Amount {
        let (reserve_in, reserve_out) = self.oriented(asset_in);
        self.quote_out(amount_in, reserve_in, reserve_out)
    }

    /// Deposits liquidity and issues shares.
    ///
    /// On an empty pool the reserves become exactly `(native, foreign)` and
    /// `√(native × foreign)` shares are issued.  On an initialized pool
    /// `min(native × L / Rn, foreign × L / Rf)` shares are issued and only
    /// the reserve-proportional amounts behind them are taken; the rest is
    /// returned in [`LiquidityDeposit::unused`].
    ///
    /// # Errors
    ///
    /// - [`EngineError::InsufficientInitialLiquidity`] if the pool is empty
    ///   and a side is zero.
    /// - [`EngineError::InsufficientLiquidity`] if the pool is initialized
    ///   and the deposit would issue no shares.
    /// - [`EngineError::Overflow`] if reserves or shares overflow.
    pub fn add_liquidity(&mut self, native: Amount, foreign: Amount) -> Result<LiquidityDeposit> {
        let offered = AssetAmounts::new(native, foreign);
        if !self.has_liquidity() {
            return self.seed(offered);
        }
        if !offered.is_two_sided() {
            return Err(EngineError::InsufficientLiquidity);
        }

        let total = self.lp_supply.get();
        let by_native = mul_div(native.get(), total, self.reserve_native.get(), Rounding::Down)?;
        let by_foreign = mul_div(foreign.get(), total, self.reserve_foreign.get(), Rounding::Down)?;
        let minted = by_native.min(by_foreign);
        if minted == 0 {
            return Err(EngineError::InsufficientLiquidity);
        }

        // ceil(minted × R / L) ≤ offered because minted ≤ offered × L / R
        let used = AssetAmounts::new(
            Amount::new(mul_div(minted, self.reserve_native.get(), total, Rounding::Up)?),
            Amount::new(mul_div(minted, self.reserve_foreign.get(), total, Rounding::Up)?),
        );
        let unused = offered.safe_sub(&used)?;
        let reserves = self.reserves().safe_add(&used)?;
        let lp_supply = self.lp_supply.safe_add(&Liquidity::new(minted))?;

        self.reserve_native = reserves.native;
        self.reserve_foreign = reserves.foreign;
        self.lp_supply = lp_supply;

        debug!(lp_minted = minted, used = %used, unused = %unused, "liquidity added");
        Ok(LiquidityDeposit {
            lp_minted: Liquidity::new(minted),
            used,
            unused,
        })
    }

    /// Sells `amount_in` of `asset_in` for the other asset.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoLiquidity`] if the pool is empty.
    /// - [`EngineError::SlippageExceeded`] if the output is below `min_out`.
    /// - [`EngineError::InsufficientLiquidity`] if the output rounds to zero.
    /// - [`EngineError::Overflow`] if a reserve overflows.
    pub fn swap(&mut self, amount_in: Amount, min_out: Amount, asset_in: Asset) -> Result<SwapOutcome> {
        if !self.has_liquidity() {
            return Err(EngineError::NoLiquidity);
        }
        let (reserve_in, reserve_out) = self.oriented(asset_in);
        let amount_out = self.quote_out(amount_in, reserve_in, reserve_out);
        if amount_out < min_out {
            return Err(EngineError::SlippageExceeded);
        }
        if amount_out.is_zero() {
            return Err(EngineError::InsufficientLiquidity);
        }

        let new_in = reserve_in.safe_add(&amount_in)?;
        let new_out = reserve_out.safe_sub(&amount_out)?;
        let (native, foreign) = match asset_in {
            Asset::Native => (new_in, new_out),
            Asset::Foreign => (new_out, new_in),
        };
        let price_before = self.price()?;
        let price_after = spot_price(native, foreign)?;
        let price_impact_ppm = mul_div(
            price_after.abs_diff(&price_before).get(),
            PPM,
            price_before.get(),
            Rounding::Down,
        )?;

        self.reserve_native = native;
        self.reserve_foreign = foreign;

        let outcome = SwapOutcome {
            asset_in,
            amount_in,
            amount_out,
            price_before,
            price_after,
            price_impact_ppm,
        };
        debug!(%outcome, "pool swap");
        Ok(outcome)
    }

    fn seed(&mut self, offered: AssetAmounts) -> Result<LiquidityDeposit> {
        if !offered.is_two_sided() {
            return Err(EngineError::InsufficientInitialLiquidity);
        }
        let product = widening_mul(offered.native.get(), offered.foreign.get());
        let lp = narrow(isqrt_wide(product), "initial shares")?;
        if lp == 0 {
            return Err(EngineError::InsufficientInitialLiquidity);
        }
        let price = spot_price(offered.native, offered.foreign)?;

        self.reserve_native = offered.native;
        self.reserve_foreign = offered.foreign;
        self.lp_supply = Liquidity::new(lp);

        debug!(lp_minted = lp, reserves = %offered, %price, "pool initialized");
        Ok(LiquidityDeposit {
            lp_minted: Liquidity::new(lp),
            used: offered,
            unused: AssetAmounts::ZERO,
        })
    }

    const fn oriented(&self, asset_in: Asset) -> (Amount, Amount) {
        match asset_in {
            Asset::Native => (self.reserve_native, self.reserve_foreign),
            Asset::Foreign => (self.reserve_foreign, self.reserve_native),
        }
    }
}

fn spot_price(native: Amount, foreign: Amount) -> Result<Amount> {
    mul_div(foreign.get(), PRECISION, native.get(), Rounding::Down).map(Amount::new)
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates an empty pool with the configured fee.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.fee_ppm))
    }
}

impl QuoteSource for ConstantProductPool {
    fn quote_native_out(&self, foreign_in: Amount) -> Amount {
        if !self.has_liquidity() {
            return Amount::ZERO;
        }
        self.quote(foreign_in, Asset::Foreign)
    }
}
