//! The single entry point for trades.
//!
//! # Buy
//!
//! ```text
//! validate ─► fee ─► quote curve & pool ─► select_route ─► burn fee ─► mint | swap
//! ```
//!
//! # Sell
//!
//! ```text
//! validate ─► pool initialized? ─► fee ─► burn fee ─► swap
//! ```
//!
//! A trade either completes or leaves every component exactly as it was:
//! the router snapshots the minter, pool and burner before executing and
//! restores them if any step fails.  Buffering inside buckets and the burner
//! is not a failure and is kept.

use tracing::{debug, error, info, warn};

use super::select_route;
use crate::config::RouterConfig;
use crate::curve::CurveMinter;
use crate::domain::{Amount, Asset, AssetAmounts, Audit, BuyQuote, Route, Rounding, TradeOutcome};
use crate::error::{EngineError, Result};
use crate::fees::FeeBurner;
use crate::math::CheckedArithmetic;
use crate::pools::ConstantProductPool;
use crate::traits::QuoteSource;
use crate::treasury::LiquidityBucket;

/// Composes the curve, the pool and the fee burner.
///
/// The router owns all mutable engine state; buckets reach the pool only
/// through the `&mut` the router lends the minter for each mint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    config: RouterConfig,
    minter: CurveMinter,
    pool: ConstantProductPool,
    burner: FeeBurner,
}

struct Checkpoint {
    minter: CurveMinter,
    pool: ConstantProductPool,
    burner: FeeBurner,
}

impl Router {
    /// Wires already-built components.
    ///
    /// # Errors
    ///
    /// Propagates [`RouterConfig::validate`].
    pub fn new(
        config: RouterConfig,
        minter: CurveMinter,
        pool: ConstantProductPool,
        burner: FeeBurner,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            minter,
            pool,
            burner,
        })
    }

    /// Buys native with `foreign_amount`, via whichever route pays more.
    ///
    /// # Errors
    ///
    /// - [`EngineError::BelowMinimum`] if the amount is zero or below the
    ///   per-trade minimum.
    /// - [`EngineError::BootstrapTooSmall`] if the pool is empty and the
    ///   amount is below the bootstrap minimum.
    /// - [`EngineError::AmountTooSmall`] if nothing is left after the fee.
    /// - [`EngineError::SlippageExceeded`] / [`EngineError::NoRoute`] from
    ///   route selection or execution.
    /// - Any error of the executing component.
    pub fn buy(&mut self, foreign_amount: Amount, min_native_out: Amount) -> Result<TradeOutcome> {
        self.transact(|router| router.execute_buy(foreign_amount, min_native_out))
    }

    /// Sells native into the pool.
    ///
    /// # Errors
    ///
    /// - [`EngineError::BelowMinimum`] if the amount is zero or below the
    ///   per-trade minimum.
    /// - [`EngineError::PoolNotInitialized`] if the pool is empty.
    /// - [`EngineError::AmountTooSmall`] if nothing is left after the fee.
    /// - [`EngineError::SlippageExceeded`] if the output is below
    ///   `min_foreign_out`.
    pub fn sell(&mut self, native_amount: Amount, min_foreign_out: Amount) -> Result<TradeOutcome> {
        self.transact(|router| router.execute_sell(native_amount, min_foreign_out))
    }

    /// Previews a buy without touching state.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AmountTooSmall`] if nothing is left after the
    /// fee.
    pub fn quote_buy(&self, foreign_amount: Amount) -> Result<BuyQuote> {
        let (fee, net_in) = self.split_fee(foreign_amount)?;
        let curve_out = self.minter.quote_native_out(net_in);
        let pool_out = self.pool.quote_native_out(net_in);
        Ok(BuyQuote {
            amount_in: foreign_amount,
            fee,
            net_in,
            curve_out,
            pool_out,
            route: select_route(curve_out, pool_out, Amount::ZERO).ok(),
        })
    }

    /// Snapshot of the conserved quantities.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if a bucket total overflows.
    pub fn audit(&self) -> Result<Audit> {
        let allocator = self.minter.allocator();
        Ok(Audit {
            supply: self.minter.supply(),
            total_minted: self.minter.total_minted(),
            total_burned: self.burner.total_burned(),
            buffered_fees: self.burner.buffered(),
            buffered_treasury: allocator.buffered()?,
            owned_lp: allocator.owned_lp()?,
            lp_supply: self.pool.lp_supply(),
            reserves: self.pool.reserves(),
        })
    }

    pub fn curve_price(&self) -> Amount {
        self.minter.spot_price()
    }

    /// # Errors
    ///
    /// Returns [`EngineError::NoLiquidity`] if the pool is empty.
    pub fn pool_price(&self) -> Result<Amount> {
        self.pool.price()
    }

    pub fn supply(&self) -> Amount {
        self.minter.supply()
    }

    pub fn reserves(&self) -> AssetAmounts {
        self.pool.reserves()
    }

    pub fn buckets(&self) -> &[LiquidityBucket] {
        self.minter.allocator().buckets()
    }

    pub const fn minter(&self) -> &CurveMinter {
        &self.minter
    }

    pub const fn pool(&self) -> &ConstantProductPool {
        &self.pool
    }

    pub const fn burner(&self) -> &FeeBurner {
        &self.burner
    }

    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    fn transact<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let checkpoint = Checkpoint {
            minter: self.minter.clone(),
            pool: self.pool.clone(),
            burner: self.burner.clone(),
        };
        let result = op(self);
        if let Err(reason) = &result {
            self.minter = checkpoint.minter;
            self.pool = checkpoint.pool;
            self.burner = checkpoint.burner;
            if reason.is_arithmetic() {
                error!(%reason, "trade rolled back on arithmetic guard");
            } else if reason.is_input_rejection() {
                debug!(%reason, "trade rejected");
            } else {
                warn!(%reason, "trade rolled back");
            }
        }
        result
    }

    fn execute_buy(&mut self, amount: Amount, min_out: Amount) -> Result<TradeOutcome> {
        self.check_minimum(amount)?;
        if !self.pool.has_liquidity() && amount < self.config.min_bootstrap_amount {
            return Err(EngineError::BootstrapTooSmall);
        }
        let (fee, net_in) = self.split_fee(amount)?;

        let curve_out = self.minter.quote_native_out(net_in);
        let pool_out = self.pool.quote_native_out(net_in);
        let route = select_route(curve_out, pool_out, min_out)?;

        let fee_report = self.burner.receive_foreign_fee(fee, &mut self.pool, &mut self.minter)?;

        let (amount_out, price_before, price_after) = match route {
            Route::Curve => {
                let mint = self.minter.mint(net_in, &mut self.pool)?;
                let quote = mint.quote;
                if quote.user_share.is_zero() || quote.user_share < min_out {
                    return Err(EngineError::SlippageExceeded);
                }
                (quote.user_share, quote.price_before, quote.price_after)
            }
            Route::Pool => {
                let swap = self.pool.swap(net_in, min_out, Asset::Foreign)?;
                (swap.amount_out, swap.price_before, swap.price_after)
            }
        };

        let outcome = TradeOutcome {
            route,
            asset_in: Asset::Foreign,
            amount_in: amount,
            fee,
            net_in,
            amount_out,
            price_before,
            price_after,
            fee_report,
        };
        info!(%outcome, curve_out = %curve_out, pool_out = %pool_out, "buy");
        Ok(outcome)
    }

    fn execute_sell(&mut self, amount: Amount, min_out: Amount) -> Result<TradeOutcome> {
        self.check_minimum(amount)?;
        if !self.pool.has_liquidity() {
            return Err(EngineError::PoolNotInitialized);
        }
        let (fee, net_in) = self.split_fee(amount)?;

        let fee_report = self.burner.receive_native_fee(fee, &mut self.minter)?;
        let swap = self.pool.swap(net_in, min_out, Asset::Native)?;

        let outcome = TradeOutcome {
            route: Route::Pool,
            asset_in: Asset::Native,
            amount_in: amount,
            fee,
            net_in,
            amount_out: swap.amount_out,
            price_before: swap.price_before,
            price_after: swap.price_after,
            fee_report,
        };
        info!(%outcome, "sell");
        Ok(outcome)
    }

    fn check_minimum(&self, amount: Amount) -> Result<()> {
        if amount.is_zero() || amount < self.config.min_trade_amount {
            return Err(EngineError::BelowMinimum);
        }
        Ok(())
    }

    /// `(fee, net)` with the fee rounded down.
    fn split_fee(&self, amount: Amount) -> Result<(Amount, Amount)> {
        let fee = self.config.fee_ppm.apply(amount, Rounding::Down)?;
        let net = amount.safe_sub(&fee)?;
        if net.is_zero() {
            return Err(EngineError::AmountTooSmall);
        }
        Ok((fee, net))
    }
}
