//! A single cell of treasury-owned liquidity.

use tracing::{debug, warn};

use crate::domain::{
    Amount, Asset, AssetAmounts, BucketDeposit, Liquidity, LiquidityDeposit, Ppm, Settlement, SwapOutcome,
};
use crate::error::{EngineError, Result};
use crate::math::{widening_mul, CheckedArithmetic};
use crate::pools::ConstantProductPool;

/// Protocol-owned liquidity tracked independently of its siblings.
///
/// `buffer` is a staging area for amounts that could not be deposited yet.
/// It is never counted as owned liquidity and never leaves the bucket
/// except into the pool.  `owned_lp` only ever grows: there is no
/// withdrawal path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidityBucket {
    label: String,
    share: Ppm,
    buffer: AssetAmounts,
    owned_lp: Liquidity,
    contributed: AssetAmounts,
}

impl LiquidityBucket {
    /// Creates an empty bucket.
    pub fn new(label: impl Into<String>, share: Ppm) -> Self {
        Self {
            label: label.into(),
            share,
            buffer: AssetAmounts::ZERO,
            owned_lp: Liquidity::ZERO,
            contributed: AssetAmounts::ZERO,
        }
    }

    /// Bucket name, for reporting.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Share of each treasury allocation routed here.
    pub const fn share(&self) -> Ppm {
        self.share
    }

    /// Amounts waiting for the next deposit attempt.
    pub const fn buffer(&self) -> AssetAmounts {
        self.buffer
    }

    /// Pool shares held by this bucket.
    pub const fn owned_lp(&self) -> Liquidity {
        self.owned_lp
    }

    /// Lifetime amounts moved into the pool.
    pub const fn contributed(&self) -> AssetAmounts {
        self.contributed
    }

    /// Stages `(native, foreign)` and tries to turn the buffer into pool
    /// shares.
    ///
    /// - Empty pool: the whole buffer seeds the pool, or stays buffered if
    ///   seeding fails.
    /// - Initialized pool: the reserve-proportional part is deposited, then
    ///   a remainder of at least `dust` is swapped through the pool into the
    ///   other asset and kept in the buffer for the next call.
    ///
    /// Failures of these sub-steps are reported in the returned
    /// [`Settlement`] and never propagated.
    pub fn deposit(
        &mut self,
        native: Amount,
        foreign: Amount,
        pool: &mut ConstantProductPool,
        dust: Amount,
    ) -> Settlement<BucketDeposit> {
        let staged = match self.buffer.safe_add(&AssetAmounts::new(native, foreign)) {
            Ok(staged) => staged,
            Err(reason) => return self.defer(reason),
        };
        if staged.is_empty() {
            return self.defer(EngineError::AmountTooSmall);
        }
        self.buffer = staged;

        let outcome = if pool.has_liquidity() {
            self.zap(pool, dust)
        } else {
            self.seed(pool)
        };
        outcome.unwrap_or_else(|reason| self.defer(reason))
    }

    fn seed(&mut self, pool: &mut ConstantProductPool) -> Result<Settlement<BucketDeposit>> {
        let deposit = match pool.add_liquidity(self.buffer.native, self.buffer.foreign) {
            Ok(deposit) => deposit,
            Err(reason) => return Ok(self.defer(reason)),
        };
        self.record(&deposit)?;
        Ok(self.settle(BucketDeposit {
            lp_minted: deposit.lp_minted,
            contributed: deposit.used,
            zap: None,
        }))
    }

    fn zap(&mut self, pool: &mut ConstantProductPool, dust: Amount) -> Result<Settlement<BucketDeposit>> {
        let mut applied = BucketDeposit {
            lp_minted: Liquidity::ZERO,
            contributed: AssetAmounts::ZERO,
            zap: None,
        };
        let mut last_error = EngineError::AmountTooSmall;

        if self.buffer.is_two_sided() {
            match pool.add_liquidity(self.buffer.native, self.buffer.foreign) {
                Ok(deposit) => {
                    self.record(&deposit)?;
                    applied.lp_minted = deposit.lp_minted;
                    applied.contributed = deposit.used;
                }
                Err(reason) => {
                    debug!(bucket = %self.label, %reason, "proportional deposit skipped");
                    last_error = reason;
                }
            }
        }

        for asset in self.remainder_sides(pool, dust) {
            let amount = self.buffer.get(asset);
            match pool.swap(amount, Amount::ZERO, asset) {
                Ok(swap) => {
                    self.absorb_swap(&swap)?;
                    applied.zap = Some(swap);
                    break;
                }
                Err(reason) => {
                    debug!(bucket = %self.label, %asset, %reason, "remainder swap skipped");
                    last_error = reason;
                }
            }
        }

        if applied.lp_minted.is_zero() && applied.zap.is_none() {
            return Ok(self.defer(last_error));
        }
        Ok(self.settle(applied))
    }

    /// Buffered sides worth swapping, larger value at the pool ratio first.
    ///
    /// Ceiled deposits leave rounding dust on the binding side, so the
    /// side carrying the real remainder must not wait behind it.  Equal
    /// values convert foreign first.
    fn remainder_sides(&self, pool: &ConstantProductPool, dust: Amount) -> Vec<Asset> {
        let native_value = widening_mul(self.buffer.native.get(), pool.reserve_foreign().get());
        let foreign_value = widening_mul(self.buffer.foreign.get(), pool.reserve_native().get());
        let order = if native_value > foreign_value {
            [Asset::Native, Asset::Foreign]
        } else {
            [Asset::Foreign, Asset::Native]
        };
        order
            .into_iter()
            .filter(|&asset| {
                let amount = self.buffer.get(asset);
                !amount.is_zero() && amount >= dust
            })
            .collect()
    }

    fn record(&mut self, deposit: &LiquidityDeposit) -> Result<()> {
        let owned_lp = self.owned_lp.safe_add(&deposit.lp_minted)?;
        let contributed = self.contributed.safe_add(&deposit.used)?;
        self.owned_lp = owned_lp;
        self.contributed = contributed;
        self.buffer = deposit.unused;
        Ok(())
    }

    fn absorb_swap(&mut self, swap: &SwapOutcome) -> Result<()> {
        self.buffer = self
            .buffer
            .safe_sub(&AssetAmounts::single(swap.asset_in, swap.amount_in))?
            .safe_add(&AssetAmounts::single(swap.asset_in.opposite(), swap.amount_out))?;
        Ok(())
    }

    fn settle(&self, applied: BucketDeposit) -> Settlement<BucketDeposit> {
        if self.buffer.is_empty() {
            Settlement::Applied(applied)
        } else {
            Settlement::PartiallyApplied {
                applied,
                remainder: self.buffer,
            }
        }
    }

    fn defer(&self, reason: EngineError) -> Settlement<BucketDeposit> {
        warn!(bucket = %self.label, %reason, buffered = %self.buffer, "bucket deposit deferred");
        Settlement::Deferred { reason }
    }
}
