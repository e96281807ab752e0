//! Splits treasury inflows across the configured buckets.

use tracing::debug;

use super::LiquidityBucket;
use crate::config::TreasuryConfig;
use crate::domain::{Amount, AssetAmounts, BucketAllocation, Liquidity, Rounding, Settlement};
use crate::error::Result;
use crate::math::CheckedArithmetic;
use crate::pools::ConstantProductPool;
use crate::traits::FromConfig;

/// Owns the buckets and distributes each treasury share among them.
///
/// Every bucket except the last receives `⌊total × share / PPM⌋` of each
/// asset; the last receives whatever remains, so the slices always sum to
/// the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreasuryAllocator {
    buckets: Vec<LiquidityBucket>,
    zap_dust_threshold: Amount,
}

impl TreasuryAllocator {
    /// Buckets in allocation order.
    pub fn buckets(&self) -> &[LiquidityBucket] {
        &self.buckets
    }

    /// Minimum remainder a bucket will swap.
    pub const fn zap_dust_threshold(&self) -> Amount {
        self.zap_dust_threshold
    }

    /// Total pool shares held by all buckets.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the sum overflows.
    pub fn owned_lp(&self) -> Result<Liquidity> {
        self.buckets
            .iter()
            .try_fold(Liquidity::ZERO, |acc, b| acc.safe_add(&b.owned_lp()))
    }

    /// Total amounts still staged across all buckets.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the sum overflows.
    pub fn buffered(&self) -> Result<AssetAmounts> {
        self.buckets
            .iter()
            .try_fold(AssetAmounts::ZERO, |acc, b| acc.safe_add(&b.buffer()))
    }

    /// Splits `total` across the buckets and deposits each slice.
    ///
    /// Never fails: bucket problems are reported per slice.  Returns one
    /// [`BucketAllocation`] per bucket, in order.
    pub fn allocate(&mut self, total: AssetAmounts, pool: &mut ConstantProductPool) -> Vec<BucketAllocation> {
        let shares = self.split(total);
        let dust = self.zap_dust_threshold;
        let allocations: Vec<BucketAllocation> = self
            .buckets
            .iter_mut()
            .zip(shares)
            .enumerate()
            .map(|(index, (bucket, share))| match share {
                Ok(share) => BucketAllocation {
                    index,
                    share,
                    settlement: bucket.deposit(share.native, share.foreign, pool, dust),
                },
                Err(reason) => BucketAllocation {
                    index,
                    share: AssetAmounts::ZERO,
                    settlement: Settlement::Deferred { reason },
                },
            })
            .collect();
        debug!(%total, buckets = allocations.len(), "treasury allocation");
        allocations
    }

    /// Per-bucket slices of `total`, remainder to the last bucket.
    fn split(&self, total: AssetAmounts) -> Vec<Result<AssetAmounts>> {
        let last = self.buckets.len().saturating_sub(1);
        let mut remaining = total;
        let mut shares = Vec::with_capacity(self.buckets.len());
        for (index, bucket) in self.buckets.iter().enumerate() {
            if index == last {
                shares.push(Ok(remaining));
                break;
            }
            let share = bucket
                .share()
                .apply(total.native, Rounding::Down)
                .and_then(|native| {
                    bucket
                        .share()
                        .apply(total.foreign, Rounding::Down)
                        .map(|foreign| AssetAmounts::new(native, foreign))
                })
                .and_then(|share| remaining.safe_sub(&share).map(|rest| (share, rest)));
            match share {
                Ok((share, rest)) => {
                    remaining = rest;
                    shares.push(Ok(share));
                }
                Err(reason) => shares.push(Err(reason)),
            }
        }
        shares
    }
}

impl FromConfig<TreasuryConfig> for TreasuryAllocator {
    fn from_config(config: &TreasuryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            buckets: config
                .buckets
                .iter()
                .map(|b| LiquidityBucket::new(b.label.clone(), b.share))
                .collect(),
            zap_dust_threshold: config.zap_dust_threshold,
        })
    }
}
