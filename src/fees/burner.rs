//! Router fees are converted to native and burned.
//!
//! Foreign fees accumulate until they reach `min_swap_threshold`, then the
//! whole foreign buffer is sold into the pool.  Native fees, and native
//! bought with foreign fees, are burned against the curve supply.  A step
//! that cannot run leaves its input buffered for the next fee.

use tracing::{debug, warn};

use crate::config::BurnerConfig;
use crate::curve::CurveMinter;
use crate::domain::{Amount, Asset, AssetAmounts, BurnOutcome, FeeReport, Ppm, Rounding, Settlement, SwapOutcome};
use crate::error::{EngineError, Result};
use crate::math::CheckedArithmetic;
use crate::pools::ConstantProductPool;
use crate::traits::FromConfig;

/// Fee buffer and burn counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeBurner {
    buffer: AssetAmounts,
    total_burned: Amount,
    min_swap_threshold: Amount,
    slippage_tolerance: Ppm,
}

impl FeeBurner {
    /// Lifetime native burned.  Never decreases.
    pub const fn total_burned(&self) -> Amount {
        self.total_burned
    }

    /// Fees waiting for conversion or burn.
    pub const fn buffered(&self) -> AssetAmounts {
        self.buffer
    }

    pub const fn min_swap_threshold(&self) -> Amount {
        self.min_swap_threshold
    }

    /// Takes a foreign-denominated fee, converts the buffer if it is large
    /// enough, and burns any native on hand.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if a buffer or the burn counter
    /// overflows.  Conversion and burn failures are reported in the
    /// [`FeeReport`] instead.
    pub fn receive_foreign_fee(
        &mut self,
        amount: Amount,
        pool: &mut ConstantProductPool,
        minter: &mut CurveMinter,
    ) -> Result<FeeReport> {
        self.buffer = self.buffer.safe_add(&AssetAmounts::single(Asset::Foreign, amount))?;
        let conversion = self.convert(pool)?;
        let burn = self.burn_buffered(minter)?;
        Ok(FeeReport {
            asset: Asset::Foreign,
            received: amount,
            conversion,
            burn,
            buffered: self.buffer,
        })
    }

    /// Takes a native-denominated fee and burns the native buffer.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the buffer or the burn counter
    /// overflows.
    pub fn receive_native_fee(&mut self, amount: Amount, minter: &mut CurveMinter) -> Result<FeeReport> {
        self.buffer = self.buffer.safe_add(&AssetAmounts::single(Asset::Native, amount))?;
        let burn = self.burn_buffered(minter)?;
        Ok(FeeReport {
            asset: Asset::Native,
            received: amount,
            conversion: None,
            burn,
            buffered: self.buffer,
        })
    }

    fn convert(&mut self, pool: &mut ConstantProductPool) -> Result<Option<Settlement<SwapOutcome>>> {
        let foreign = self.buffer.foreign;
        if foreign.is_zero() {
            return Ok(None);
        }
        if foreign < self.min_swap_threshold {
            debug!(buffered = %foreign, threshold = %self.min_swap_threshold, "fee below swap threshold");
            return Ok(Some(Settlement::Deferred {
                reason: EngineError::BelowMinimum,
            }));
        }
        if !pool.has_liquidity() {
            return Ok(Some(Settlement::Deferred {
                reason: EngineError::NoLiquidity,
            }));
        }

        let quote = pool.quote(foreign, Asset::Foreign);
        let min_out = quote.safe_sub(&self.slippage_tolerance.apply(quote, Rounding::Down)?)?;
        match pool.swap(foreign, min_out, Asset::Foreign) {
            Ok(swap) => {
                self.buffer = AssetAmounts::new(self.buffer.native.safe_add(&swap.amount_out)?, Amount::ZERO);
                Ok(Some(Settlement::Applied(swap)))
            }
            Err(reason) => {
                warn!(%reason, buffered = %foreign, "fee conversion deferred");
                Ok(Some(Settlement::Deferred { reason }))
            }
        }
    }

    fn burn_buffered(&mut self, minter: &mut CurveMinter) -> Result<Option<Settlement<BurnOutcome>>> {
        let native = self.buffer.native;
        if native.is_zero() {
            return Ok(None);
        }
        match minter.burn(native) {
            Ok(burn) => {
                self.total_burned = self.total_burned.safe_add(&native)?;
                self.buffer.native = Amount::ZERO;
                debug!(%native, total_burned = %self.total_burned, "fee burned");
                Ok(Some(Settlement::Applied(burn)))
            }
            Err(reason) => {
                warn!(%reason, buffered = %native, "fee burn deferred");
                Ok(Some(Settlement::Deferred { reason }))
            }
        }
    }
}

impl FromConfig<BurnerConfig> for FeeBurner {
    fn from_config(config: &BurnerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            buffer: AssetAmounts::ZERO,
            total_burned: Amount::ZERO,
            min_swap_threshold: config.min_swap_threshold,
            slippage_tolerance: config.slippage_tolerance,
        })
    }
}
