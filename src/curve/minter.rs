//! Linear bonding curve: `price(s) = price_initial + slope × s / PRECISION`.
//!
//! # Mint Algorithm
//!
//! Paying `payment` foreign at supply `s` issues the largest `Δs` whose
//! integral cost does not exceed the payment:
//!
//! ```text
//! payment = price_initial × Δs / P + slope × Δs × (2s + Δs) / (2P²)
//!
//! ⇒ slope·Δs² + (2·P·price_initial + 2·slope·s)·Δs − 2·P²·payment = 0
//!
//! a = slope
//! b = 2·P·price_initial + 2·slope·s
//! c = 2·P²·payment            (the constant term is −c)
//!
//! Δs = ⌊(√(b² + 4ac) − b) / 2a⌋
//! ```
//!
//! With `slope = 0` this reduces to `Δs = ⌊payment × P / price_initial⌋`.
//! Every intermediate is evaluated in 256 bits.  Both the square root and
//! the final division truncate, so rounding always favours the protocol.

use primitive_types::U256;
use tracing::info;

use crate::config::CurveConfig;
use crate::domain::{Amount, AssetAmounts, BurnOutcome, MintOutcome, MintQuote, Ppm, Rounding};
use crate::error::{EngineError, Result};
use crate::math::{isqrt_wide, mul_div, mul_div_wide, narrow, widening_mul, CheckedArithmetic, PRECISION};
use crate::pools::ConstantProductPool;
use crate::traits::QuoteSource;
use crate::treasury::TreasuryAllocator;

/// Issues native supply against foreign payments and burns it back.
///
/// Each mint is split into a payer share and a treasury share; the treasury
/// share and the full payment are handed to the [`TreasuryAllocator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveMinter {
    price_initial: Amount,
    slope: Amount,
    user_ppm: Ppm,
    treasury_ppm: Ppm,
    supply: Amount,
    total_minted: Amount,
    allocator: TreasuryAllocator,
}

impl CurveMinter {
    /// Creates a minter at zero supply.
    ///
    /// # Errors
    ///
    /// Propagates [`CurveConfig::validate`].
    pub fn new(config: &CurveConfig, allocator: TreasuryAllocator) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            price_initial: config.price_initial,
            slope: config.slope,
            user_ppm: config.user_ppm,
            treasury_ppm: config.treasury_ppm,
            supply: Amount::ZERO,
            total_minted: Amount::ZERO,
            allocator,
        })
    }

    /// Outstanding supply.
    pub const fn supply(&self) -> Amount {
        self.supply
    }

    /// Lifetime native issued by [`mint`](Self::mint).
    pub const fn total_minted(&self) -> Amount {
        self.total_minted
    }

    pub const fn price_initial(&self) -> Amount {
        self.price_initial
    }

    pub const fn slope(&self) -> Amount {
        self.slope
    }

    /// Payer and treasury shares of each mint.
    pub const fn split(&self) -> (Ppm, Ppm) {
        (self.user_ppm, self.treasury_ppm)
    }

    pub const fn allocator(&self) -> &TreasuryAllocator {
        &self.allocator
    }

    /// Curve price at `supply`, saturating at [`Amount::MAX`].
    pub fn price_at(&self, supply: Amount) -> Amount {
        mul_div(self.slope.get(), supply.get(), PRECISION, Rounding::Down)
            .map_or(Amount::MAX, |step| {
                Amount::new(self.price_initial.get().saturating_add(step))
            })
    }

    /// Curve price at the current supply.
    pub fn spot_price(&self) -> Amount {
        self.price_at(self.supply)
    }

    /// Spot price as `I80F48`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the price exceeds the `I80F48`
    /// range.
    #[cfg(feature = "fixed-point")]
    pub fn spot_price_fixed(&self) -> Result<fixed::types::I80F48> {
        crate::math::to_fixed(self.spot_price())
    }

    /// Native issued for `payment` at the current supply.
    ///
    /// Returns zero for a zero payment.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if an intermediate exceeds 256 bits
    /// or the result exceeds `u128`.
    pub fn calculate_mint(&self, payment: Amount) -> Result<Amount> {
        if payment.is_zero() {
            return Ok(Amount::ZERO);
        }
        if self.slope.is_zero() {
            return mul_div(payment.get(), PRECISION, self.price_initial.get(), Rounding::Down)
                .map(Amount::new);
        }

        let precision = U256::from(PRECISION);
        let two = U256::from(2u8);
        let a = U256::from(self.slope.get());
        let b = two
            .checked_mul(precision)
            .and_then(|v| v.checked_mul(U256::from(self.price_initial.get())))
            .and_then(|v| {
                let growth = widening_mul(self.slope.get(), self.supply.get()).checked_mul(two)?;
                v.checked_add(growth)
            })
            .ok_or(EngineError::Overflow("curve coefficient b"))?;
        let c = two
            .checked_mul(precision * precision)
            .and_then(|v| v.checked_mul(U256::from(payment.get())))
            .ok_or(EngineError::Overflow("curve coefficient c"))?;
        let discriminant = b
            .checked_mul(b)
            .and_then(|bb| U256::from(4u8).checked_mul(a)?.checked_mul(c)?.checked_add(bb))
            .ok_or(EngineError::Overflow("curve discriminant"))?;

        let root = isqrt_wide(discriminant);
        if root <= b {
            return Ok(Amount::ZERO);
        }
        let delta = mul_div_wide(root - b, two * a, Rounding::Down)?;
        narrow(delta, "mint amount").map(Amount::new)
    }

    /// Foreign needed to issue `delta` at the current supply, rounded up.
    ///
    /// Inverse of [`calculate_mint`](Self::calculate_mint):
    /// `cost_of(calculate_mint(p)) ≤ p`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the cost does not fit.
    pub fn cost_of(&self, delta: Amount) -> Result<Amount> {
        let precision = U256::from(PRECISION);
        let d = U256::from(delta.get());
        let s = U256::from(self.supply.get());
        // 2·P·p0·Δs + slope·(2s·Δs + Δs²), over 2P²
        let numerator = U256::from(2u8)
            .checked_mul(precision)
            .and_then(|v| v.checked_mul(U256::from(self.price_initial.get())))
            .and_then(|v| v.checked_mul(d))
            .and_then(|linear| {
                let span = s.checked_mul(U256::from(2u8))?.checked_add(d)?;
                let quad = U256::from(self.slope.get()).checked_mul(d)?.checked_mul(span)?;
                linear.checked_add(quad)
            })
            .ok_or(EngineError::Overflow("curve cost"))?;
        let denominator = U256::from(2u8) * precision * precision;
        let cost = mul_div_wide(numerator, denominator, Rounding::Up)?;
        narrow(cost, "curve cost").map(Amount::new)
    }

    /// Split and prices of minting against `payment`, without mutation.
    ///
    /// Returns `None` when nothing would be issued.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic failures from [`calculate_mint`](Self::calculate_mint).
    pub fn quote(&self, payment: Amount) -> Result<Option<MintQuote>> {
        let minted = self.calculate_mint(payment)?;
        if minted.is_zero() {
            return Ok(None);
        }
        let user_share = self.user_ppm.apply(minted, Rounding::Down)?;
        let treasury_share = minted.safe_sub(&user_share)?;
        let supply_after = self.supply.safe_add(&minted)?;
        Ok(Some(MintQuote {
            payment,
            minted,
            user_share,
            treasury_share,
            price_before: self.spot_price(),
            price_after: self.price_at(supply_after),
        }))
    }

    /// Issues native against `payment` and hands the treasury share and the
    /// payment to the allocator.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ZeroMint`] if nothing would be issued.
    /// - [`EngineError::Overflow`] on arithmetic overflow.
    pub fn mint(&mut self, payment: Amount, pool: &mut ConstantProductPool) -> Result<MintOutcome> {
        let quote = self.quote(payment)?.ok_or(EngineError::ZeroMint)?;
        let supply = self.supply.safe_add(&quote.minted)?;
        let total_minted = self.total_minted.safe_add(&quote.minted)?;
        self.supply = supply;
        self.total_minted = total_minted;

        let allocations = self
            .allocator
            .allocate(AssetAmounts::new(quote.treasury_share, payment), pool);
        info!(
            %payment,
            minted = %quote.minted,
            user = %quote.user_share,
            treasury = %quote.treasury_share,
            price_after = %quote.price_after,
            "curve mint"
        );
        Ok(MintOutcome { quote, allocations })
    }

    /// Removes `amount` from supply.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InsufficientSupply`] if `amount > supply`.
    pub fn burn(&mut self, amount: Amount) -> Result<BurnOutcome> {
        let supply_before = self.supply;
        let supply_after = supply_before
            .checked_sub(&amount)
            .ok_or(EngineError::InsufficientSupply)?;
        self.supply = supply_after;
        info!(%amount, supply = %supply_after, "curve burn");
        Ok(BurnOutcome {
            amount,
            supply_before,
            supply_after,
        })
    }
}

impl QuoteSource for CurveMinter {
    fn quote_native_out(&self, foreign_in: Amount) -> Amount {
        match self.quote(foreign_in) {
            Ok(Some(quote)) => quote.user_share,
            _ => Amount::ZERO,
        }
    }
}
