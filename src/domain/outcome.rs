//! Records returned by pool, curve, treasury, burner and router operations.

use core::fmt;

use super::{Amount, Asset, AssetAmounts, Liquidity, Route, Settlement};

/// Result of a pool swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOutcome {
    /// Asset sold into the pool.
    pub asset_in: Asset,
    /// Input credited to `reserve_in`.
    pub amount_in: Amount,
    /// Output debited from `reserve_out`.
    pub amount_out: Amount,
    /// Pool price (foreign per native) before the swap.
    pub price_before: Amount,
    /// Pool price after the swap.
    pub price_after: Amount,
    /// `|after - before| * PPM / before`.
    pub price_impact_ppm: u128,
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap {} {} -> {} (price {} -> {}, impact {}ppm)",
            self.amount_in,
            self.asset_in,
            self.amount_out,
            self.price_before,
            self.price_after,
            self.price_impact_ppm
        )
    }
}

/// Result of [`add_liquidity`](crate::pools::ConstantProductPool::add_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityDeposit {
    /// Shares issued.
    pub lp_minted: Liquidity,
    /// Amounts moved into the reserves.
    pub used: AssetAmounts,
    /// Offered amounts handed back to the depositor.
    pub unused: AssetAmounts,
}

/// Split and prices of a mint, without side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintQuote {
    /// Foreign payment.
    pub payment: Amount,
    /// Total native issued.
    pub minted: Amount,
    /// Part of `minted` that goes to the payer.
    pub user_share: Amount,
    /// `minted - user_share`, routed to the treasury buckets.
    pub treasury_share: Amount,
    /// Curve price at the current supply.
    pub price_before: Amount,
    /// Curve price after issuing `minted`.
    pub price_after: Amount,
}

/// Result of an executed mint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintOutcome {
    /// The split that was applied.
    pub quote: MintQuote,
    /// Per-bucket results of distributing `(treasury_share, payment)`.
    pub allocations: Vec<BucketAllocation>,
}

/// Result of a curve burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurnOutcome {
    /// Amount removed from supply.
    pub amount: Amount,
    /// Supply before the burn.
    pub supply_before: Amount,
    /// Supply after the burn.
    pub supply_after: Amount,
}

/// What a bucket deposit achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketDeposit {
    /// Shares acquired by the bucket in this call.
    pub lp_minted: Liquidity,
    /// Amounts moved into the pool by the proportional deposit.
    pub contributed: AssetAmounts,
    /// Swap of the single-sided remainder, if one ran.
    pub zap: Option<SwapOutcome>,
}

/// One bucket's slice of a treasury allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketAllocation {
    /// Position of the bucket in the allocator.
    pub index: usize,
    /// Amounts forwarded to the bucket.
    pub share: AssetAmounts,
    /// How the bucket handled them.
    pub settlement: Settlement<BucketDeposit>,
}

/// Result of handing a fee to the burner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeReport {
    /// Denomination of the fee.
    pub asset: Asset,
    /// Fee amount received.
    pub received: Amount,
    /// Conversion of the foreign buffer into native, when attempted.
    pub conversion: Option<Settlement<SwapOutcome>>,
    /// Burn of the native buffer, when there was anything to burn.
    pub burn: Option<Settlement<BurnOutcome>>,
    /// Buffers left after this call.
    pub buffered: AssetAmounts,
}

/// Result of a router trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeOutcome {
    /// Route that filled the trade.
    pub route: Route,
    /// Asset paid by the caller.
    pub asset_in: Asset,
    /// Gross input.
    pub amount_in: Amount,
    /// Router fee taken from the input.
    pub fee: Amount,
    /// `amount_in - fee`, executed on the route.
    pub net_in: Amount,
    /// Output delivered to the caller.
    pub amount_out: Amount,
    /// Price of the executing venue before the trade.
    pub price_before: Amount,
    /// Price of the executing venue after the trade.
    pub price_after: Amount,
    /// What the burner did with the fee.
    pub fee_report: FeeReport,
}

impl fmt::Display for TradeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {}: in {} (fee {}) -> out {}",
            self.asset_in, self.route, self.amount_in, self.fee, self.amount_out
        )
    }
}

/// Read-only preview of a buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyQuote {
    /// Gross foreign input.
    pub amount_in: Amount,
    /// Router fee.
    pub fee: Amount,
    /// Net input quoted on both routes.
    pub net_in: Amount,
    /// Native the payer would receive from the curve.
    pub curve_out: Amount,
    /// Native the pool would return.
    pub pool_out: Amount,
    /// Route the router would take with no minimum, if any.
    pub route: Option<Route>,
}

/// Snapshot of the conserved quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Audit {
    /// Outstanding native supply.
    pub supply: Amount,
    /// Lifetime native issued by the curve.
    pub total_minted: Amount,
    /// Lifetime native burned by the fee burner.
    pub total_burned: Amount,
    /// Fees waiting in the burner.
    pub buffered_fees: AssetAmounts,
    /// Pending amounts across all buckets.
    pub buffered_treasury: AssetAmounts,
    /// Shares held by the buckets.
    pub owned_lp: Liquidity,
    /// Shares outstanding in the pool.
    pub lp_supply: Liquidity,
    /// Pool reserves.
    pub reserves: AssetAmounts,
}

impl Audit {
    /// `supply + total_burned == total_minted`.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        self.supply
            .checked_add(&self.total_burned)
            .is_some_and(|sum| sum == self.total_minted)
    }

    /// Buckets are the only liquidity providers, so they must own every share.
    #[must_use]
    pub fn treasury_owns_pool(&self) -> bool {
        self.owned_lp == self.lp_supply
    }
}
