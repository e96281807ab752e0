//! Property-based tests using `proptest` for engine invariants.
//!
//! 1. **Curve price**: `price(s) == p0 + slope × s / P` exactly.
//! 2. **Mint split**: payer and treasury shares sum to the minted amount.
//! 3. **Mint maximality**: `cost_of(Δs) ≤ payment < cost_of(Δs + 1)`.
//! 4. **Pool invariant**: `k` never decreases across swaps.
//! 5. **Deposit accounting**: `used + unused == offered`, `used ≤ offered`.
//! 6. **Allocation**: bucket slices sum exactly to the input for any N.
//! 7. **Conservation**: `supply + total_burned == total_minted` after any
//!    sequence of trades.
//! 8. **Treasury lock**: sells never reduce bucket-owned shares.
//! 9. **Route tie-break**: equal viable quotes always pick the curve.

use proptest::prelude::*;

use crate::config::{BucketConfig, CurveConfig, EngineConfig, TreasuryConfig};
use crate::curve::CurveMinter;
use crate::domain::{Amount, Asset, AssetAmounts, Ppm, Route};
use crate::factory::EngineFactory;
use crate::math::PRECISION;
use crate::pools::ConstantProductPool;
use crate::router::{select_route, Router};
use crate::traits::FromConfig;
use crate::treasury::TreasuryAllocator;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn make_minter(price_initial: u128, slope: u128, user_ppm: u32) -> CurveMinter {
    let config = CurveConfig {
        price_initial: Amount::new(price_initial),
        slope: Amount::new(slope),
        user_ppm: Ppm::new(user_ppm),
        treasury_ppm: Ppm::new(1_000_000 - user_ppm),
    };
    let Ok(allocator) = TreasuryAllocator::from_config(&TreasuryConfig::default()) else {
        panic!("valid treasury");
    };
    let Ok(minter) = CurveMinter::new(&config, allocator) else {
        panic!("valid curve");
    };
    minter
}

fn make_pool(native: u128, foreign: u128, fee_ppm: u32) -> ConstantProductPool {
    let mut pool = ConstantProductPool::new(Ppm::new(fee_ppm));
    let Ok(_) = pool.add_liquidity(Amount::new(native), Amount::new(foreign)) else {
        panic!("seed deposit");
    };
    pool
}

fn bootstrapped_router() -> Router {
    let Ok(mut router) = EngineFactory::create(&EngineConfig::default()) else {
        panic!("default config builds");
    };
    let Ok(_) = router.buy(Amount::new(1_000 * PRECISION), Amount::ZERO) else {
        panic!("bootstrap buy");
    };
    router
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Prices between 0.001 and 1000 on the amount scale.
fn price_strategy() -> impl Strategy<Value = u128> {
    (PRECISION / 1_000)..=(1_000 * PRECISION)
}

/// Slopes from flat to one whole unit of price per unit of supply.
fn slope_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![Just(0u128), 1u128..=PRECISION]
}

/// Payments up to one million whole units.
fn payment_strategy() -> impl Strategy<Value = u128> {
    1u128..=(1_000_000 * PRECISION)
}

fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=(1_000_000 * PRECISION)
}

/// Between one and eight bucket shares summing to `PPM`.
fn shares_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..=1_000, 1..=8).prop_map(|weights| {
        let total: u32 = weights.iter().sum();
        let mut shares: Vec<u32> = weights.iter().map(|w| w * 1_000_000 / total).collect();
        let assigned: u32 = shares.iter().sum();
        if let Some(last) = shares.last_mut() {
            *last += 1_000_000 - assigned;
        }
        shares
    })
}

#[derive(Debug, Clone, Copy)]
enum Trade {
    Buy(u128),
    Sell(u128),
}

fn trade_strategy() -> impl Strategy<Value = Trade> {
    prop_oneof![
        (1u128..=500).prop_map(|w| Trade::Buy(w * PRECISION)),
        (1u128..=50).prop_map(|w| Trade::Sell(w * PRECISION)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // -----------------------------------------------------------------------
    // Property 1: Curve price
    // -----------------------------------------------------------------------

    #[test]
    fn prop_curve_price_is_linear(
        p0 in price_strategy(),
        slope in slope_strategy(),
        supply in 0u128..=(1_000_000_000 * PRECISION),
    ) {
        let minter = make_minter(p0, slope, 333_333);
        let expected = p0 + slope * supply / PRECISION;
        prop_assert_eq!(minter.price_at(Amount::new(supply)), Amount::new(expected));
    }

    // -----------------------------------------------------------------------
    // Property 2: Mint split
    // -----------------------------------------------------------------------

    #[test]
    fn prop_mint_split_is_exact(
        p0 in price_strategy(),
        slope in slope_strategy(),
        payment in payment_strategy(),
        user_ppm in 0u32..=1_000_000,
    ) {
        let mut minter = make_minter(p0, slope, user_ppm);
        let mut pool = ConstantProductPool::new(Ppm::ZERO);
        let supply_before = minter.supply();
        let Ok(outcome) = minter.mint(Amount::new(payment), &mut pool) else {
            return Ok(());
        };
        let q = outcome.quote;
        prop_assert_eq!(q.user_share.get() + q.treasury_share.get(), q.minted.get());
        prop_assert_eq!(minter.supply().get(), supply_before.get() + q.minted.get());
        prop_assert_eq!(outcome.allocations.len(), 4);
    }

    // -----------------------------------------------------------------------
    // Property 3: Mint maximality
    // -----------------------------------------------------------------------

    #[test]
    fn prop_mint_is_largest_affordable(
        p0 in price_strategy(),
        slope in slope_strategy(),
        prior in 0u128..=(10_000 * PRECISION),
        payment in payment_strategy(),
    ) {
        let mut minter = make_minter(p0, slope, 1_000_000);
        let mut pool = ConstantProductPool::new(Ppm::ZERO);
        let _ = minter.mint(Amount::new(prior), &mut pool);

        let Ok(delta) = minter.calculate_mint(Amount::new(payment)) else {
            return Ok(());
        };
        let Ok(cost) = minter.cost_of(delta) else {
            return Ok(());
        };
        prop_assert!(cost.get() <= payment, "cost {} > payment {}", cost, payment);
        let Ok(over) = minter.cost_of(Amount::new(delta.get() + 1)) else {
            return Ok(());
        };
        prop_assert!(over.get() > payment, "Δs + 1 still affordable: {} <= {}", over, payment);
    }

    // -----------------------------------------------------------------------
    // Property 4: Pool invariant
    // -----------------------------------------------------------------------

    #[test]
    fn prop_swaps_never_decrease_k(
        rn in reserve_strategy(),
        rf in reserve_strategy(),
        fee_ppm in prop_oneof![Just(0u32), 1u32..=100_000],
        swaps in prop::collection::vec((any::<bool>(), 1u128..=1_000), 1..=10),
    ) {
        let mut pool = make_pool(rn, rf, fee_ppm);
        for (native_in, bps) in swaps {
            let asset = if native_in { Asset::Native } else { Asset::Foreign };
            let amount = (pool.reserves().get(asset).get() * bps / 10_000).max(1);
            let k_before = pool.invariant();
            if pool.swap(Amount::new(amount), Amount::ZERO, asset).is_ok() {
                prop_assert!(pool.invariant() >= k_before);
                if fee_ppm > 0 {
                    prop_assert!(pool.invariant() > k_before);
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Property 5: Deposit accounting
    // -----------------------------------------------------------------------

    #[test]
    fn prop_deposit_returns_unused(
        rn in reserve_strategy(),
        rf in reserve_strategy(),
        an in 1u128..=(1_000 * PRECISION),
        af in 1u128..=(1_000 * PRECISION),
    ) {
        let mut pool = make_pool(rn, rf, 0);
        let Ok(dep) = pool.add_liquidity(Amount::new(an), Amount::new(af)) else {
            return Ok(());
        };
        prop_assert!(dep.used.native.get() <= an);
        prop_assert!(dep.used.foreign.get() <= af);
        prop_assert_eq!(dep.used.checked_add(&dep.unused), Some(AssetAmounts::new(Amount::new(an), Amount::new(af))));
        prop_assert_eq!(pool.reserves().native.get(), rn + dep.used.native.get());
    }

    // -----------------------------------------------------------------------
    // Property 6: Allocation
    // -----------------------------------------------------------------------

    #[test]
    fn prop_allocation_sums_to_input(
        shares in shares_strategy(),
        native in 0u128..=(1_000_000 * PRECISION),
        foreign in 0u128..=(1_000_000 * PRECISION),
    ) {
        let config = TreasuryConfig {
            buckets: shares
                .iter()
                .enumerate()
                .map(|(i, s)| BucketConfig::new(format!("b{i}"), Ppm::new(*s)))
                .collect(),
            zap_dust_threshold: Amount::ZERO,
        };
        let Ok(mut allocator) = TreasuryAllocator::from_config(&config) else {
            panic!("shares sum to PPM");
        };
        let mut pool = ConstantProductPool::new(Ppm::ZERO);
        let total = AssetAmounts::new(Amount::new(native), Amount::new(foreign));
        let out = allocator.allocate(total, &mut pool);
        prop_assert_eq!(out.len(), shares.len());
        let sum_native: u128 = out.iter().map(|a| a.share.native.get()).sum();
        let sum_foreign: u128 = out.iter().map(|a| a.share.foreign.get()).sum();
        prop_assert_eq!(sum_native, native);
        prop_assert_eq!(sum_foreign, foreign);
    }

    // -----------------------------------------------------------------------
    // Property 7: Conservation
    // -----------------------------------------------------------------------

    #[test]
    fn prop_trades_conserve_supply(trades in prop::collection::vec(trade_strategy(), 1..=20)) {
        let mut router = bootstrapped_router();
        for trade in trades {
            let _ = match trade {
                Trade::Buy(amount) => router.buy(Amount::new(amount), Amount::ZERO),
                Trade::Sell(amount) => router.sell(Amount::new(amount), Amount::ZERO),
            };
            let Ok(audit) = router.audit() else {
                panic!("audit");
            };
            prop_assert!(audit.is_conserved(), "{:?}", audit);
            prop_assert!(audit.treasury_owns_pool(), "{:?}", audit);
        }
    }

    // -----------------------------------------------------------------------
    // Property 8: Treasury lock
    // -----------------------------------------------------------------------

    #[test]
    fn prop_sells_never_reduce_owned_lp(sells in prop::collection::vec(1u128..=100, 1..=20)) {
        let mut router = bootstrapped_router();
        let Ok(mut last) = router.audit().map(|a| a.owned_lp) else {
            panic!("audit");
        };
        for whole in sells {
            let _ = router.sell(Amount::new(whole * PRECISION), Amount::ZERO);
            let Ok(owned) = router.audit().map(|a| a.owned_lp) else {
                panic!("audit");
            };
            prop_assert!(owned >= last);
            last = owned;
        }
    }

    // -----------------------------------------------------------------------
    // Property 9: Route tie-break
    // -----------------------------------------------------------------------

    #[test]
    fn prop_ties_go_to_curve(out in 1u128..=u128::MAX, min in 0u128..=u128::MAX) {
        let min = min.min(out);
        let route = select_route(Amount::new(out), Amount::new(out), Amount::new(min));
        prop_assert_eq!(route, Ok(Route::Curve));
    }
}

