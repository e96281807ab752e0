//! Integration tests exercising the full engine through the public API:
//! the reference scenarios, conservation across a trading session, config
//! loading and the shared handle.

#![allow(clippy::panic)]

use tmctol_engine::config::{CurveConfig, EngineConfig, RouterConfig, TreasuryConfig};
use tmctol_engine::curve::CurveMinter;
use tmctol_engine::domain::{Amount, Asset, AssetAmounts, Liquidity, Ppm, Route, Settlement};
use tmctol_engine::error::EngineError;
use tmctol_engine::factory::EngineFactory;
use tmctol_engine::math::PRECISION;
use tmctol_engine::pools::ConstantProductPool;
use tmctol_engine::router::Router;
use tmctol_engine::traits::FromConfig;
use tmctol_engine::treasury::{LiquidityBucket, TreasuryAllocator};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn whole(n: u128) -> Amount {
    Amount::new(n * PRECISION)
}

fn engine() -> Router {
    let Ok(router) = EngineFactory::create(&EngineConfig::default()) else {
        panic!("default config builds");
    };
    router
}

fn bootstrapped() -> Router {
    let mut router = engine();
    let Ok(_) = router.buy(whole(1_000), Amount::ZERO) else {
        panic!("bootstrap buy");
    };
    router
}

fn owned_lp(router: &Router) -> Liquidity {
    let Ok(audit) = router.audit() else {
        panic!("audit");
    };
    audit.owned_lp
}

// ---------------------------------------------------------------------------
// Scenario A: unit-slope mint
// ---------------------------------------------------------------------------

#[test]
fn scenario_a_unit_slope_mint_moves_price_by_minted_amount() {
    let config = CurveConfig {
        price_initial: Amount::new(PRECISION),
        slope: Amount::new(PRECISION),
        user_ppm: Ppm::ONE,
        treasury_ppm: Ppm::ZERO,
    };
    let Ok(allocator) = TreasuryAllocator::from_config(&TreasuryConfig::single()) else {
        panic!("valid treasury");
    };
    let Ok(mut minter) = CurveMinter::new(&config, allocator) else {
        panic!("valid curve");
    };
    let mut pool = ConstantProductPool::new(Ppm::ZERO);

    let Ok(delta) = minter.calculate_mint(whole(100)) else {
        panic!("no overflow");
    };
    // ⌊(√201 − 1) × 10¹²⌋, √201 − 1 = 13.177446878757825...
    assert_eq!(delta, Amount::new(13_177_446_878_757));

    let Ok(outcome) = minter.mint(whole(100), &mut pool) else {
        panic!("mint");
    };
    assert_eq!(outcome.quote.minted, delta);
    assert_eq!(outcome.quote.user_share, delta);
    let Some(expected) = Amount::new(PRECISION).checked_add(&delta) else {
        panic!("no overflow");
    };
    assert_eq!(minter.spot_price(), expected);
}

// ---------------------------------------------------------------------------
// Scenario B: one-sided seed degrades to buffering
// ---------------------------------------------------------------------------

#[test]
fn scenario_b_one_sided_seed_is_buffered() {
    let mut pool = ConstantProductPool::new(Ppm::ZERO);
    let mut bucket = LiquidityBucket::new("anchor", Ppm::ONE);

    let settlement = bucket.deposit(Amount::ZERO, whole(5), &mut pool, Amount::ZERO);

    assert!(settlement.is_deferred());
    assert_eq!(bucket.owned_lp(), Liquidity::ZERO);
    assert_eq!(bucket.buffer(), AssetAmounts::new(Amount::ZERO, whole(5)));
    assert!(!pool.has_liquidity());
    assert_eq!(pool.lp_supply(), Liquidity::ZERO);
}

// ---------------------------------------------------------------------------
// Scenario C: slippage one unit above the quote
// ---------------------------------------------------------------------------

#[test]
fn scenario_c_slippage_above_quote_leaves_reserves() {
    let mut pool = ConstantProductPool::new(Ppm::new(3_000));
    let Ok(_) = pool.add_liquidity(whole(1_000), whole(2_000)) else {
        panic!("seed");
    };
    let reserves = pool.reserves();
    for asset in [Asset::Native, Asset::Foreign] {
        let quote = pool.quote(whole(50), asset);
        let Some(min_out) = quote.checked_add(&Amount::new(1)) else {
            panic!("no overflow");
        };
        assert_eq!(
            pool.swap(whole(50), min_out, asset).map(|_| ()),
            Err(EngineError::SlippageExceeded)
        );
        assert_eq!(pool.reserves(), reserves);
    }
}

// ---------------------------------------------------------------------------
// Scenario D: bootstrap minimum
// ---------------------------------------------------------------------------

#[test]
fn scenario_d_bootstrap_minimum_then_mint_seeds_pool() {
    let mut router = engine();
    let minimum = router.config().min_bootstrap_amount;
    let Some(below) = minimum.checked_sub(&Amount::new(1)) else {
        panic!("positive minimum");
    };

    assert_eq!(
        router.buy(below, Amount::ZERO).map(|_| ()),
        Err(EngineError::BootstrapTooSmall)
    );
    assert!(!router.pool().has_liquidity());

    let Ok(trade) = router.buy(minimum, Amount::ZERO) else {
        panic!("bootstrap buy");
    };
    assert_eq!(trade.route, Route::Curve);
    assert!(router.pool().has_liquidity());
    assert!(router.buckets()[0].owned_lp() > Liquidity::ZERO);
    let Ok(audit) = router.audit() else {
        panic!("audit");
    };
    assert!(audit.treasury_owns_pool());
}

// ---------------------------------------------------------------------------
// Scenario E: sells never unlock treasury liquidity
// ---------------------------------------------------------------------------

#[test]
fn scenario_e_repeated_sells_keep_owned_lp() {
    let mut router = bootstrapped();
    let mut last = owned_lp(&router);
    let mut reserves = router.reserves();
    for _ in 0..25 {
        let Ok(trade) = router.sell(whole(5), Amount::ZERO) else {
            panic!("sell");
        };
        assert_eq!(trade.route, Route::Pool);
        assert_ne!(router.reserves(), reserves);
        reserves = router.reserves();

        let owned = owned_lp(&router);
        assert!(owned >= last);
        last = owned;
    }
}

// ---------------------------------------------------------------------------
// Full session
// ---------------------------------------------------------------------------

#[test]
fn mixed_session_conserves_supply_and_keeps_pool_treasury_owned() {
    let mut router = bootstrapped();
    let mut routes = Vec::new();
    for i in 1..=30u128 {
        let result = if i % 3 == 0 {
            router.sell(whole(i), Amount::ZERO)
        } else {
            router.buy(whole(10 * i), Amount::ZERO)
        };
        let Ok(trade) = result else {
            panic!("trade {i} failed: {result:?}");
        };
        routes.push(trade.route);

        let Ok(audit) = router.audit() else {
            panic!("audit");
        };
        assert!(audit.is_conserved(), "step {i}: {audit:?}");
        assert!(audit.treasury_owns_pool(), "step {i}: {audit:?}");
    }
    assert!(routes.contains(&Route::Pool));
    assert!(router.burner().total_burned() > Amount::ZERO);
}

#[test]
fn rejected_trade_changes_nothing() {
    let mut router = bootstrapped();
    let before = router.clone();
    let Ok(quote) = router.quote_buy(whole(10)) else {
        panic!("quote");
    };
    let best = quote.curve_out.max(quote.pool_out);
    let Some(too_much) = best.checked_add(&whole(1)) else {
        panic!("no overflow");
    };
    assert_eq!(
        router.buy(whole(10), too_much).map(|_| ()),
        Err(EngineError::SlippageExceeded)
    );
    assert_eq!(router, before);
}

#[test]
fn curve_route_fee_is_buffered_until_pool_exists() {
    let mut router = engine();
    let Ok(trade) = router.buy(whole(100), Amount::ZERO) else {
        panic!("bootstrap buy");
    };
    assert_eq!(
        trade.fee_report.conversion,
        Some(Settlement::Deferred {
            reason: EngineError::NoLiquidity
        })
    );
    assert_eq!(router.burner().buffered().foreign, trade.fee);

    // the next buy converts the buffered fee through the new pool
    let Ok(next) = router.buy(whole(10), Amount::ZERO) else {
        panic!("second buy");
    };
    assert!(matches!(next.fee_report.conversion, Some(Settlement::Applied(_))));
    assert_eq!(router.burner().buffered(), AssetAmounts::ZERO);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn engine_builds_from_json_document() {
    let json = r#"{
        "curve": { "price_initial": 2000000000000, "slope": 1000000 },
        "pool": { "fee_ppm": 3000 },
        "router": { "fee_ppm": 10000, "min_trade_amount": 1, "min_bootstrap_amount": 1 },
        "treasury": {
            "buckets": [
                { "label": "anchor", "share": 700000 },
                { "label": "reserve", "share": 300000 }
            ]
        }
    }"#;
    let Ok(config) = serde_json::from_str::<EngineConfig>(json) else {
        panic!("valid document");
    };
    let Ok(mut router) = EngineFactory::create(&config) else {
        panic!("valid config");
    };
    assert_eq!(router.curve_price(), whole(2));
    assert_eq!(router.buckets().len(), 2);
    assert_eq!(router.config(), &RouterConfig {
        fee_ppm: Ppm::new(10_000),
        min_trade_amount: Amount::new(1),
        min_bootstrap_amount: Amount::new(1),
    });

    let Ok(trade) = router.buy(whole(3), Amount::ZERO) else {
        panic!("buy");
    };
    assert_eq!(trade.fee, Amount::new(3 * PRECISION / 100));
    assert_eq!(router.pool().fee(), Ppm::new(3_000));
}

#[test]
fn invalid_bucket_layout_is_fatal() {
    let json = r#"{ "treasury": { "buckets": [ { "label": "half", "share": 500000 } ] } }"#;
    let Ok(config) = serde_json::from_str::<EngineConfig>(json) else {
        panic!("well-formed document");
    };
    assert!(matches!(
        EngineFactory::create(&config),
        Err(EngineError::InvalidConfig(_))
    ));
}

// ---------------------------------------------------------------------------
// Shared handle
// ---------------------------------------------------------------------------

#[test]
fn shared_router_serializes_concurrent_trades() {
    let Ok(shared) = EngineFactory::create_shared(&EngineConfig::default()) else {
        panic!("default config builds");
    };
    let Ok(_) = shared.buy(whole(1_000), Amount::ZERO) else {
        panic!("bootstrap");
    };

    let workers: Vec<_> = (0..8)
        .map(|i| {
            let handle = shared.clone();
            std::thread::spawn(move || {
                for _ in 0..5 {
                    let _ = if i % 2 == 0 {
                        handle.buy(whole(20), Amount::ZERO)
                    } else {
                        handle.sell(whole(3), Amount::ZERO)
                    };
                }
            })
        })
        .collect();
    for worker in workers {
        let Ok(()) = worker.join() else {
            panic!("worker panicked");
        };
    }

    let Ok(audit) = shared.audit() else {
        panic!("audit");
    };
    assert!(audit.is_conserved());
    assert!(audit.treasury_owns_pool());
    assert!(shared.read(|r| r.supply()) > Amount::ZERO);
}
