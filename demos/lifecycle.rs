//! Engine lifecycle walkthrough.
//!
//! Bootstraps the pool through the curve, runs a few buys and sells, and
//! prints the audit after each step.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=tmctol_engine=debug cargo run --example lifecycle
//! ```

use tmctol_engine::prelude::*;

fn whole(n: u128) -> Amount {
    Amount::new(n * PRECISION)
}

fn print_audit(router: &Router) -> std::result::Result<(), EngineError> {
    let audit = router.audit()?;
    println!("  supply:        {}", audit.supply);
    println!("  minted/burned: {} / {}", audit.total_minted, audit.total_burned);
    println!("  reserves:      {}", audit.reserves);
    println!("  owned/lp:      {} / {}", audit.owned_lp, audit.lp_supply);
    println!("  fee buffer:    {}", audit.buffered_fees);
    println!("  conserved:     {}", audit.is_conserved());
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== TMC + TOL lifecycle ===\n");

    // ── 1. Build the engine from defaults ───────────────────────────────
    let config = EngineConfig::default();
    println!("{}", serde_json::to_string_pretty(&config)?);
    let mut router = EngineFactory::create(&config)?;

    // ── 2. A buy below the bootstrap minimum is refused ─────────────────
    match router.buy(whole(5), Amount::ZERO) {
        Err(e) => println!("\nbuy 5 before bootstrap: {e}"),
        Ok(t) => println!("\nunexpected: {t}"),
    }

    // ── 3. Bootstrap: the curve mints and the treasury seeds the pool ───
    let trade = router.buy(whole(1_000), Amount::ZERO)?;
    println!("\n--- bootstrap ---\n  {trade}");
    for bucket in router.buckets() {
        println!("  bucket {:<9} owns {}", bucket.label(), bucket.owned_lp());
    }
    print_audit(&router)?;

    // ── 4. Buys pick the better route ───────────────────────────────────
    for amount in [10, 100, 400] {
        let quote = router.quote_buy(whole(amount))?;
        println!(
            "\nquote {amount}: curve {} / pool {} -> {:?}",
            quote.curve_out, quote.pool_out, quote.route
        );
        let trade = router.buy(whole(amount), Amount::ZERO)?;
        println!("  {trade}");
    }

    // ── 5. Sells go through the pool; treasury shares stay locked ───────
    for amount in [5, 50] {
        let trade = router.sell(whole(amount), Amount::ZERO)?;
        println!("\n--- sell {amount} ---\n  {trade}");
    }

    println!("\n--- final ---");
    println!("  curve price: {}", router.curve_price());
    println!("  pool price:  {}", router.pool_price()?);
    print_audit(&router)?;
    Ok(())
}
