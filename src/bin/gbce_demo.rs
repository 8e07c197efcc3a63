// src/bin/gbce_demo.rs
//! Lists the sample stocks, pays one dividend each, prints ALE's yield and
//! GIN's P/E ratio, then records a TEA buy and prints the resulting metrics.
//!
//! Log verbosity follows `RUST_LOG`, e.g. `RUST_LOG=debug cargo run --bin gbce_demo`.

use chrono::Utc;
use stock_exchange::config::{
    DEFAULT_LOG_FILTER, DEMO_ALE_PRICE, DEMO_GIN_PRICE, DEMO_TEA_TRADE_PRICE,
    DEMO_TEA_TRADE_QUANTITY,
};
use stock_exchange::{Indicator, MarketError, StockMarket};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(false)
        .init();

    let mut market = StockMarket::with_sample_universe();
    for (symbol, amount) in [("TEA", 0.0), ("POP", 8.0), ("ALE", 23.0), ("GIN", 0.0), ("JOE", 13.0)] {
        market
            .stock_mut(symbol)
            .ok_or_else(|| MarketError::UnknownStock {
                symbol: symbol.to_string(),
            })?
            .distribute_dividend(amount);
    }

    let ale = market.stock("ALE").ok_or("ALE is not listed")?;
    println!("ALE dividend yield @ {DEMO_ALE_PRICE}: {}", ale.dividend_yield(DEMO_ALE_PRICE)?);

    let gin = market.stock("GIN").ok_or("GIN is not listed")?;
    match gin.price_earnings_ratio(DEMO_GIN_PRICE) {
        Some(pe) => println!("GIN P/E ratio @ {DEMO_GIN_PRICE}: {pe}"),
        None => println!("GIN P/E ratio @ {DEMO_GIN_PRICE}: undefined"),
    }

    market.record_trade(
        "TEA",
        Utc::now(),
        DEMO_TEA_TRADE_QUANTITY,
        Indicator::Buy,
        DEMO_TEA_TRADE_PRICE,
    );
    println!("TEA VWSP: {}", market.volume_weighted_stock_price("TEA")?);

    // only TEA has traded, so the index cannot be formed yet
    match market.all_share_index() {
        Ok(index) => println!("All-share index: {index}"),
        Err(err) => warn!(%err, "all-share index unavailable"),
    }

    println!("{}", serde_json::to_string_pretty(&market.trades("TEA"))?);
    info!(listed = market.symbols().len(), "demo finished");
    Ok(())
}
