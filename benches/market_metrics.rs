//! benches/market_metrics.rs
//! Run with:  cargo bench --bench market_metrics
//! HTML:      target/criterion/report/index.html

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use stock_exchange::{Indicator, Stock, StockMarket, config::default_vwsp_window};

// ────────────────────────────────────────────────────────────────────────────
//  Parameter grids
// ────────────────────────────────────────────────────────────────────────────
const TAPE_SIZES: &[usize] = &[1_000, 10_000, 100_000];
const UNIVERSE_SIZES: &[usize] = &[5, 50, 500];
const TRADES_PER_SYMBOL: usize = 200;

fn bench_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// Records `n_trades` on `symbol`, spread over the last ten minutes so about
/// half of them fall inside the default window.
fn fill_tape(market: &mut StockMarket, rng: &mut StdRng, symbol: &str, n_trades: usize) {
    let now = bench_now();
    for _ in 0..n_trades {
        let age = TimeDelta::seconds(rng.gen_range(0..600));
        let side = if rng.gen_bool(0.5) { Indicator::Buy } else { Indicator::Sell };
        market.record_trade(
            symbol,
            now - age,
            rng.gen_range(1..=1_000),
            side,
            rng.gen_range(50.0..150.0),
        );
    }
}

pub fn bench_vwsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("vwsp_tape_length");
    let mut rng = StdRng::seed_from_u64(42);

    for &n in TAPE_SIZES {
        let mut market = StockMarket::new();
        fill_tape(&mut market, &mut rng, "TEA", n);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &market, |b, market| {
            b.iter(|| {
                black_box(market.volume_weighted_stock_price_at(
                    black_box("TEA"),
                    default_vwsp_window(),
                    bench_now(),
                ))
            })
        });
    }

    group.finish();
}

pub fn bench_all_share_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_share_index_universe");
    let mut rng = StdRng::seed_from_u64(7);

    for &n in UNIVERSE_SIZES {
        let mut market = StockMarket::new();
        for i in 0..n {
            let symbol = format!("S{i:04}");
            market.add_stock(symbol.clone(), Stock::common(100.0));
            fill_tape(&mut market, &mut rng, &symbol, TRADES_PER_SYMBOL);
        }

        group.throughput(Throughput::Elements((n * TRADES_PER_SYMBOL) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &market, |b, market| {
            b.iter(|| black_box(market.all_share_index_at(bench_now())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_vwsp, bench_all_share_index);
criterion_main!(benches);
