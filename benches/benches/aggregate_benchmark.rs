//! Aggregation throughput benchmarks.
//!
//! Run with: `cargo bench --package vela-bench`
//!
//! The engine targets sustained throughput of at least 1000 trades/s with a
//! 1000-trade batch completing well under a second.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use vela_aggregate::{AggregatorConfig, MarketAggregator};
use vela_bench::synthetic_trades;
use vela_types::Timeframe;

fn process_batch(trades: &[vela_types::Trade], config: AggregatorConfig) -> MarketAggregator {
    let mut aggregator = MarketAggregator::new(config);
    for trade in trades {
        let set = aggregator
            .process_trade(Some(trade))
            .expect("synthetic trades are valid");
        black_box(&set);
    }
    aggregator
}

fn aggregate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for &count in &[1_000usize, 10_000] {
        // 250ms spacing keeps most trades folding into open candles, with
        // periodic m1 rollovers.
        let trades = synthetic_trades(count, 250);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            BenchmarkId::new("single-timeframe", count),
            &trades,
            |b, trades| {
                let config = AggregatorConfig::new(&[Timeframe::Minute1], 500).unwrap();
                b.iter(|| process_batch(trades, config.clone()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("all-timeframes", count),
            &trades,
            |b, trades| {
                b.iter(|| process_batch(trades, AggregatorConfig::default()));
            },
        );
    }

    // Rollover-heavy stream: one trade per minute closes an m1 candle on
    // almost every call.
    let rollover_trades = synthetic_trades(1_000, 60_000);
    group.throughput(Throughput::Elements(1_000));
    group.bench_with_input(
        BenchmarkId::new("rollover-heavy", 1_000usize),
        &rollover_trades,
        |b, trades| {
            let config = AggregatorConfig::new(&[Timeframe::Minute1], 500).unwrap();
            b.iter(|| process_batch(trades, config.clone()));
        },
    );

    group.finish();
}

criterion_group!(benches, aggregate_benchmark);
criterion_main!(benches);
