//! Criterion benchmarks for shortlab hot paths.
//!
//! Benchmarks:
//! 1. Indicator computation over a full lookback window (EMA, RSI, Bollinger)
//! 2. A complete decision cycle (the per-cycle cost a driving engine pays)

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use shortlab_core::domain::{Candle, PositionStatus, TradingPair};
use shortlab_core::indicators::{Bollinger, Ema, Indicator, Rsi};
use shortlab_core::strategy::{decide_trades, DecisionCycle, StrategyParameters};

fn make_candles(n: usize) -> Vec<Candle> {
    let base = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            let open = close - 0.3;
            Candle {
                timestamp: base + chrono::Duration::hours(i as i64),
                open,
                high: close + 1.5,
                low: close - 1.5,
                close,
                volume: 1_000_000.0,
            }
        })
        .collect()
}

fn bench_params() -> StrategyParameters {
    StrategyParameters {
        pair: TradingPair::new("WBNB", "BUSD", "pancakeswap-v2"),
        candle_window: 90,
        ema_length: 21,
        rsi_length: 14,
        rsi_entry_threshold: 65.0,
        bollinger_length: 20,
        bollinger_multiplier: 2.0,
        position_size: 0.5,
        stop_loss_pct: 0.02,
        take_profit_pct: 0.04,
    }
}

fn bench_indicators(c: &mut Criterion) {
    let candles = make_candles(90);
    let mut group = c.benchmark_group("indicators");

    group.bench_function("ema_21", |b| {
        let ema = Ema::new(21);
        b.iter(|| ema.compute(black_box(&candles)))
    });
    group.bench_function("rsi_14", |b| {
        let rsi = Rsi::new(14);
        b.iter(|| rsi.compute(black_box(&candles)))
    });
    group.bench_function("bollinger_upper_20", |b| {
        let bb = Bollinger::upper(20, 2.0);
        b.iter(|| bb.compute(black_box(&candles)))
    });

    group.finish();
}

fn bench_decision_cycle(c: &mut Criterion) {
    let params = bench_params();
    let mut group = c.benchmark_group("decision_cycle");

    for window in [30usize, 90, 360] {
        let candles = make_candles(window);
        group.bench_with_input(
            BenchmarkId::from_parameter(window),
            &candles,
            |b, candles| {
                b.iter(|| {
                    decide_trades(
                        black_box(&params),
                        &DecisionCycle {
                            timestamp: candles.last().unwrap().timestamp,
                            candles,
                            position: PositionStatus::Flat,
                            cash: 10_000.0,
                        },
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_indicators, bench_decision_cycle);
criterion_main!(benches);
