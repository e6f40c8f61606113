//! Benchmark utilities for vela.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use rust_decimal::Decimal;
use vela_types::{Side, Trade};

/// Base timestamp all synthetic streams start from.
#[must_use]
pub fn base_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Generates a synthetic trade stream with `spacing_ms` between trades.
///
/// Prices cycle deterministically around 100 so repeated runs measure the
/// same work.
#[must_use]
pub fn synthetic_trades(count: usize, spacing_ms: i64) -> Vec<Trade> {
    let base = base_timestamp();
    (0..count)
        .map(|i| {
            let offset = i as i64;
            Trade::new(
                format!("t-{i}"),
                "BTC-USD",
                Decimal::from(100 + (offset % 13) - 6),
                Decimal::new(5, 1),
                if i % 2 == 0 { Side::Buy } else { Side::Sell },
                base + TimeDelta::milliseconds(offset * spacing_ms),
                format!("msg-{i}"),
            )
            .expect("synthetic trade is valid")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_trades_are_monotonic() {
        let trades = synthetic_trades(100, 250);
        assert_eq!(trades.len(), 100);
        for pair in trades.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }
}
