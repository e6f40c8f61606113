//! OHLCV (candlestick) data structure.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Timeframe;

/// OHLCV candlestick data for one time bucket.
///
/// For any candle that has seen at least one trade:
/// `low <= open <= high`, `low <= close <= high`, `volume >= 0` and
/// `trade_count >= 1`. A candle is open while its bucket is the most recent
/// one seen for its (market, timeframe); once a later-bucket trade arrives it
/// is closed and never mutated again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Market identifier.
    pub market: String,
    /// Aggregation timeframe.
    pub timeframe: Timeframe,
    /// Bucket start time (inclusive).
    pub open_time: DateTime<Utc>,
    /// Bucket end time (exclusive, `open_time` + timeframe duration).
    pub close_time: DateTime<Utc>,
    /// Opening price (first trade's price).
    pub open: Decimal,
    /// Highest price during the bucket.
    pub high: Decimal,
    /// Lowest price during the bucket.
    pub low: Decimal,
    /// Closing price (last trade's price).
    pub close: Decimal,
    /// Total volume (sum of trade quantities).
    pub volume: Decimal,
    /// Number of trades in the bucket.
    pub trade_count: u64,
}

impl Candle {
    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> Decimal {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> Decimal {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) candle.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) candle.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Returns the typical price ((high + low + close) / 3).
    #[must_use]
    pub fn typical_price(&self) -> Decimal {
        (self.high + self.low + self.close) / Decimal::from(3)
    }
}
