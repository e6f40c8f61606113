//! In-progress candle accumulation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use vela_types::{Candle, Timeframe, Trade};

use crate::bucket::{bucket_end, bucket_start};

/// Accumulates OHLCV state for exactly one open bucket.
///
/// Callers guarantee every [`update`](Self::update) belongs to this
/// builder's bucket; the owning series checks bucket membership before
/// folding.
#[derive(Debug, Clone)]
pub(crate) struct CandleBuilder {
    market: String,
    timeframe: Timeframe,
    open_time: DateTime<Utc>,
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    volume: Decimal,
    trade_count: u64,
}

impl CandleBuilder {
    /// Opens a new candle from the first trade of a bucket.
    pub(crate) fn new(trade: &Trade, timeframe: Timeframe) -> Self {
        Self {
            market: trade.market.clone(),
            timeframe,
            open_time: bucket_start(trade.timestamp, timeframe),
            open: trade.price,
            high: trade.price,
            low: trade.price,
            close: trade.price,
            volume: trade.quantity,
            trade_count: 1,
        }
    }

    /// Bucket start time of the candle under construction.
    pub(crate) const fn open_time(&self) -> DateTime<Utc> {
        self.open_time
    }

    /// Folds a same-bucket trade into the candle.
    ///
    /// Constant time, no allocation beyond the fixed fields.
    pub(crate) fn update(&mut self, trade: &Trade) {
        self.high = self.high.max(trade.price);
        self.low = self.low.min(trade.price);
        self.close = trade.price;
        self.volume += trade.quantity;
        self.trade_count += 1;
    }

    /// Returns an immutable copy of the in-progress candle.
    pub(crate) fn snapshot(&self) -> Candle {
        Candle {
            market: self.market.clone(),
            timeframe: self.timeframe,
            open_time: self.open_time,
            close_time: bucket_end(self.open_time, self.timeframe),
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
            trade_count: self.trade_count,
        }
    }

    /// Finishes accumulation and returns the closed candle.
    pub(crate) fn finish(self) -> Candle {
        self.snapshot()
    }
}
