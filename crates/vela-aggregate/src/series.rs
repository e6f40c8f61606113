//! Per-(market, timeframe) candle lineage.

use std::collections::VecDeque;

use tracing::debug;
use vela_types::{Candle, Timeframe, Trade};

use crate::bucket::bucket_start;
use crate::builder::CandleBuilder;

/// Owns one (market, timeframe) candle lineage: at most one open candle plus
/// a bounded, insertion-ordered history of closed candles.
///
/// History capacity is fixed at construction; once full, inserting a newly
/// closed candle evicts the oldest. Closed candles are immutable.
#[derive(Debug)]
pub struct TimeframeSeries {
    timeframe: Timeframe,
    buffer_size: usize,
    open: Option<CandleBuilder>,
    history: VecDeque<Candle>,
    late_trades: u64,
}

impl TimeframeSeries {
    /// Creates an empty series retaining at most `buffer_size` closed candles.
    #[must_use]
    pub fn new(timeframe: Timeframe, buffer_size: usize) -> Self {
        Self {
            timeframe,
            buffer_size,
            open: None,
            history: VecDeque::with_capacity(buffer_size),
            late_trades: 0,
        }
    }

    /// Returns the timeframe this series aggregates to.
    #[must_use]
    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Processes a trade, returning the completed candle on rollover.
    ///
    /// A trade in the open candle's bucket is folded in place; a trade in a
    /// later bucket closes the open candle into history and opens a new one;
    /// a trade whose bucket has already closed is discarded and counted in
    /// [`late_trades`](Self::late_trades) without touching any state.
    pub fn process(&mut self, trade: &Trade) -> Option<Candle> {
        let bucket = bucket_start(trade.timestamp, self.timeframe);

        match self.open.take() {
            Some(mut builder) if builder.open_time() == bucket => {
                builder.update(trade);
                self.open = Some(builder);
                None
            }
            Some(builder) if bucket > builder.open_time() => {
                let completed = builder.finish();
                self.push_closed(completed.clone());
                self.open = Some(CandleBuilder::new(trade, self.timeframe));
                Some(completed)
            }
            Some(builder) => {
                // Late trade: its bucket already closed, and closed candles
                // are immutable. Drop it and keep processing.
                self.late_trades += 1;
                debug!(
                    timeframe = %self.timeframe,
                    trade_id = %trade.id,
                    trade_bucket = %bucket,
                    open_bucket = %builder.open_time(),
                    "discarding late trade"
                );
                self.open = Some(builder);
                None
            }
            None => {
                self.open = Some(CandleBuilder::new(trade, self.timeframe));
                None
            }
        }
    }

    /// Returns an immutable snapshot of the open candle, if any.
    #[must_use]
    pub fn current(&self) -> Option<Candle> {
        self.open.as_ref().map(CandleBuilder::snapshot)
    }

    /// Returns up to `limit` most recent closed candles, newest last.
    #[must_use]
    pub fn history(&self, limit: usize) -> Vec<Candle> {
        let skip = self.history.len().saturating_sub(limit);
        self.history.iter().skip(skip).cloned().collect()
    }

    /// Number of closed candles currently retained.
    #[must_use]
    pub fn closed_count(&self) -> usize {
        self.history.len()
    }

    /// Number of late trades discarded so far.
    #[must_use]
    pub const fn late_trades(&self) -> u64 {
        self.late_trades
    }

    fn push_closed(&mut self, candle: Candle) {
        if self.history.len() == self.buffer_size {
            self.history.pop_front();
        }
        self.history.push_back(candle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use vela_types::Side;

    fn trade_at(minute: u32, second: u32, price: Decimal) -> Trade {
        Trade::new(
            format!("t-{minute}-{second}"),
            "BTC-USD",
            price,
            dec!(1),
            Side::Buy,
            Utc.with_ymd_and_hms(2024, 1, 1, 12, minute, second).unwrap(),
            "msg",
        )
        .unwrap()
    }

    #[test]
    fn test_first_trade_opens_candle() {
        let mut series = TimeframeSeries::new(Timeframe::Minute1, 10);
        assert!(series.current().is_none());

        assert!(series.process(&trade_at(0, 0, dec!(100))).is_none());

        let current = series.current().unwrap();
        assert_eq!(current.open, dec!(100));
        assert_eq!(current.trade_count, 1);
        assert_eq!(series.closed_count(), 0);
    }

    #[test]
    fn test_rollover_completes_exactly_one_candle() {
        let mut series = TimeframeSeries::new(Timeframe::Minute1, 10);
        series.process(&trade_at(0, 10, dec!(100)));
        series.process(&trade_at(0, 50, dec!(101)));

        let completed = series.process(&trade_at(1, 0, dec!(102))).unwrap();
        assert_eq!(completed.open, dec!(100));
        assert_eq!(completed.close, dec!(101));
        assert_eq!(completed.trade_count, 2);

        let history = series.history(10);
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap(), &completed);

        // The new open candle reflects only the bucket-N+1 trade.
        let current = series.current().unwrap();
        assert_eq!(current.open, dec!(102));
        assert_eq!(current.trade_count, 1);
    }

    #[test]
    fn test_gap_skips_intermediate_buckets() {
        let mut series = TimeframeSeries::new(Timeframe::Minute1, 10);
        series.process(&trade_at(0, 0, dec!(100)));
        series.process(&trade_at(5, 0, dec!(105)));

        // No synthetic candles for the empty minutes in between.
        assert_eq!(series.closed_count(), 1);
        assert_eq!(
            series.current().unwrap().open_time,
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 5, 0).unwrap()
        );
    }

    #[test]
    fn test_fifo_eviction_at_capacity() {
        let mut series = TimeframeSeries::new(Timeframe::Minute1, 3);
        for minute in 0..6 {
            series.process(&trade_at(minute, 0, Decimal::from(100 + minute)));
        }

        // Five candles closed, capacity three: the two oldest are gone.
        assert_eq!(series.closed_count(), 3);
        let history = series.history(10);
        assert_eq!(history[0].open, dec!(102));
        assert_eq!(history[2].open, dec!(104));
    }

    #[test]
    fn test_late_trade_discarded() {
        let mut series = TimeframeSeries::new(Timeframe::Minute1, 10);
        series.process(&trade_at(0, 0, dec!(100)));
        series.process(&trade_at(1, 0, dec!(101)));

        let before_current = series.current();
        let before_history = series.history(10);

        // Belongs to the already-closed minute-0 bucket.
        assert!(series.process(&trade_at(0, 30, dec!(999))).is_none());

        assert_eq!(series.current(), before_current);
        assert_eq!(series.history(10), before_history);
        assert_eq!(series.late_trades(), 1);
    }

    #[test]
    fn test_history_limit() {
        let mut series = TimeframeSeries::new(Timeframe::Minute1, 10);
        for minute in 0..5 {
            series.process(&trade_at(minute, 0, Decimal::from(100 + minute)));
        }

        let history = series.history(2);
        assert_eq!(history.len(), 2);
        // Newest last.
        assert_eq!(history[0].open, dec!(102));
        assert_eq!(history[1].open, dec!(103));
    }

    #[test]
    fn test_reads_are_pure() {
        let mut series = TimeframeSeries::new(Timeframe::Minute5, 10);
        series.process(&trade_at(0, 0, dec!(100)));
        series.process(&trade_at(7, 0, dec!(101)));

        assert_eq!(series.current(), series.current());
        assert_eq!(series.history(10), series.history(10));
    }
}
