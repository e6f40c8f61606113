//! Shared handle for one writer and concurrent readers.

use std::sync::Arc;

use parking_lot::RwLock;
use vela_types::{Candle, Timeframe, Trade, ValidationError};

use crate::aggregator::{AggregatorConfig, CandleSet};
use crate::router::MarketRouter;

/// Cloneable handle sharing one [`MarketRouter`] between a single logical
/// writer and any number of readers.
///
/// Every read returns owned copies produced under a short critical section,
/// so a reader never observes a candle mid-update. The writer contract is
/// unchanged: one upstream feed calls [`process_trade`](Self::process_trade)
/// sequentially; reads may come from any thread.
#[derive(Debug, Clone)]
pub struct SharedAggregator {
    inner: Arc<RwLock<MarketRouter>>,
}

impl SharedAggregator {
    /// Creates a shared aggregator; every market uses `config`.
    #[must_use]
    pub fn new(config: AggregatorConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MarketRouter::new(config))),
        }
    }

    /// Processes one trade under the write lock.
    ///
    /// # Errors
    ///
    /// Returns an error if the trade violates a field invariant.
    pub fn process_trade(&self, trade: Option<&Trade>) -> Result<CandleSet, ValidationError> {
        self.inner.write().process_trade(trade)
    }

    /// Returns the open candle for a (market, timeframe).
    #[must_use]
    pub fn current(&self, market: &str, timeframe: Timeframe) -> Option<Candle> {
        self.inner.read().current(market, timeframe)
    }

    /// Returns up to `limit` most recent closed candles for a
    /// (market, timeframe), newest last.
    #[must_use]
    pub fn history(&self, market: &str, timeframe: Timeframe, limit: usize) -> Vec<Candle> {
        self.inner.read().history(market, timeframe, limit)
    }

    /// Known market identifiers, sorted.
    #[must_use]
    pub fn markets(&self) -> Vec<String> {
        self.inner
            .read()
            .markets()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Total number of late trades discarded across all markets.
    #[must_use]
    pub fn late_trades(&self) -> u64 {
        self.inner.read().late_trades()
    }
}
