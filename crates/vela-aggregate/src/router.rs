//! Multi-market trade routing.

use std::collections::HashMap;

use vela_types::{Candle, Timeframe, Trade, ValidationError};

use crate::aggregator::{AggregatorConfig, CandleSet, MarketAggregator};

/// Routes trades from any number of markets to per-market aggregators.
///
/// Aggregators are created lazily from a shared template configuration the
/// first time a market's trade arrives. Each market's candle lineages are
/// fully independent.
#[derive(Debug)]
pub struct MarketRouter {
    config: AggregatorConfig,
    markets: HashMap<String, MarketAggregator>,
}

impl MarketRouter {
    /// Creates an empty router; every market uses `config`.
    #[must_use]
    pub fn new(config: AggregatorConfig) -> Self {
        Self {
            config,
            markets: HashMap::new(),
        }
    }

    /// Processes one trade against its market's aggregator, creating the
    /// aggregator on first sight of the market.
    ///
    /// `None` is a no-op returning an empty set.
    ///
    /// # Errors
    ///
    /// Returns an error if the trade violates a field invariant; no
    /// aggregator is created for a rejected trade.
    pub fn process_trade(
        &mut self,
        trade: Option<&Trade>,
    ) -> Result<CandleSet, ValidationError> {
        let Some(trade) = trade else {
            return Ok(CandleSet::default());
        };
        trade.validate()?;

        self.markets
            .entry(trade.market.clone())
            .or_insert_with(|| MarketAggregator::new(self.config.clone()))
            .process_trade(Some(trade))
    }

    /// Returns the aggregator for a market, if any trade for it has been
    /// processed.
    #[must_use]
    pub fn market(&self, market: &str) -> Option<&MarketAggregator> {
        self.markets.get(market)
    }

    /// Returns the open candle for a (market, timeframe).
    #[must_use]
    pub fn current(&self, market: &str, timeframe: Timeframe) -> Option<Candle> {
        self.markets.get(market).and_then(|agg| agg.current(timeframe))
    }

    /// Returns up to `limit` most recent closed candles for a
    /// (market, timeframe), newest last.
    #[must_use]
    pub fn history(&self, market: &str, timeframe: Timeframe, limit: usize) -> Vec<Candle> {
        self.markets
            .get(market)
            .map_or_else(Vec::new, |agg| agg.history(timeframe, limit))
    }

    /// Known market identifiers, sorted.
    #[must_use]
    pub fn markets(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.markets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Total number of late trades discarded across all markets.
    #[must_use]
    pub fn late_trades(&self) -> u64 {
        self.markets.values().map(MarketAggregator::late_trades).sum()
    }

    /// Returns the template configuration.
    #[must_use]
    pub const fn config(&self) -> &AggregatorConfig {
        &self.config
    }
}
