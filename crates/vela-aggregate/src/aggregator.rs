//! Streaming trade-to-OHLCV aggregation across configured timeframes.

use tracing::debug;
use vela_types::{Candle, ConfigError, Timeframe, Trade, ValidationError};

use crate::series::TimeframeSeries;

/// Default number of closed candles retained per timeframe.
pub const DEFAULT_BUFFER_SIZE: usize = 500;

/// Aggregator configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorConfig {
    timeframes: Vec<Timeframe>,
    buffer_size: usize,
}

impl AggregatorConfig {
    /// Creates a configuration for the given timeframes and retention
    /// capacity. Duplicate timeframes are collapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if `timeframes` is empty or `buffer_size` is zero.
    pub fn new(timeframes: &[Timeframe], buffer_size: usize) -> Result<Self, ConfigError> {
        if timeframes.is_empty() {
            return Err(ConfigError::NoTimeframes);
        }
        if buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }
        let timeframes = Timeframe::ALL
            .into_iter()
            .filter(|tf| timeframes.contains(tf))
            .collect();
        Ok(Self {
            timeframes,
            buffer_size,
        })
    }

    /// Configured timeframes, ordered shortest to longest.
    #[must_use]
    pub fn timeframes(&self) -> &[Timeframe] {
        &self.timeframes
    }

    /// Retention capacity per timeframe series.
    #[must_use]
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}

impl Default for AggregatorConfig {
    /// All six timeframes with the default retention capacity.
    fn default() -> Self {
        Self {
            timeframes: Timeframe::ALL.to_vec(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// Per-timeframe candle snapshots returned by
/// [`MarketAggregator::process_trade`].
///
/// Backed by a fixed-size table indexed by [`Timeframe::index`], so the
/// configured timeframe set is part of the shape rather than a runtime map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandleSet {
    slots: [Option<Candle>; Timeframe::COUNT],
}

impl CandleSet {
    /// Returns the candle for a timeframe, if one was produced.
    #[must_use]
    pub fn get(&self, timeframe: Timeframe) -> Option<&Candle> {
        self.slots[timeframe.index()].as_ref()
    }

    /// Iterates over the populated candles, shortest timeframe first.
    pub fn iter(&self) -> impl Iterator<Item = &Candle> {
        self.slots.iter().flatten()
    }

    /// Number of populated timeframes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns true if no timeframe is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    fn insert(&mut self, candle: Candle) {
        let index = candle.timeframe.index();
        self.slots[index] = Some(candle);
    }
}

/// Fans each incoming trade out to every configured timeframe for one
/// market's trade stream.
///
/// Owns one [`TimeframeSeries`] per configured timeframe in a fixed-size
/// table indexed by [`Timeframe::index`]. Designed for a single logical
/// writer: trades are delivered sequentially and each call runs to
/// completion synchronously with constant-bounded work.
#[derive(Debug)]
pub struct MarketAggregator {
    config: AggregatorConfig,
    series: [Option<TimeframeSeries>; Timeframe::COUNT],
}

impl MarketAggregator {
    /// Creates an aggregator for the given configuration.
    #[must_use]
    pub fn new(config: AggregatorConfig) -> Self {
        let series = std::array::from_fn(|i| {
            let tf = Timeframe::ALL[i];
            config
                .timeframes()
                .contains(&tf)
                .then(|| TimeframeSeries::new(tf, config.buffer_size()))
        });
        Self { config, series }
    }

    /// Processes one trade, returning the open-candle snapshot per
    /// configured timeframe.
    ///
    /// `None` is a no-op returning an empty set: upstream feeds may deliver
    /// empty signals (heartbeats, gaps) and these must not fail the call.
    ///
    /// # Errors
    ///
    /// Returns an error if the trade violates a field invariant. Validation
    /// happens before any series is touched, so a rejected trade is never
    /// partially applied.
    pub fn process_trade(
        &mut self,
        trade: Option<&Trade>,
    ) -> Result<CandleSet, ValidationError> {
        let Some(trade) = trade else {
            return Ok(CandleSet::default());
        };
        trade.validate()?;

        let mut set = CandleSet::default();
        for series in self.series.iter_mut().flatten() {
            if let Some(completed) = series.process(trade) {
                debug!(
                    market = %completed.market,
                    timeframe = %completed.timeframe,
                    open_time = %completed.open_time,
                    trades = completed.trade_count,
                    "candle completed"
                );
            }
            if let Some(snapshot) = series.current() {
                set.insert(snapshot);
            }
        }
        Ok(set)
    }

    /// Returns the open candle for a timeframe, or `None` if the timeframe
    /// is not configured or no trade has been processed yet.
    #[must_use]
    pub fn current(&self, timeframe: Timeframe) -> Option<Candle> {
        self.series[timeframe.index()]
            .as_ref()
            .and_then(TimeframeSeries::current)
    }

    /// Returns up to `limit` most recent closed candles for a timeframe,
    /// newest last. Empty if the timeframe is not configured.
    #[must_use]
    pub fn history(&self, timeframe: Timeframe, limit: usize) -> Vec<Candle> {
        self.series[timeframe.index()]
            .as_ref()
            .map_or_else(Vec::new, |s| s.history(limit))
    }

    /// Total number of late trades discarded across all timeframes.
    #[must_use]
    pub fn late_trades(&self) -> u64 {
        self.series
            .iter()
            .flatten()
            .map(TimeframeSeries::late_trades)
            .sum()
    }

    /// Returns the configuration this aggregator was built with.
    #[must_use]
    pub const fn config(&self) -> &AggregatorConfig {
        &self.config
    }
}
