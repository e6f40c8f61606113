//! Real-time multi-timeframe OHLCV candlestick aggregation.
//!
//! This is a facade crate that re-exports functionality from the vela
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use vela_lib::prelude::*;
//! use chrono::{TimeZone, Utc};
//! use rust_decimal_macros::dec;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = AggregatorConfig::new(&[Timeframe::Minute1, Timeframe::Hour1], 500)?;
//! let mut aggregator = MarketAggregator::new(config);
//!
//! let trade = Trade::new(
//!     "t-1",
//!     "BTC-USD",
//!     dec!(42000.50),
//!     dec!(0.25),
//!     Side::Buy,
//!     Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 30).unwrap(),
//!     "msg-1",
//! )?;
//!
//! let candles = aggregator.process_trade(Some(&trade))?;
//! let m1 = candles.get(Timeframe::Minute1).unwrap();
//! assert_eq!(m1.open, dec!(42000.50));
//! assert_eq!(m1.trade_count, 1);
//! # Ok(())
//! # }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/velalabs/vela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use vela_types::*;

// Re-export aggregation
pub use vela_aggregate::{
    AggregatorConfig, CandleSet, DEFAULT_BUFFER_SIZE, MarketAggregator, MarketRouter,
    SharedAggregator, TimeframeSeries, bucket_end, bucket_start,
};

/// Prelude module for convenient imports.
///
/// ```
/// use vela_lib::prelude::*;
/// ```
pub mod prelude {
    pub use vela_types::{
        Candle, ConfigError, Result, Side, Timeframe, Trade, ValidationError,
    };

    pub use vela_aggregate::{
        AggregatorConfig, CandleSet, MarketAggregator, MarketRouter, SharedAggregator,
        TimeframeSeries,
    };
}
