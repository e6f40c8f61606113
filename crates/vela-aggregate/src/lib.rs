//! Real-time trade-to-OHLCV aggregation for vela.
//!
//! This crate turns a stream of executed trades into per-timeframe
//! candlesticks with bounded retention:
//!
//! - [`bucket_start`] / [`bucket_end`] - Epoch-aligned bucket resolution
//! - [`TimeframeSeries`] - One (market, timeframe) candle lineage
//! - [`MarketAggregator`] - Per-trade fan-out to every configured timeframe
//! - [`MarketRouter`] - Routing across any number of markets
//! - [`SharedAggregator`] - One writer, concurrent readers

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/velalabs/vela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod bucket;
mod builder;
mod router;
mod series;
mod shared;

pub use aggregator::{AggregatorConfig, CandleSet, DEFAULT_BUFFER_SIZE, MarketAggregator};
pub use bucket::{bucket_end, bucket_start};
pub use router::MarketRouter;
pub use series::TimeframeSeries;
pub use shared::SharedAggregator;
