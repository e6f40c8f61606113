//! Core types for vela market-data aggregation.
//!
//! This crate provides the fundamental data structures used throughout vela:
//!
//! - [`Trade`] - A validated executed-trade event with price, quantity and side
//! - [`Timeframe`] - Candle aggregation timeframe (m1 through d1)
//! - [`Candle`] - OHLCV candlestick data for one time bucket
//! - [`ValidationError`] - Field-invariant violations caught at construction

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/velalabs/vela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candle;
mod error;
mod timeframe;
mod trade;

pub use candle::Candle;
pub use error::{ConfigError, Result, ValidationError};
pub use timeframe::{Timeframe, TimeframeParseError};
pub use trade::{Side, Trade};
