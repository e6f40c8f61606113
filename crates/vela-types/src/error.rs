//! Error types for vela.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for vela operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised when a trade fails field validation.
///
/// Validation happens at [`Trade::new`](crate::Trade::new) and again at the
/// aggregator boundary, so a malformed value is rejected before any series
/// state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Market identifier is empty.
    #[error("market identifier must not be empty")]
    EmptyMarket,

    /// Price is zero or negative.
    #[error("price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    /// Quantity is zero or negative.
    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(Decimal),
}

/// Errors raised when constructing an aggregator from an invalid configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No timeframes were configured.
    #[error("at least one timeframe must be configured")]
    NoTimeframes,

    /// Retention capacity is zero.
    #[error("buffer size must be positive")]
    ZeroBufferSize,
}
