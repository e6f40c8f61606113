//! Executed-trade event representation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Side of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Aggressor bought.
    Buy,
    /// Aggressor sold.
    Sell,
}

impl Side {
    /// Returns the side as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single executed trade delivered by an upstream market-data feed.
///
/// Construct via [`Trade::new`], which enforces the field invariants: the
/// market identifier is non-empty and price and quantity are strictly
/// positive. A trade is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique trade identifier assigned by the venue.
    pub id: String,
    /// Market identifier (e.g., "BTC-USD").
    pub market: String,
    /// Execution price.
    pub price: Decimal,
    /// Executed quantity.
    pub quantity: Decimal,
    /// Trade side.
    pub side: Side,
    /// Execution timestamp (UTC).
    pub timestamp: DateTime<Utc>,
    /// Identifier of the upstream message this trade was parsed from.
    pub source_id: String,
}

impl Trade {
    /// Creates a new trade, validating field invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the market identifier is empty, or if price or
    /// quantity is not strictly positive.
    pub fn new(
        id: impl Into<String>,
        market: impl Into<String>,
        price: Decimal,
        quantity: Decimal,
        side: Side,
        timestamp: DateTime<Utc>,
        source_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let trade = Self {
            id: id.into(),
            market: market.into(),
            price,
            quantity,
            side,
            timestamp,
            source_id: source_id.into(),
        };
        trade.validate()?;
        Ok(trade)
    }

    /// Re-checks the field invariants.
    ///
    /// [`Trade::new`] already enforces these, but deserialized values bypass
    /// the constructor; boundaries that accept externally produced trades
    /// call this before mutating any state.
    ///
    /// # Errors
    ///
    /// Returns an error if the market identifier is empty, or if price or
    /// quantity is not strictly positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.market.is_empty() {
            return Err(ValidationError::EmptyMarket);
        }
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice(self.price));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveQuantity(self.quantity));
        }
        Ok(())
    }

    /// Returns the notional value (price * quantity).
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.price * self.quantity
    }
}
