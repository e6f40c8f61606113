//! Candle aggregation timeframe definitions.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Candle aggregation timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// 1-minute candles.
    #[default]
    #[serde(rename = "m1")]
    Minute1,
    /// 5-minute candles.
    #[serde(rename = "m5")]
    Minute5,
    /// 15-minute candles.
    #[serde(rename = "m15")]
    Minute15,
    /// 1-hour candles.
    #[serde(rename = "h1")]
    Hour1,
    /// 4-hour candles.
    #[serde(rename = "h4")]
    Hour4,
    /// Daily candles.
    #[serde(rename = "d1")]
    Day1,
}

impl Timeframe {
    /// Number of timeframe variants.
    pub const COUNT: usize = 6;

    /// All timeframes, ordered shortest to longest.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Minute1,
        Self::Minute5,
        Self::Minute15,
        Self::Hour1,
        Self::Hour4,
        Self::Day1,
    ];

    /// Returns the duration in seconds.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        match self {
            Self::Minute1 => 60,
            Self::Minute5 => 300,
            Self::Minute15 => 900,
            Self::Hour1 => 3600,
            Self::Hour4 => 14400,
            Self::Day1 => 86400,
        }
    }

    /// Returns the duration as a [`TimeDelta`].
    #[must_use]
    pub const fn duration(&self) -> TimeDelta {
        TimeDelta::seconds(self.seconds())
    }

    /// Returns the dense index of this timeframe, in `0..COUNT`.
    ///
    /// Used to address fixed-size per-timeframe tables without a runtime map.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Minute1 => 0,
            Self::Minute5 => 1,
            Self::Minute15 => 2,
            Self::Hour1 => 3,
            Self::Hour4 => 4,
            Self::Day1 => 5,
        }
    }

    /// Returns the timeframe as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "m1",
            Self::Minute5 => "m5",
            Self::Minute15 => "m15",
            Self::Hour1 => "h1",
            Self::Hour4 => "h4",
            Self::Day1 => "d1",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m1" | "1m" | "minute" | "minute1" => Ok(Self::Minute1),
            "m5" | "5m" | "minute5" => Ok(Self::Minute5),
            "m15" | "15m" | "minute15" => Ok(Self::Minute15),
            "h1" | "1h" | "hour" | "hour1" => Ok(Self::Hour1),
            "h4" | "4h" | "hour4" => Ok(Self::Hour4),
            "d1" | "1d" | "day" | "day1" | "daily" => Ok(Self::Day1),
            _ => Err(TimeframeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid timeframe string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeframeParseError(String);

impl std::fmt::Display for TimeframeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid timeframe '{}', expected one of: m1, m5, m15, h1, h4, d1",
            self.0
        )
    }
}

impl std::error::Error for TimeframeParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_seconds() {
        assert_eq!(Timeframe::Minute1.seconds(), 60);
        assert_eq!(Timeframe::Minute15.seconds(), 900);
        assert_eq!(Timeframe::Hour4.seconds(), 14400);
        assert_eq!(Timeframe::Day1.seconds(), 86400);
    }

    #[test]
    fn test_timeframe_parse() {
        assert_eq!("m1".parse::<Timeframe>().unwrap(), Timeframe::Minute1);
        assert_eq!("1h".parse::<Timeframe>().unwrap(), Timeframe::Hour1);
        assert_eq!("H4".parse::<Timeframe>().unwrap(), Timeframe::Hour4);
        assert!("invalid".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_index_matches_all_ordering() {
        for (i, tf) in Timeframe::ALL.iter().enumerate() {
            assert_eq!(tf.index(), i);
        }
    }

    #[test]
    fn test_serde_identifiers() {
        assert_eq!(serde_json::to_string(&Timeframe::Minute5).unwrap(), "\"m5\"");
        assert_eq!(
            serde_json::from_str::<Timeframe>("\"d1\"").unwrap(),
            Timeframe::Day1
        );
    }
}
