//! Epoch-aligned time bucket resolution.

use chrono::{DateTime, TimeZone, Utc};
use vela_types::Timeframe;

/// Floors a timestamp to the start of its bucket for the given timeframe.
///
/// Buckets are aligned to the Unix epoch, so boundaries of higher timeframes
/// always coincide with boundaries of lower ones (every h4 boundary is also
/// an m1 boundary). Deterministic and stateless.
#[must_use]
pub fn bucket_start(timestamp: DateTime<Utc>, timeframe: Timeframe) -> DateTime<Utc> {
    let size = timeframe.seconds();
    // timestamp() floors toward negative infinity, so sub-second components
    // and pre-epoch instants both land in the correct bucket.
    let floored = timestamp.timestamp().div_euclid(size) * size;
    Utc.timestamp_opt(floored, 0).unwrap()
}

/// Returns the exclusive end of the bucket starting at `start`.
#[must_use]
pub fn bucket_end(start: DateTime<Utc>, timeframe: Timeframe) -> DateTime<Utc> {
    start + timeframe.duration()
}
