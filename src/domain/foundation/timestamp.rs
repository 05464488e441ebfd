//! Timestamp value object for immutable points in time.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix milliseconds.
    ///
    /// Out-of-range values clamp to the Unix epoch.
    pub fn from_unix_millis(millis: i64) -> Self {
        Self(Utc.timestamp_millis_opt(millis).single().unwrap_or_default())
    }

    /// Returns the timestamp as Unix milliseconds.
    pub fn as_unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// RFC 3339 rendering used on the wire.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now().timestamp_millis();
        let ts = Timestamp::now();
        let after = Utc::now().timestamp_millis();

        assert!(ts.as_unix_millis() >= before);
        assert!(ts.as_unix_millis() <= after);
    }

    #[test]
    fn unix_millis_round_trip_preserves_instant() {
        let ts = Timestamp::from_unix_millis(1_704_067_200_123);
        assert_eq!(ts.as_unix_millis(), 1_704_067_200_123);
    }

    #[test]
    fn rfc3339_uses_utc_offset() {
        let ts = Timestamp::from_unix_millis(1_704_067_200_000);
        assert_eq!(ts.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn timestamp_serializes_transparently() {
        let ts = Timestamp::from_unix_millis(1_704_067_200_000);
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
        assert!(json.starts_with("\"2024-01-01T00:00:00"));
    }
}
