use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A wallet balance snapshot, tagged with when it was fetched.
///
/// This is the exact shape the session cache persists: `lastUpdated` is epoch
/// milliseconds, matching the JSON blob the web client kept under the
/// `userWallet` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    /// Balance in currency units
    pub balance: f64,

    /// When this snapshot was fetched from the backend
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_updated: DateTime<Utc>,
}

impl WalletBalance {
    /// `fetched_at` is truncated to millisecond precision, the resolution
    /// the cache persists, so a snapshot round-trips unchanged.
    pub fn new(balance: f64, fetched_at: DateTime<Utc>) -> Self {
        let last_updated = DateTime::from_timestamp_millis(fetched_at.timestamp_millis())
            .unwrap_or(fetched_at);
        Self {
            balance,
            last_updated,
        }
    }

    /// Whether this snapshot is still fresh under the given TTL at `now`.
    #[must_use]
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.last_updated < ttl
    }
}
