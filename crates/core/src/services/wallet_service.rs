use chrono::{DateTime, Utc};

use crate::api::traits::BackendClient;
use crate::errors::CoreError;
use crate::models::settings::FreshnessPolicy;
use crate::models::wallet::WalletBalance;
use crate::session::cache::SessionCache;
use crate::session::store::SessionStore;

/// Fetches wallet balances from the backend with session-cache fallback.
///
/// Cache strategy:
/// - Every successful fetch overwrites the cached snapshot.
/// - On fetch failure, the cached snapshot is served whatever its age —
///   a stale balance beats an empty one while the backend is down.
/// - The startup path (`load_cached`) only trusts snapshots within the TTL.
pub struct WalletService;

impl WalletService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch the balance from the backend and cache the snapshot.
    ///
    /// Falls back to the cached snapshot on any network/API failure; the
    /// error only propagates when no snapshot exists.
    pub async fn refresh(
        &self,
        backend: &dyn BackendClient,
        store: &mut dyn SessionStore,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<WalletBalance, CoreError> {
        match backend.fetch_wallet_balance(user_id).await {
            Ok(balance) => {
                let wallet = WalletBalance::new(balance, now);
                SessionCache::store_wallet(store, &wallet)?;
                Ok(wallet)
            }
            Err(e) => SessionCache::wallet(store).ok_or(e),
        }
    }

    /// The cached snapshot if still fresh under the policy's TTL.
    #[must_use]
    pub fn load_cached(
        &self,
        store: &dyn SessionStore,
        policy: &FreshnessPolicy,
        now: DateTime<Utc>,
    ) -> Option<WalletBalance> {
        SessionCache::fresh_wallet(store, policy, now)
    }
}

impl Default for WalletService {
    fn default() -> Self {
        Self::new()
    }
}
