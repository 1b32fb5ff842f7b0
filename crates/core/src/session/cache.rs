use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::settings::FreshnessPolicy;
use crate::models::user::User;
use crate::models::wallet::WalletBalance;

use super::store::SessionStore;

/// Session keys. These match the names the web client used in localStorage,
/// so a browser shell bridging `SessionStore` stays compatible with existing
/// stored sessions.
pub mod keys {
    pub const AUTH_TOKEN: &str = "userAuthToken";
    pub const USER: &str = "user";
    pub const WALLET: &str = "userWallet";
    pub const DISPLAY_CURRENCY: &str = "displayCurrency";
}

/// Display-currency preference with its fetch timestamp, cached for 24h.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedCurrency {
    pub code: String,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub cached_at: DateTime<Utc>,
}

/// High-level session operations: typed reads/writes over a raw `SessionStore`.
///
/// Values are JSON strings, one per key — the same layout the web client kept
/// in localStorage. Corrupt entries read as absent rather than erroring; a
/// half-written cache must never block login.
pub struct SessionCache;

impl SessionCache {
    // ── Auth token ──────────────────────────────────────────────────

    pub fn token(store: &dyn SessionStore) -> Option<String> {
        store.get(keys::AUTH_TOKEN)
    }

    pub fn store_token(store: &mut dyn SessionStore, token: &str) {
        store.set(keys::AUTH_TOKEN, token.to_string());
    }

    // ── User record ─────────────────────────────────────────────────

    pub fn user(store: &dyn SessionStore) -> Option<User> {
        let raw = store.get(keys::USER)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn store_user(store: &mut dyn SessionStore, user: &User) -> Result<(), CoreError> {
        let json = serde_json::to_string(user)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize user: {e}")))?;
        store.set(keys::USER, json);
        Ok(())
    }

    // ── Wallet snapshot ─────────────────────────────────────────────

    /// The cached wallet snapshot regardless of age. Fallback path when the
    /// backend is unreachable.
    pub fn wallet(store: &dyn SessionStore) -> Option<WalletBalance> {
        let raw = store.get(keys::WALLET)?;
        serde_json::from_str(&raw).ok()
    }

    /// The cached wallet only if it is still fresh under the policy's TTL.
    /// Startup path: seed the display without waiting on the network.
    pub fn fresh_wallet(
        store: &dyn SessionStore,
        policy: &FreshnessPolicy,
        now: DateTime<Utc>,
    ) -> Option<WalletBalance> {
        Self::wallet(store).filter(|w| w.is_fresh(policy.wallet_ttl, now))
    }

    pub fn store_wallet(
        store: &mut dyn SessionStore,
        wallet: &WalletBalance,
    ) -> Result<(), CoreError> {
        let json = serde_json::to_string(wallet)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize wallet: {e}")))?;
        store.set(keys::WALLET, json);
        Ok(())
    }

    // ── Display currency ────────────────────────────────────────────

    /// The cached currency preference if still fresh under the 24h TTL.
    pub fn display_currency(
        store: &dyn SessionStore,
        policy: &FreshnessPolicy,
        now: DateTime<Utc>,
    ) -> Option<String> {
        let raw = store.get(keys::DISPLAY_CURRENCY)?;
        let cached: CachedCurrency = serde_json::from_str(&raw).ok()?;
        if now - cached.cached_at < policy.currency_ttl {
            Some(cached.code)
        } else {
            None
        }
    }

    pub fn store_display_currency(
        store: &mut dyn SessionStore,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        let cached = CachedCurrency {
            code: code.to_string(),
            cached_at: now,
        };
        let json = serde_json::to_string(&cached)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize currency: {e}")))?;
        store.set(keys::DISPLAY_CURRENCY, json);
        Ok(())
    }

    // ── Teardown ────────────────────────────────────────────────────

    /// Drop everything tied to the authenticated session. The currency
    /// preference survives logout.
    pub fn clear_session(store: &mut dyn SessionStore) {
        store.remove(keys::AUTH_TOKEN);
        store.remove(keys::USER);
        store.remove(keys::WALLET);
    }
}
