// ═══════════════════════════════════════════════════════════════════
// Session Tests — MemorySessionStore, SessionCache typed helpers,
// TTL-checked reads, teardown
// ═══════════════════════════════════════════════════════════════════

use chrono::{Duration, TimeZone, Utc};

use tipstar_core::models::settings::FreshnessPolicy;
use tipstar_core::models::user::User;
use tipstar_core::models::wallet::WalletBalance;
use tipstar_core::session::cache::{keys, SessionCache};
use tipstar_core::session::store::{MemorySessionStore, SessionStore};

fn test_user() -> User {
    User {
        id: "u-42".into(),
        username: "ade".into(),
        email: "ade@example.com".into(),
        is_admin: false,
        is_premium: true,
    }
}

// ── MemorySessionStore ──────────────────────────────────────────────

mod memory_store {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut store = MemorySessionStore::new();
        store.set("k", "v".into());
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn get_missing_is_none() {
        let store = MemorySessionStore::new();
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn set_overwrites() {
        let mut store = MemorySessionStore::new();
        store.set("k", "a".into());
        store.set("k", "b".into());
        assert_eq!(store.get("k").as_deref(), Some("b"));
    }

    #[test]
    fn remove_deletes_key() {
        let mut store = MemorySessionStore::new();
        store.set("k", "v".into());
        store.remove("k");
        assert!(store.get("k").is_none());
    }

    #[test]
    fn clear_empties_store() {
        let mut store = MemorySessionStore::new();
        store.set("a", "1".into());
        store.set("b", "2".into());
        store.clear();
        assert!(store.is_empty());
    }
}

// ── Token & user ────────────────────────────────────────────────────

mod auth_entries {
    use super::*;

    #[test]
    fn token_roundtrip_under_web_client_key() {
        let mut store = MemorySessionStore::new();
        SessionCache::store_token(&mut store, "jwt-abc");
        assert_eq!(store.get(keys::AUTH_TOKEN).as_deref(), Some("jwt-abc"));
        assert_eq!(SessionCache::token(&store).as_deref(), Some("jwt-abc"));
    }

    #[test]
    fn user_roundtrip() {
        let mut store = MemorySessionStore::new();
        SessionCache::store_user(&mut store, &test_user()).unwrap();
        assert_eq!(SessionCache::user(&store), Some(test_user()));
    }

    #[test]
    fn corrupt_user_reads_as_absent() {
        let mut store = MemorySessionStore::new();
        store.set(keys::USER, "{not json".into());
        assert!(SessionCache::user(&store).is_none());
    }
}

// ── Wallet cache & TTL ──────────────────────────────────────────────

mod wallet_cache {
    use super::*;

    #[test]
    fn wallet_roundtrip() {
        let mut store = MemorySessionStore::new();
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let wallet = WalletBalance::new(125_000.0, now);
        SessionCache::store_wallet(&mut store, &wallet).unwrap();
        assert_eq!(SessionCache::wallet(&store), Some(wallet));
    }

    #[test]
    fn wallet_roundtrip_with_wall_clock_timestamp() {
        let mut store = MemorySessionStore::new();
        let wallet = WalletBalance::new(75_000.0, Utc::now());
        SessionCache::store_wallet(&mut store, &wallet).unwrap();
        assert_eq!(SessionCache::wallet(&store), Some(wallet));
    }

    #[test]
    fn fresh_wallet_honors_ttl() {
        let mut store = MemorySessionStore::new();
        let policy = FreshnessPolicy::default();
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();

        let fresh = WalletBalance::new(100.0, now - Duration::minutes(2));
        SessionCache::store_wallet(&mut store, &fresh).unwrap();
        assert_eq!(SessionCache::fresh_wallet(&store, &policy, now), Some(fresh));

        let stale = WalletBalance::new(100.0, now - Duration::minutes(10));
        SessionCache::store_wallet(&mut store, &stale).unwrap();
        assert!(SessionCache::fresh_wallet(&store, &policy, now).is_none());
    }

    #[test]
    fn stale_wallet_still_readable_untyped() {
        // The fallback path serves any age; only the startup path checks TTL
        let mut store = MemorySessionStore::new();
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let stale = WalletBalance::new(100.0, now - Duration::days(2));
        SessionCache::store_wallet(&mut store, &stale).unwrap();
        assert_eq!(SessionCache::wallet(&store), Some(stale));
    }

    #[test]
    fn corrupt_wallet_reads_as_absent() {
        let mut store = MemorySessionStore::new();
        store.set(keys::WALLET, "42".into());
        assert!(SessionCache::wallet(&store).is_none());
    }
}

// ── Display currency ────────────────────────────────────────────────

mod display_currency {
    use super::*;

    #[test]
    fn roundtrip_within_ttl() {
        let mut store = MemorySessionStore::new();
        let policy = FreshnessPolicy::default();
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();

        SessionCache::store_display_currency(&mut store, "NGN", now).unwrap();
        assert_eq!(
            SessionCache::display_currency(&store, &policy, now + Duration::hours(23)),
            Some("NGN".to_string())
        );
    }

    #[test]
    fn expires_after_24h() {
        let mut store = MemorySessionStore::new();
        let policy = FreshnessPolicy::default();
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();

        SessionCache::store_display_currency(&mut store, "USD", now).unwrap();
        assert!(SessionCache::display_currency(&store, &policy, now + Duration::hours(25)).is_none());
    }
}

// ── Teardown ────────────────────────────────────────────────────────

mod teardown {
    use super::*;

    #[test]
    fn clear_session_removes_auth_keys_only() {
        let mut store = MemorySessionStore::new();
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();

        SessionCache::store_token(&mut store, "jwt");
        SessionCache::store_user(&mut store, &test_user()).unwrap();
        SessionCache::store_wallet(&mut store, &WalletBalance::new(1.0, now)).unwrap();
        SessionCache::store_display_currency(&mut store, "NGN", now).unwrap();

        SessionCache::clear_session(&mut store);

        assert!(store.get(keys::AUTH_TOKEN).is_none());
        assert!(store.get(keys::USER).is_none());
        assert!(store.get(keys::WALLET).is_none());
        // currency preference survives logout
        assert!(store.get(keys::DISPLAY_CURRENCY).is_some());
    }
}
