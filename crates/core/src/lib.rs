pub mod api;
pub mod errors;
pub mod models;
#[cfg(not(target_arch = "wasm32"))]
pub mod poll;
pub mod services;
pub mod session;

use chrono::{DateTime, Utc};

use api::traits::BackendClient;
use errors::CoreError;
use models::{
    investment::Investment, plan::PlanCatalog, plan::PlanKey, projection::GrowthProjection,
    settings::FreshnessPolicy, user::User, wallet::WalletBalance,
};
use services::{
    investment_service::InvestmentService, projection_service::GrowthProjector,
    wallet_service::WalletService,
};
use session::cache::SessionCache;
use session::store::SessionStore;

/// Main entry point for the Tipstar core library.
///
/// Holds the client session (user, wallet, active investment) and the
/// services that operate on it. The backend and session store are injected:
/// a browser shell bridges them to fetch/localStorage, tests to mocks.
#[must_use]
pub struct Tipstar {
    backend: Box<dyn BackendClient>,
    store: Box<dyn SessionStore>,
    investment_service: InvestmentService,
    wallet_service: WalletService,
    projector: GrowthProjector,
    freshness: FreshnessPolicy,
    user: Option<User>,
    wallet: Option<WalletBalance>,
    active_investment: Option<Investment>,
}

impl std::fmt::Debug for Tipstar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tipstar")
            .field("user", &self.user.as_ref().map(|u| u.id.as_str()))
            .field("wallet", &self.wallet)
            .field(
                "active_investment",
                &self.active_investment.as_ref().map(|i| i.id.as_str()),
            )
            .finish()
    }
}

impl Tipstar {
    /// Build a client with the default freshness policy and compounding.
    pub fn new(backend: Box<dyn BackendClient>, store: Box<dyn SessionStore>) -> Self {
        Self::with_freshness_policy(backend, store, FreshnessPolicy::default())
    }

    /// Build a client with explicit cache TTLs and poll interval.
    pub fn with_freshness_policy(
        backend: Box<dyn BackendClient>,
        store: Box<dyn SessionStore>,
        freshness: FreshnessPolicy,
    ) -> Self {
        Self {
            backend,
            store,
            investment_service: InvestmentService::new(),
            wallet_service: WalletService::new(),
            projector: GrowthProjector::new(),
            freshness,
            user: None,
            wallet: None,
            active_investment: None,
        }
    }

    /// Swap the growth projector (e.g., for a different compounding policy).
    pub fn set_projector(&mut self, projector: GrowthProjector) {
        self.projector = projector;
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Record a successful login: persist the token and user, attach the
    /// token to subsequent backend calls.
    pub fn login(&mut self, token: &str, user: User) -> Result<(), CoreError> {
        SessionCache::store_token(self.store.as_mut(), token);
        SessionCache::store_user(self.store.as_mut(), &user)?;
        self.backend.set_auth_token(Some(token));
        self.user = Some(user);
        Ok(())
    }

    /// Try to resume a previous session from the stored token.
    ///
    /// Verifies the token with the backend; on success seeds the wallet from
    /// a fresh cached snapshot, then refreshes it. On verification failure
    /// the stored session is cleared and `Ok(false)` is returned — an expired
    /// token is a normal outcome, not an error.
    pub async fn restore_session(&mut self) -> Result<bool, CoreError> {
        let token = match SessionCache::token(self.store.as_ref()) {
            Some(t) => t,
            None => return Ok(false),
        };

        match self.backend.verify_token(&token).await {
            Ok(user) => {
                self.backend.set_auth_token(Some(token.as_str()));
                SessionCache::store_user(self.store.as_mut(), &user)?;

                let now = Utc::now();
                self.wallet = self
                    .wallet_service
                    .load_cached(self.store.as_ref(), &self.freshness, now);

                let user_id = user.id.clone();
                self.user = Some(user);

                // Best-effort: the cached snapshot stays if the backend is down
                if let Ok(wallet) = self
                    .wallet_service
                    .refresh(self.backend.as_ref(), self.store.as_mut(), &user_id, now)
                    .await
                {
                    self.wallet = Some(wallet);
                }
                Ok(true)
            }
            Err(_) => {
                SessionCache::clear_session(self.store.as_mut());
                self.backend.set_auth_token(None);
                self.user = None;
                self.wallet = None;
                Ok(false)
            }
        }
    }

    /// End the session: drop stored token, user, and wallet snapshot.
    pub fn logout(&mut self) {
        SessionCache::clear_session(self.store.as_mut());
        self.backend.set_auth_token(None);
        self.user = None;
        self.wallet = None;
        self.active_investment = None;
    }

    /// Read access to the injected session store.
    #[must_use]
    pub fn session(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Re-fetch the user record from the backend and refresh the cached copy.
    ///
    /// Picks up server-side changes such as a premium upgrade without
    /// forcing a new login.
    pub async fn reload_user(&mut self) -> Result<&User, CoreError> {
        let user_id = self
            .user
            .as_ref()
            .map(|u| u.id.clone())
            .ok_or(CoreError::NotAuthenticated)?;

        let user = self.backend.fetch_user(&user_id).await?;
        SessionCache::store_user(self.store.as_mut(), &user)?;
        Ok(&*self.user.insert(user))
    }

    // ── Wallet ──────────────────────────────────────────────────────

    /// The latest known wallet snapshot, if any.
    #[must_use]
    pub fn wallet(&self) -> Option<&WalletBalance> {
        self.wallet.as_ref()
    }

    /// Re-fetch the wallet balance from the backend.
    ///
    /// Falls back to the cached snapshot when the backend is unreachable;
    /// errors only when there is nothing cached either.
    pub async fn refresh_wallet(&mut self) -> Result<&WalletBalance, CoreError> {
        let user_id = self
            .user
            .as_ref()
            .map(|u| u.id.clone())
            .ok_or(CoreError::NotAuthenticated)?;

        let wallet = self
            .wallet_service
            .refresh(
                self.backend.as_ref(),
                self.store.as_mut(),
                &user_id,
                Utc::now(),
            )
            .await?;
        Ok(&*self.wallet.insert(wallet))
    }

    /// Interval at which callers should re-poll the wallet.
    #[must_use]
    pub fn wallet_poll_interval(&self) -> std::time::Duration {
        self.freshness.wallet_poll_interval
    }

    // ── Plans & Investments ─────────────────────────────────────────

    /// The static plan catalog.
    #[must_use]
    pub fn plans(&self) -> &PlanCatalog {
        self.investment_service.plans().catalog()
    }

    /// Open an investment against a plan.
    ///
    /// Guards locally first: an authenticated user, a known wallet balance
    /// covering `amount`, and `amount` within the plan's bounds. The backend
    /// remains the authority and may still reject.
    pub async fn open_investment(
        &mut self,
        key: PlanKey,
        amount: f64,
    ) -> Result<&Investment, CoreError> {
        let user_id = self
            .user
            .as_ref()
            .map(|u| u.id.clone())
            .ok_or(CoreError::NotAuthenticated)?;
        let balance = self
            .wallet
            .as_ref()
            .map(|w| w.balance)
            .ok_or_else(|| CoreError::ValidationError("Wallet balance not loaded yet".into()))?;

        let investment = self
            .investment_service
            .open(self.backend.as_ref(), &user_id, key, amount, balance)
            .await?;
        self.active_investment = Some(investment);

        // The principal just left the wallet; a failed refresh keeps the
        // stale snapshot, same as any other backend hiccup
        let _ = self.refresh_wallet().await;

        self.active_investment
            .as_ref()
            .ok_or(CoreError::NoActiveInvestment)
    }

    /// Fetch the user's open investment from the backend into local state.
    pub async fn load_active_investment(&mut self) -> Result<Option<&Investment>, CoreError> {
        let user_id = self
            .user
            .as_ref()
            .map(|u| u.id.clone())
            .ok_or(CoreError::NotAuthenticated)?;

        self.active_investment = self
            .investment_service
            .active(self.backend.as_ref(), &user_id)
            .await?;
        Ok(self.active_investment.as_ref())
    }

    /// The locally-held open investment, if any.
    #[must_use]
    pub fn active_investment(&self) -> Option<&Investment> {
        self.active_investment.as_ref()
    }

    // ── Projection ──────────────────────────────────────────────────

    /// Project the active investment's growth up to `as_of`.
    ///
    /// Fails with `NoActiveInvestment` when no record is loaded — callers
    /// must not project partially-loaded data.
    pub fn project(&self, as_of: DateTime<Utc>) -> Result<GrowthProjection, CoreError> {
        let investment = self
            .active_investment
            .as_ref()
            .ok_or(CoreError::NoActiveInvestment)?;
        let plan = self.investment_service.plans().require(investment.plan)?;

        self.projector.project(
            investment.amount,
            plan.daily_rate,
            investment.start_date,
            as_of,
        )
    }

    /// The profit portion claimable as of `as_of`.
    pub fn eligible_to_withdraw(&self, as_of: DateTime<Utc>) -> Result<i64, CoreError> {
        Ok(self.project(as_of)?.eligible_to_withdraw)
    }

    /// Realize the eligible profit and close the active investment.
    /// Clears the local projection state on success.
    pub async fn withdraw(&mut self) -> Result<(), CoreError> {
        let id = self
            .active_investment
            .as_ref()
            .map(|i| i.id.clone())
            .ok_or(CoreError::NoActiveInvestment)?;

        self.investment_service
            .withdraw(self.backend.as_ref(), &id)
            .await?;
        self.active_investment = None;

        let _ = self.refresh_wallet().await;
        Ok(())
    }

    // ── Display currency ────────────────────────────────────────────

    /// The cached display-currency preference, or "NGN" when the cache is
    /// absent or older than the configured TTL.
    #[must_use]
    pub fn display_currency(&self) -> String {
        SessionCache::display_currency(self.store.as_ref(), &self.freshness, Utc::now())
            .unwrap_or_else(|| "NGN".to_string())
    }

    /// Set the display currency. Code must be exactly 3 ASCII letters.
    pub fn set_display_currency(&mut self, code: &str) -> Result<(), CoreError> {
        let trimmed = code.trim().to_uppercase();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid currency code '{code}': must be exactly 3 ASCII letters (e.g., NGN, USD)"
            )));
        }
        SessionCache::store_display_currency(self.store.as_mut(), &trimmed, Utc::now())
    }
}
