use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::investment::Investment;
use crate::models::plan::PlanKey;
use crate::models::user::User;

/// The REST boundary the core depends on.
///
/// The real backend implements these endpoints; tests swap in a mock. If the
/// backend's routes or payloads change, only the one HTTP implementation
/// moves — the services and facade are untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait BackendClient: Send + Sync {
    /// Human-readable name of this client (for errors).
    fn name(&self) -> &str;

    /// Set or clear the bearer token attached to subsequent requests.
    fn set_auth_token(&mut self, token: Option<&str>);

    /// Verify a stored token and return the user it belongs to.
    /// `GET /verify`
    async fn verify_token(&self, token: &str) -> Result<User, CoreError>;

    /// Fetch a user record.
    /// `GET /api/users/:id`
    async fn fetch_user(&self, user_id: &str) -> Result<User, CoreError>;

    /// Fetch the current wallet balance.
    /// `GET /api/wallet/:id/balance`
    async fn fetch_wallet_balance(&self, user_id: &str) -> Result<f64, CoreError>;

    /// Fetch the user's open investment, if any.
    /// `GET /investments/:userId` — a missing record is `Ok(None)`.
    async fn fetch_active_investment(
        &self,
        user_id: &str,
    ) -> Result<Option<Investment>, CoreError>;

    /// Open an investment against a plan.
    /// `POST /investments/create`
    async fn create_investment(
        &self,
        user_id: &str,
        plan: PlanKey,
        amount: f64,
    ) -> Result<Investment, CoreError>;

    /// Realize the eligible profit and close the investment.
    /// `POST /investments/:id/withdraw`
    async fn withdraw_investment(&self, investment_id: &str) -> Result<(), CoreError>;
}
