use crate::api::traits::BackendClient;
use crate::errors::CoreError;
use crate::models::investment::Investment;
use crate::models::plan::PlanKey;

use super::plan_service::PlanService;

/// Orchestrates the investment lifecycle against the backend.
///
/// Validation happens client-side first (plan bounds, wallet funds) so the
/// user gets an immediate answer; the backend remains the authority and can
/// still reject.
pub struct InvestmentService {
    plan_service: PlanService,
}

impl InvestmentService {
    pub fn new() -> Self {
        Self {
            plan_service: PlanService::new(),
        }
    }

    /// The plan validation service this lifecycle uses.
    #[must_use]
    pub fn plans(&self) -> &PlanService {
        &self.plan_service
    }

    /// Validate and open an investment.
    pub async fn open(
        &self,
        backend: &dyn BackendClient,
        user_id: &str,
        key: PlanKey,
        amount: f64,
        wallet_balance: f64,
    ) -> Result<Investment, CoreError> {
        self.plan_service.validate(key, amount, wallet_balance)?;
        backend.create_investment(user_id, key, amount).await
    }

    /// Fetch the user's open investment, if any.
    pub async fn active(
        &self,
        backend: &dyn BackendClient,
        user_id: &str,
    ) -> Result<Option<Investment>, CoreError> {
        backend.fetch_active_investment(user_id).await
    }

    /// Realize the eligible profit and close the investment.
    ///
    /// On success the record is gone server-side; the caller must clear any
    /// local projection state it derived from it.
    pub async fn withdraw(
        &self,
        backend: &dyn BackendClient,
        investment_id: &str,
    ) -> Result<(), CoreError> {
        backend.withdraw_investment(investment_id).await
    }
}

impl Default for InvestmentService {
    fn default() -> Self {
        Self::new()
    }
}
