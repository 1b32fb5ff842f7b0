use crate::errors::CoreError;
use crate::models::plan::{InvestmentPlan, PlanCatalog, PlanKey};

/// Validates investment requests against the plan catalog and wallet balance.
///
/// Pure business logic — no I/O, no API calls. Easy to test.
pub struct PlanService {
    catalog: PlanCatalog,
}

impl PlanService {
    pub fn new() -> Self {
        Self {
            catalog: PlanCatalog::default(),
        }
    }

    /// Service backed by a custom catalog (useful for tests).
    pub fn with_catalog(catalog: PlanCatalog) -> Self {
        Self { catalog }
    }

    /// The plan catalog.
    #[must_use]
    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    /// Look up a plan, erroring if the key is not in the catalog.
    pub fn require(&self, key: PlanKey) -> Result<&InvestmentPlan, CoreError> {
        self.catalog
            .get(key)
            .ok_or_else(|| CoreError::PlanNotFound(key.to_string()))
    }

    /// Validate an investment request before it goes to the backend.
    ///
    /// Rules:
    /// - Plan must exist in the catalog
    /// - Amount must be finite and within the plan's `[min, max]` bounds
    /// - Wallet balance must cover the amount
    pub fn validate(
        &self,
        key: PlanKey,
        amount: f64,
        wallet_balance: f64,
    ) -> Result<&InvestmentPlan, CoreError> {
        let plan = self.require(key)?;

        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Investment amount must be finite and positive, got {amount}"
            )));
        }
        if amount < plan.min_amount as f64 || amount > plan.max_amount as f64 {
            return Err(CoreError::ValidationError(format!(
                "Amount {amount} is outside the {} plan's range of {} to {}",
                plan.name, plan.min_amount, plan.max_amount
            )));
        }
        if wallet_balance < amount {
            return Err(CoreError::InsufficientFunds {
                required: amount,
                available: wallet_balance,
            });
        }

        Ok(plan)
    }
}

impl Default for PlanService {
    fn default() -> Self {
        Self::new()
    }
}
