use serde::{Deserialize, Serialize};

/// Identifier of an investment plan tier.
///
/// A closed set — the backend creates investments against exactly these keys,
/// so an open-ended string would only invite typos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKey {
    Basic,
    Popular,
    Premium,
}

impl std::fmt::Display for PlanKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanKey::Basic => write!(f, "basic"),
            PlanKey::Popular => write!(f, "popular"),
            PlanKey::Premium => write!(f, "premium"),
        }
    }
}

impl std::str::FromStr for PlanKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(PlanKey::Basic),
            "popular" => Ok(PlanKey::Popular),
            "premium" => Ok(PlanKey::Premium),
            other => Err(format!("unknown plan key '{other}'")),
        }
    }
}

/// A named investment tier: investable amount bounds plus the advertised rate.
///
/// `daily_rate` is fractional (0.03 means the tier is advertised as "3% daily").
/// How that rate is actually applied is decided by the compounding policy,
/// not by the plan itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    /// Stable identifier sent to the backend
    pub key: PlanKey,

    /// Display label (e.g., "Rookie Bettor")
    pub name: String,

    /// Minimum investable amount, whole currency units
    pub min_amount: u64,

    /// Maximum investable amount, whole currency units
    pub max_amount: u64,

    /// Advertised fractional daily rate (0.035 == 3.5%)
    pub daily_rate: f64,
}

/// Static client-side table of available plans.
///
/// Not fetched from the network — the tiers are fixed configuration that the
/// backend and client agree on out of band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanCatalog {
    plans: Vec<InvestmentPlan>,
}

impl PlanCatalog {
    /// Catalog with an explicit set of plans.
    pub fn new(plans: Vec<InvestmentPlan>) -> Self {
        Self { plans }
    }

    /// Look up a plan by its key.
    #[must_use]
    pub fn get(&self, key: PlanKey) -> Option<&InvestmentPlan> {
        self.plans.iter().find(|p| p.key == key)
    }

    /// All plans in display order (basic, popular, premium).
    #[must_use]
    pub fn all(&self) -> &[InvestmentPlan] {
        &self.plans
    }

    /// Number of tiers in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self {
            plans: vec![
                InvestmentPlan {
                    key: PlanKey::Basic,
                    name: "Rookie Bettor".to_string(),
                    min_amount: 20_000,
                    max_amount: 50_000,
                    daily_rate: 0.03,
                },
                InvestmentPlan {
                    key: PlanKey::Popular,
                    name: "Pro Predictor".to_string(),
                    min_amount: 50_000,
                    max_amount: 100_000,
                    daily_rate: 0.035,
                },
                InvestmentPlan {
                    key: PlanKey::Premium,
                    name: "Betting Mastermind".to_string(),
                    min_amount: 100_000,
                    max_amount: 200_000,
                    daily_rate: 0.04,
                },
            ],
        }
    }
}
