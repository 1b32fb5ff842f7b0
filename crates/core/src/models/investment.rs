use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::plan::PlanKey;

/// An open investment record.
///
/// Owned by the backend — the core only reads it. The backend speaks
/// camelCase JSON with a Mongo-style `_id`, so the serde layer maps both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    /// Backend record id (opaque string)
    #[serde(rename = "_id")]
    pub id: String,

    /// Owning user id
    pub user_id: String,

    /// Principal committed to the plan (always positive)
    pub amount: f64,

    /// Which plan tier this investment runs under
    pub plan: PlanKey,

    /// When compounding begins
    pub start_date: DateTime<Utc>,
}
