use serde::{Deserialize, Serialize};

/// A single day on the projected growth curve.
///
/// The core computes these — the frontend just plots them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Days since the investment started (0 == start day)
    pub day: u32,

    /// Projected balance on that day, rounded to whole currency units
    pub amount: i64,
}

/// Result of projecting an investment's growth up to an evaluation instant.
///
/// `series` always holds at least one point (day 0). For a non-negative rate
/// the amounts are monotonically non-decreasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjection {
    /// The principal the projection was computed from
    pub principal: f64,

    /// One point per day from 0 to the elapsed day count, inclusive
    pub series: Vec<ProjectionPoint>,

    /// Profit portion the user may claim: projected current value minus
    /// principal, rounded to whole currency units
    pub eligible_to_withdraw: i64,
}

impl GrowthProjection {
    /// The projected balance as of the evaluation instant (last series point).
    #[must_use]
    pub fn current_amount(&self) -> i64 {
        // series is never empty — day 0 is always present
        self.series.last().map(|p| p.amount).unwrap_or(0)
    }

    /// Whole days covered by the projection.
    #[must_use]
    pub fn elapsed_days(&self) -> u32 {
        self.series.last().map(|p| p.day).unwrap_or(0)
    }
}
