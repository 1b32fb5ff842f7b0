use chrono::{DateTime, Utc};

use crate::errors::CoreError;
use crate::models::projection::{GrowthProjection, ProjectionPoint};

/// Maximum projection span in days (10 years).
const MAX_PROJECTION_DAYS: i64 = 3650;

/// How a plan's advertised daily rate turns into a per-day growth factor.
///
/// Kept behind a trait because the two plausible readings of the rate give
/// very different curves, and the client must keep matching whatever the
/// backend actually pays out.
pub trait CompoundingPolicy: Send + Sync {
    /// Policy name for diagnostics.
    fn name(&self) -> &str;

    /// Multiplier applied to the principal on day `day`.
    fn factor(&self, daily_rate: f64, day: u32) -> f64;
}

/// The formula the production client ships: `(1 + rate/365)^day`.
///
/// Note the division — the plan copy advertises the rate as "X% daily", but
/// this policy spreads it across 365 days as if it were annual. Projections
/// must match the backend's payout math, so this stays the default; anyone
/// changing it here without a matching backend change will show users numbers
/// the withdrawal endpoint won't honor.
pub struct AnnualizedDailyCompounding;

impl CompoundingPolicy for AnnualizedDailyCompounding {
    fn name(&self) -> &str {
        "annualized-daily"
    }

    fn factor(&self, daily_rate: f64, day: u32) -> f64 {
        (1.0 + daily_rate / 365.0).powi(day as i32)
    }
}

/// The literal reading of "X% daily": `(1 + rate)^day`.
pub struct TrueDailyCompounding;

impl CompoundingPolicy for TrueDailyCompounding {
    fn name(&self) -> &str {
        "true-daily"
    }

    fn factor(&self, daily_rate: f64, day: u32) -> f64 {
        (1.0 + daily_rate).powi(day as i32)
    }
}

/// Projects an investment's growth curve and withdrawal-eligible profit.
///
/// Pure computation — no I/O, no clock reads beyond the explicit `as_of`
/// argument. Callers re-run it on a timer and replace the previous result.
pub struct GrowthProjector {
    policy: Box<dyn CompoundingPolicy>,
}

impl GrowthProjector {
    /// Projector with the production compounding policy.
    pub fn new() -> Self {
        Self {
            policy: Box::new(AnnualizedDailyCompounding),
        }
    }

    /// Projector with a custom compounding policy.
    pub fn with_policy(policy: Box<dyn CompoundingPolicy>) -> Self {
        Self { policy }
    }

    /// Name of the active compounding policy.
    #[must_use]
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Project daily balances from `start_date` up to `as_of`.
    ///
    /// - `principal` must be finite and positive; `daily_rate` finite and
    ///   non-negative. Anything else is `InvalidInput` with no partial series.
    /// - Elapsed days are whole days, clamped at 0 when `as_of` precedes
    ///   `start_date`.
    /// - One point per day from 0 to elapsed days inclusive, each rounded to
    ///   the nearest whole currency unit (half away from zero).
    /// - `eligible_to_withdraw` is the last point minus the principal, rounded.
    pub fn project(
        &self,
        principal: f64,
        daily_rate: f64,
        start_date: DateTime<Utc>,
        as_of: DateTime<Utc>,
    ) -> Result<GrowthProjection, CoreError> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "principal must be finite and positive, got {principal}"
            )));
        }
        if !daily_rate.is_finite() || daily_rate < 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "daily rate must be finite and non-negative, got {daily_rate}"
            )));
        }

        let elapsed = (as_of - start_date).num_days().max(0);
        if elapsed > MAX_PROJECTION_DAYS {
            return Err(CoreError::ValidationError(format!(
                "Projection span of {elapsed} days exceeds maximum of {MAX_PROJECTION_DAYS} days (10 years)"
            )));
        }
        let elapsed = elapsed as u32;

        let mut series = Vec::with_capacity(elapsed as usize + 1);
        for day in 0..=elapsed {
            let amount = principal * self.policy.factor(daily_rate, day);
            series.push(ProjectionPoint {
                day,
                amount: amount.round() as i64,
            });
        }

        // series is non-empty: day 0 is always pushed
        let current = series[series.len() - 1].amount;
        let eligible_to_withdraw = (current as f64 - principal).round() as i64;

        Ok(GrowthProjection {
            principal,
            series,
            eligible_to_withdraw,
        })
    }
}

impl Default for GrowthProjector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annualized_factor_day_zero_is_one() {
        let p = AnnualizedDailyCompounding;
        assert_eq!(p.factor(0.03, 0), 1.0);
    }

    #[test]
    fn true_daily_grows_faster_than_annualized() {
        let a = AnnualizedDailyCompounding;
        let t = TrueDailyCompounding;
        assert!(t.factor(0.03, 10) > a.factor(0.03, 10));
    }
}
