use chrono::Duration;

/// How long cached values stay trustworthy, and how often to re-poll.
///
/// These were magic constants scattered through the web client; here they are
/// one explicit configuration object injected into the facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreshnessPolicy {
    /// Max age of a cached wallet snapshot before it must be re-fetched
    pub wallet_ttl: Duration,

    /// Max age of the cached display-currency preference
    pub currency_ttl: Duration,

    /// Interval for background wallet re-polling
    pub wallet_poll_interval: std::time::Duration,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            wallet_ttl: Duration::minutes(5),
            currency_ttl: Duration::hours(24),
            wallet_poll_interval: std::time::Duration::from_secs(30),
        }
    }
}
