use std::time::Duration;
use shared::tally::Standing;
use tracing::{debug, warn};
use crate::service::{VotingError, VotingService};

pub const DEFAULT_CHAOS_TARGET: &str = ":doughnut:";

#[derive(Debug, Clone, PartialEq)]
pub struct ChaosSettings {
    /// Probability in `[0, 1]` that a vote for `target` is rejected.
    pub failure_rate: f32,
    /// Added before every vote that reaches the inner service.
    pub artificial_delay: Duration,
    pub target: String,
}

impl Default for ChaosSettings {
    fn default() -> Self {
        Self {
            failure_rate: 0.0,
            artificial_delay: Duration::ZERO,
            target: DEFAULT_CHAOS_TARGET.into(),
        }
    }
}

impl ChaosSettings {
    pub fn is_enabled(&self) -> bool {
        self.failure_rate > 0.0 || !self.artificial_delay.is_zero()
    }
}

/// Error-injecting wrapper around a [`VotingService`].
pub struct Chaos<S> {
    inner: S,
    settings: ChaosSettings,
}

impl<S: VotingService> Chaos<S> {
    pub fn new(inner: S, settings: ChaosSettings) -> Self {
        Self { inner, settings }
    }

    #[cfg(test)]
    fn inner(&self) -> &S {
        &self.inner
    }

    fn should_fail(&self, shortcode: &str) -> bool {
        if shortcode != self.settings.target || self.settings.failure_rate <= 0.0 {
            return false;
        }
        let probability: f32 = rand::random();
        if probability < self.settings.failure_rate {
            warn!(
                "probability [{}] is less than failure rate [{}], rejecting vote for {}",
                probability, self.settings.failure_rate, shortcode
            );
            return true;
        }
        false
    }
}

#[rocket::async_trait]
impl<S: VotingService> VotingService for Chaos<S> {
    async fn vote(&self, shortcode: &str) -> Result<u64, VotingError> {
        if self.should_fail(shortcode) {
            return Err(VotingError::Rejected { shortcode: shortcode.to_string() });
        }

        if !self.settings.artificial_delay.is_zero() {
            debug!("Delaying vote for {} by {:?}", shortcode, self.settings.artificial_delay);
            tokio::time::sleep(self.settings.artificial_delay).await;
        }
        self.inner.vote(shortcode).await
    }

    async fn results(&self) -> Result<Vec<Standing<String>>, VotingError> {
        self.inner.results().await
    }
}
