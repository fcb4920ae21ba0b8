use std::time::Duration;
use tracing::info;
use crate::chaos::{ChaosSettings, DEFAULT_CHAOS_TARGET};

pub const FAILURE_RATE: &str = "FAILURE_RATE";
pub const ARTIFICIAL_DELAY: &str = "ARTIFICIAL_DELAY";
pub const CHAOS_TARGET: &str = "CHAOS_TARGET";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{FAILURE_RATE} must be a number between 0 and 1, got [{0}]")]
    InvalidFailureRate(String),
    #[error("{ARTIFICIAL_DELAY} must be a duration such as 500ms, 2s or 1m, got [{0}]")]
    InvalidDelay(String),
    #[error("{CHAOS_TARGET} must not be empty")]
    EmptyTarget,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GatewayConfig {
    pub chaos: ChaosSettings,
}

impl GatewayConfig {
    /// Reads settings through `lookup`, which is the shuttle secret store at
    /// runtime. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let failure_rate = match lookup(FAILURE_RATE) {
            Some(raw) => parse_failure_rate(&raw)?,
            None => 0.0,
        };

        let artificial_delay = match lookup(ARTIFICIAL_DELAY) {
            Some(raw) => parse_duration(&raw).ok_or(ConfigError::InvalidDelay(raw))?,
            None => Duration::ZERO,
        };

        let target = match lookup(CHAOS_TARGET) {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyTarget),
            Some(raw) => raw.trim().to_string(),
            None => DEFAULT_CHAOS_TARGET.to_string(),
        };

        let config = Self {
            chaos: ChaosSettings { failure_rate, artificial_delay, target },
        };
        if config.chaos.is_enabled() {
            info!(
                "Chaos enabled: failure rate {} for {}, artificial delay {:?}",
                config.chaos.failure_rate, config.chaos.target, config.chaos.artificial_delay
            );
        }
        Ok(config)
    }
}

/// Parses `<n>ms`, `<n>s` or `<n>m`. A bare `0` is also accepted.
fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    if raw == "0" {
        return Some(Duration::ZERO);
    }
    if let Some(ms) = raw.strip_suffix("ms") {
        ms.trim().parse::<u64>().ok().map(Duration::from_millis)
    } else if let Some(secs) = raw.strip_suffix('s') {
        secs.trim().parse::<u64>().ok().map(Duration::from_secs)
    } else if let Some(mins) = raw.strip_suffix('m') {
        mins.trim().parse::<u64>().ok()
            .and_then(|m| m.checked_mul(60))
            .map(Duration::from_secs)
    } else {
        None
    }
}

fn parse_failure_rate(raw: &str) -> Result<f32, ConfigError> {
    match raw.trim().parse::<f32>() {
        Ok(rate) if (0.0..=1.0).contains(&rate) => Ok(rate),
        _ => Err(ConfigError::InvalidFailureRate(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<GatewayConfig, ConfigError> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GatewayConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config, GatewayConfig::default());
        assert!(!config.chaos.is_enabled());
        assert_eq!(config.chaos.target, ":doughnut:");
    }

    #[test]
    fn test_reads_all_keys() {
        let config = load(&[
            (FAILURE_RATE, "0.25"),
            (ARTIFICIAL_DELAY, " 150ms "),
            (CHAOS_TARGET, ":poop:"),
        ]).unwrap();
        assert_eq!(config.chaos.failure_rate, 0.25);
        assert_eq!(config.chaos.artificial_delay, Duration::from_millis(150));
        assert_eq!(config.chaos.target, ":poop:");
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert_eq!(load(&[(FAILURE_RATE, "1.5")]), Err(ConfigError::InvalidFailureRate("1.5".into())));
        assert_eq!(load(&[(FAILURE_RATE, "often")]), Err(ConfigError::InvalidFailureRate("often".into())));
        assert_eq!(load(&[(ARTIFICIAL_DELAY, "150")]), Err(ConfigError::InvalidDelay("150".into())));
        assert_eq!(load(&[(ARTIFICIAL_DELAY, "soon")]), Err(ConfigError::InvalidDelay("soon".into())));
        assert_eq!(load(&[(CHAOS_TARGET, " ")]), Err(ConfigError::EmptyTarget));
    }

    #[test]
    fn test_delay_units() {
        assert_eq!(parse_duration("500ms"), Some(Duration::from_millis(500)));
        assert_eq!(parse_duration("2s"), Some(Duration::from_secs(2)));
        assert_eq!(parse_duration("1m"), Some(Duration::from_secs(60)));
        assert_eq!(parse_duration("0"), Some(Duration::ZERO));
        assert_eq!(parse_duration("1.5s"), None);
        assert_eq!(parse_duration("ms"), None);
    }
}
