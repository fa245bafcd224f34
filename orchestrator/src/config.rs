use crate::{PipelineError, Result};
use inference::ContributionMode;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub simulated_latency_ms: u64,
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub max_text_length: usize,
    pub contribution_mode: ContributionMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 2000,
            timeout_ms: 5000,
            max_retries: 2,
            max_text_length: 10000,
            contribution_mode: ContributionMode::Deterministic,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(latency_str) = std::env::var("REVIEWLENS_SIMULATED_LATENCY_MS") {
            if let Ok(latency) = latency_str.parse::<u64>() {
                config.simulated_latency_ms = latency;
            }
        }

        if let Ok(timeout_str) = std::env::var("REVIEWLENS_TIMEOUT_MS") {
            if let Ok(timeout) = timeout_str.parse::<u64>() {
                config.timeout_ms = timeout;
            }
        }

        if let Ok(retries_str) = std::env::var("REVIEWLENS_MAX_RETRIES") {
            if let Ok(retries) = retries_str.parse::<u32>() {
                config.max_retries = retries;
            }
        }

        if let Ok(max_length_str) = std::env::var("REVIEWLENS_MAX_TEXT_LENGTH") {
            if let Ok(max_length) = max_length_str.parse::<usize>() {
                config.max_text_length = max_length;
            }
        }

        let mode = std::env::var("REVIEWLENS_CONTRIBUTION_MODE").ok();
        let seed = std::env::var("REVIEWLENS_CONTRIBUTION_SEED")
            .ok()
            .and_then(|s| s.parse::<u64>().ok());

        if let Some(mode) = mode {
            match parse_contribution_mode(&mode, seed) {
                Ok(parsed) => config.contribution_mode = parsed,
                Err(e) => tracing::warn!("Ignoring REVIEWLENS_CONTRIBUTION_MODE: {}", e),
            }
        }

        config
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(PipelineError::Config(
                "Timeout must be greater than zero".to_string()
            ));
        }

        if self.max_text_length == 0 {
            return Err(PipelineError::Config(
                "Max text length must be greater than zero".to_string()
            ));
        }

        Ok(())
    }
}

/// Parses `deterministic` or `random`; a seed turns `random` into seeded draws.
pub fn parse_contribution_mode(mode: &str, seed: Option<u64>) -> Result<ContributionMode> {
    match (mode.trim().to_lowercase().as_str(), seed) {
        ("deterministic", _) => Ok(ContributionMode::Deterministic),
        ("random", Some(seed)) => Ok(ContributionMode::Seeded(seed)),
        ("random", None) => Ok(ContributionMode::Random),
        (other, _) => Err(PipelineError::Config(format!(
            "Unknown contribution mode '{}' (expected deterministic or random)",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.simulated_latency(), Duration::from_secs(2));
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.contribution_mode, ContributionMode::Deterministic);
    }

    #[test]
    fn test_validation_rejects_zero_limits() {
        let mut config = Config::default();
        config.timeout_ms = 0;
        assert!(matches!(config.validate(), Err(PipelineError::Config(_))));

        config.timeout_ms = 100;
        config.max_text_length = 0;
        assert!(config.validate().is_err());

        config.max_text_length = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_latency_is_allowed() {
        let config = Config {
            simulated_latency_ms: 0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.simulated_latency().is_zero());
    }

    #[test]
    fn test_parse_contribution_mode() {
        assert_eq!(
            parse_contribution_mode("deterministic", None).unwrap(),
            ContributionMode::Deterministic
        );
        assert_eq!(
            parse_contribution_mode("deterministic", Some(1)).unwrap(),
            ContributionMode::Deterministic
        );
        assert_eq!(
            parse_contribution_mode(" Random ", None).unwrap(),
            ContributionMode::Random
        );
        assert_eq!(
            parse_contribution_mode("random", Some(9)).unwrap(),
            ContributionMode::Seeded(9)
        );
        assert!(parse_contribution_mode("chaotic", None).is_err());
    }
}
