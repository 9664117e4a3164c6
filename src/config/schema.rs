use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

/// Top-level application config.
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scoring model overrides. When omitted, the built-in weights and
    /// bounds apply.
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Config {
    /// The scoring config to run with: file overrides, or the defaults.
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_default_scoring() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config.effective_scoring(), ScoringConfig::default());
    }

    #[test]
    fn test_scoring_overrides_parse() {
        let yaml = r#"
scoring:
  weights:
    payment_history: 0.40
    credit_utilization: 0.25
  clamp_components: true
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let scoring = config.effective_scoring();
        assert_eq!(scoring.weights.payment_history, 0.40);
        assert_eq!(scoring.weights.credit_utilization, 0.25);
        assert!(scoring.clamp_components);
        // Untouched weights keep their defaults
        assert_eq!(scoring.weights.credit_age, 0.15);
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let yaml = "queries: []";
        let result: Result<Config, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
