use serde::{Deserialize, Serialize};

use super::factors::Component;

/// Main scoring configuration.
///
/// Defines the weighted component model: per-component weights that must
/// sum to 1.0, the score bounds, and the sub-score clamping mode. The
/// built-in defaults are the production model; a config file only needs to
/// state what it overrides.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     payment_history: 0.40
///     credit_utilization: 0.25
///   min_score: 300
///   max_score: 900
///   clamp_components: false
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Component weights (default: 0.35 / 0.30 / 0.15 / 0.10 / 0.10)
    #[serde(default)]
    pub weights: Weights,

    /// Lowest reachable score (default: 300)
    #[serde(default = "default_min_score")]
    pub min_score: i32,

    /// Highest reachable score (default: 900)
    #[serde(default = "default_max_score")]
    pub max_score: i32,

    /// Force every component score into [0, 1] before weighting.
    ///
    /// Off by default: the production model lets an out-of-contract input
    /// push a component past 1.0 and relies on the final clamp alone.
    #[serde(default)]
    pub clamp_components: bool,
}

impl ScoringConfig {
    /// Span over which weighted contributions are distributed, in points.
    pub fn score_range(&self) -> f64 {
        f64::from(self.max_score - self.min_score)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            min_score: default_min_score(),
            max_score: default_max_score(),
            clamp_components: false,
        }
    }
}

fn default_min_score() -> i32 {
    300
}

fn default_max_score() -> i32 {
    900
}

/// Per-component weights. Validated at startup to sum to 1.0.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    #[serde(default = "default_payment_history_weight")]
    pub payment_history: f64,

    #[serde(default = "default_credit_utilization_weight")]
    pub credit_utilization: f64,

    #[serde(default = "default_credit_age_weight")]
    pub credit_age: f64,

    #[serde(default = "default_credit_mix_weight")]
    pub credit_mix: f64,

    #[serde(default = "default_new_credit_weight")]
    pub new_credit: f64,
}

impl Weights {
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::PaymentHistory => self.payment_history,
            Component::CreditUtilization => self.credit_utilization,
            Component::CreditAge => self.credit_age,
            Component::CreditMix => self.credit_mix,
            Component::NewCredit => self.new_credit,
        }
    }

    pub fn sum(&self) -> f64 {
        Component::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            payment_history: default_payment_history_weight(),
            credit_utilization: default_credit_utilization_weight(),
            credit_age: default_credit_age_weight(),
            credit_mix: default_credit_mix_weight(),
            new_credit: default_new_credit_weight(),
        }
    }
}

fn default_payment_history_weight() -> f64 {
    0.35
}

fn default_credit_utilization_weight() -> f64 {
    0.30
}

fn default_credit_age_weight() -> f64 {
    0.15
}

fn default_credit_mix_weight() -> f64 {
    0.10
}

fn default_new_credit_weight() -> f64 {
    0.10
}
