use super::config::ScoringConfig;
use super::factors::{self, Component};
use crate::applicant::Applicant;

/// Normalized per-component scores, one field per component.
///
/// A fixed-shape record rather than a keyed map: the aggregator cannot be
/// handed a partial set of components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub payment_history: f64,
    pub credit_utilization: f64,
    pub credit_age: f64,
    pub credit_mix: f64,
    pub new_credit: f64,
}

impl ComponentScores {
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::PaymentHistory => self.payment_history,
            Component::CreditUtilization => self.credit_utilization,
            Component::CreditAge => self.credit_age,
            Component::CreditMix => self.credit_mix,
            Component::NewCredit => self.new_credit,
        }
    }

    /// Corrected variant: every component forced into [0, 1].
    pub fn clamped(&self) -> Self {
        Self {
            payment_history: self.payment_history.clamp(0.0, 1.0),
            credit_utilization: self.credit_utilization.clamp(0.0, 1.0),
            credit_age: self.credit_age.clamp(0.0, 1.0),
            credit_mix: self.credit_mix.clamp(0.0, 1.0),
            new_credit: self.new_credit.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentContribution {
    pub component: Component,
    /// Normalized sub-score, nominally in [0, 1]
    pub score: f64,
    /// Weighted contribution in final-score points
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: i32,
    /// Per-component contributions in the fixed component order
    pub contributions: Vec<ComponentContribution>,
}

/// Evaluate the five component functions for an applicant.
pub fn component_scores(applicant: &Applicant) -> ComponentScores {
    ComponentScores {
        payment_history: factors::payment_history(
            applicant.on_time_payments_percent,
            applicant.days_late_avg,
        ),
        credit_utilization: factors::credit_utilization(applicant.utilization_percent),
        credit_age: factors::credit_age(applicant.credit_age_years),
        credit_mix: factors::credit_mix(
            applicant.num_secured_loans,
            applicant.num_unsecured_loans,
            applicant.has_credit_card,
        ),
        new_credit: factors::new_credit(
            applicant.num_inquiries_6months,
            applicant.num_new_accounts_6months,
        ),
    }
}

/// Weight, sum, round, and clamp component scores into a final score.
///
/// Contributions are reported pre-clamp: if the total escapes the configured
/// bounds, or a component score escaped [0, 1], the parts will not sum to
/// `score - min_score`. That mismatch is observable on purpose. Rounding is
/// `f64::round`, half away from zero.
pub fn aggregate(scores: &ComponentScores, config: &ScoringConfig) -> ScoreResult {
    let range = config.score_range();
    let mut contributions = Vec::with_capacity(Component::ALL.len());
    let mut total = 0.0;

    for component in Component::ALL {
        let score = scores.get(component);
        let points = score * config.weights.get(component) * range;
        total += points;
        contributions.push(ComponentContribution {
            component,
            score,
            points,
        });
    }

    let score = (total.round() as i32 + config.min_score).clamp(config.min_score, config.max_score);

    ScoreResult {
        score,
        contributions,
    }
}

/// Score an applicant end to end: evaluate all five components in the fixed
/// order, then aggregate.
pub fn calculate_score(applicant: &Applicant, config: &ScoringConfig) -> ScoreResult {
    let scores = component_scores(applicant);
    let scores = if config.clamp_components {
        scores.clamped()
    } else {
        scores
    };
    aggregate(&scores, config)
}
