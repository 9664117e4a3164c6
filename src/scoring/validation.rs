use super::config::ScoringConfig;
use super::factors::Component;

/// Weight sums are checked against this tolerance; config files carry short
/// decimal literals, so anything beyond rounding noise is a real mistake.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for component in Component::ALL {
        let weight = config.weights.get(component);
        if !(0.0..=1.0).contains(&weight) {
            errors.push(format!(
                "scoring.weights.{}: must be in [0, 1], got {}",
                component.as_str(),
                weight
            ));
        }
    }

    let sum = config.weights.sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        errors.push(format!("scoring.weights: must sum to 1.0, got {}", sum));
    }

    if config.min_score >= config.max_score {
        errors.push(format!(
            "scoring.min_score: {} must be below max_score {}",
            config.min_score, config.max_score
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
