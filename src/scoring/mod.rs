pub mod config;
pub mod engine;
pub mod factors;
pub mod validation;

pub use config::*;
pub use engine::{
    aggregate, calculate_score, component_scores, ComponentContribution, ComponentScores,
    ScoreResult,
};
pub use factors::Component;
pub use validation::validate_scoring;
