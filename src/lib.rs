//! Bureau-style credit scoring: five weighted components, a 300-900 score,
//! and a per-component contribution breakdown. The scoring core is pure and
//! side-effect free; config and applicant records load from YAML.

pub mod applicant;
pub mod config;
pub mod output;
pub mod scoring;
