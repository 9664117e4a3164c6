pub mod formatter;

pub use formatter::{format_json, format_report, should_use_colors, ScoreBand};
