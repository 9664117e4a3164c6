use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{ScoreResult, ScoringConfig};

/// Rating band for a final score. Presentation only; never fed back into
/// scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreBand {
    pub fn for_score(score: i32) -> Self {
        if score >= 750 {
            ScoreBand::Excellent
        } else if score >= 650 {
            ScoreBand::Good
        } else if score >= 550 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Poor => "Poor",
            ScoreBand::Fair => "Fair",
            ScoreBand::Good => "Good",
            ScoreBand::Excellent => "Excellent",
        }
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Render a contribution bar proportional to the component's share of the
/// score range, capped at `width` cells. Non-positive contributions render
/// empty.
fn contribution_bar(points: f64, range: f64, width: usize) -> String {
    if points <= 0.0 || range <= 0.0 || width == 0 {
        return String::new();
    }
    let cells = (points / range * width as f64).round() as usize;
    "#".repeat(cells.min(width))
}

// Column widths for the breakdown table. Label fits "Credit Utilization",
// points fits "-999.99".
const LABEL_WIDTH: usize = 19;
const SCORE_WIDTH: usize = 7;
const WEIGHT_WIDTH: usize = 7;
const POINTS_WIDTH: usize = 8;

/// Width taken by the fixed columns, before the bar
fn fixed_columns_width() -> usize {
    LABEL_WIDTH + SCORE_WIDTH + WEIGHT_WIDTH + POINTS_WIDTH + 2
}

/// Format a score result as a multi-line breakdown report.
///
/// One line per component in the fixed order, with the normalized sub-score,
/// its weight, the weighted contribution in points (two decimals), and a
/// bar scaled to the component's share of the score range. The bar width
/// adapts to the terminal and disappears on narrow ones.
pub fn format_report(result: &ScoreResult, config: &ScoringConfig, use_colors: bool) -> String {
    let band = ScoreBand::for_score(result.score);
    let mut lines = Vec::with_capacity(result.contributions.len() + 3);

    lines.push(format_score_line(result.score, band, use_colors));
    lines.push(String::new());

    let header = format!(
        "{:<label$}{:>score$}{:>weight$}{:>points$}",
        "Component",
        "Score",
        "Weight",
        "Points",
        label = LABEL_WIDTH,
        score = SCORE_WIDTH,
        weight = WEIGHT_WIDTH,
        points = POINTS_WIDTH,
    );
    if use_colors {
        lines.push(header.dimmed().to_string());
    } else {
        lines.push(header);
    }

    let bar_width = match get_terminal_width() {
        Some(w) if w > fixed_columns_width() + 10 => (w - fixed_columns_width()).min(24),
        Some(_) => 0,
        None => 24,
    };

    for contribution in &result.contributions {
        let weight = config.weights.get(contribution.component);
        let bar = contribution_bar(contribution.points, config.score_range(), bar_width);
        let line = format!(
            "{:<label$}{:>score$.4}{:>weight$.2}{:>points$.2}  {}",
            contribution.component.label(),
            contribution.score,
            weight,
            contribution.points,
            bar,
            label = LABEL_WIDTH,
            score = SCORE_WIDTH,
            weight = WEIGHT_WIDTH,
            points = POINTS_WIDTH,
        );
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn format_score_line(score: i32, band: ScoreBand, use_colors: bool) -> String {
    if !use_colors {
        return format!("Credit Score: {} ({})", score, band.as_str());
    }
    let score_str = score.to_string();
    let colored_score = match band {
        ScoreBand::Excellent | ScoreBand::Good => score_str.green().bold().to_string(),
        ScoreBand::Fair => score_str.yellow().bold().to_string(),
        ScoreBand::Poor => score_str.red().bold().to_string(),
    };
    format!("Credit Score: {} ({})", colored_score, band.as_str())
}

#[derive(Serialize)]
struct JsonReport {
    score: i32,
    band: &'static str,
    components: Vec<JsonComponent>,
}

#[derive(Serialize)]
struct JsonComponent {
    component: &'static str,
    score: f64,
    weight: f64,
    points: f64,
}

/// Format a score result as pretty-printed JSON for scripting.
/// Components are emitted in the fixed component order.
pub fn format_json(result: &ScoreResult, config: &ScoringConfig) -> Result<String> {
    let report = JsonReport {
        score: result.score,
        band: ScoreBand::for_score(result.score).as_str(),
        components: result
            .contributions
            .iter()
            .map(|c| JsonComponent {
                component: c.component.as_str(),
                score: c.score,
                weight: config.weights.get(c.component),
                points: c.points,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&report).context("Failed to serialize report to JSON")
}
