use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw borrower attributes, as they arrive from a bureau extract.
///
/// Every field except `on_time_payments_percent` is optional and defaults
/// to zero or false. No cross-field invariants are enforced: the scoring
/// model degrades through its own clamps instead of rejecting input.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Applicant {
    /// Share of payments made on time, 0-100
    pub on_time_payments_percent: f64,

    /// Average days late across late payments
    #[serde(default)]
    pub days_late_avg: f64,

    /// Revolving balance as a percentage of the credit limit
    #[serde(default)]
    pub utilization_percent: f64,

    /// Age of the oldest credit line, in years
    #[serde(default)]
    pub credit_age_years: f64,

    #[serde(default)]
    pub num_secured_loans: u32,

    #[serde(default)]
    pub num_unsecured_loans: u32,

    #[serde(default)]
    pub has_credit_card: bool,

    /// Hard inquiries over the trailing six months
    #[serde(default)]
    pub num_inquiries_6months: u32,

    /// Accounts opened over the trailing six months
    #[serde(default)]
    pub num_new_accounts_6months: u32,
}

impl Default for Applicant {
    fn default() -> Self {
        Self {
            on_time_payments_percent: 0.0,
            days_late_avg: 0.0,
            utilization_percent: 0.0,
            credit_age_years: 0.0,
            num_secured_loans: 0,
            num_unsecured_loans: 0,
            has_credit_card: false,
            num_inquiries_6months: 0,
            num_new_accounts_6months: 0,
        }
    }
}

impl Applicant {
    /// The built-in demo borrower used by the `sample` subcommand.
    pub fn sample() -> Self {
        Self {
            on_time_payments_percent: 95.0,
            days_late_avg: 5.0,
            utilization_percent: 25.0,
            credit_age_years: 3.0,
            num_secured_loans: 1,
            num_unsecured_loans: 1,
            has_credit_card: true,
            num_inquiries_6months: 1,
            num_new_accounts_6months: 0,
        }
    }
}

/// Load an applicant record from a YAML or JSON file.
///
/// Dispatches on the file extension: `.json` is parsed as JSON, anything
/// else as YAML.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as a
/// well-formed applicant record.
pub fn load_applicant(path: &Path) -> Result<Applicant> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read applicant file at {}", path.display()))?;

    let applicant = if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse applicant: invalid JSON in {}",
                path.display()
            )
        })?
    } else {
        serde_saphyr::from_str(&content).with_context(|| {
            format!(
                "Failed to parse applicant: invalid YAML in {}",
                path.display()
            )
        })?
    };

    Ok(applicant)
}
