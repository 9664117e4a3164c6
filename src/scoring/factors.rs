/// The five scoring components, in their fixed evaluation and reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    PaymentHistory,
    CreditUtilization,
    CreditAge,
    CreditMix,
    NewCredit,
}

impl Component {
    pub const ALL: [Component; 5] = [
        Component::PaymentHistory,
        Component::CreditUtilization,
        Component::CreditAge,
        Component::CreditMix,
        Component::NewCredit,
    ];

    /// Machine-readable key, used in config paths and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::PaymentHistory => "payment_history",
            Component::CreditUtilization => "credit_utilization",
            Component::CreditAge => "credit_age",
            Component::CreditMix => "credit_mix",
            Component::NewCredit => "new_credit",
        }
    }

    /// Human-readable label for report output.
    pub fn label(&self) -> &'static str {
        match self {
            Component::PaymentHistory => "Payment History",
            Component::CreditUtilization => "Credit Utilization",
            Component::CreditAge => "Credit Age",
            Component::CreditMix => "Credit Mix",
            Component::NewCredit => "New Credit",
        }
    }
}

/// Payment history: share of on-time payments, discounted for lateness.
///
/// The late penalty ramps linearly with average days late and saturates at
/// 90 days, cutting the base by at most half. There is no upper clamp on
/// this path: an out-of-contract `on_time_percent` above 100 pushes the
/// score above 1.0 (see `ScoringConfig::clamp_components`).
pub fn payment_history(on_time_percent: f64, days_late_avg: f64) -> f64 {
    let mut base = on_time_percent / 100.0;
    if days_late_avg > 0.0 {
        let late_penalty = (days_late_avg / 90.0).min(1.0);
        base *= 1.0 - late_penalty * 0.5;
    }
    base
}

/// Utilization buckets, first match wins, upper bounds inclusive.
///
/// Deliberately non-monotonic: near-zero utilization scores slightly below
/// the 10-30% sweet spot.
pub fn credit_utilization(utilization_percent: f64) -> f64 {
    if utilization_percent <= 10.0 {
        0.95
    } else if utilization_percent <= 30.0 {
        1.0
    } else if utilization_percent <= 50.0 {
        0.85
    } else if utilization_percent <= 75.0 {
        0.60
    } else {
        0.30
    }
}

/// Credit age tiers, highest applicable tier wins.
pub fn credit_age(years: f64) -> f64 {
    if years >= 5.0 {
        1.0
    } else if years >= 3.0 {
        0.85
    } else if years >= 1.0 {
        0.70
    } else {
        0.40
    }
}

/// Credit mix: rewards product diversity, with diminishing returns past two
/// products of a loan type.
///
/// An applicant with no products at all gets a 0.30 floor rather than zero;
/// no products also means no negative history. The clamp to 1.0 is
/// load-bearing: the formula's natural maximum is 1.2.
pub fn credit_mix(num_secured: u32, num_unsecured: u32, has_credit_card: bool) -> f64 {
    if num_secured == 0 && num_unsecured == 0 && !has_credit_card {
        return 0.30;
    }

    let diversity = num_secured.min(2) as f64 * 0.3
        + num_unsecured.min(2) as f64 * 0.2
        + if has_credit_card { 0.2 } else { 0.0 };

    diversity.min(1.0)
}

/// New credit: inquiry and new-account penalties over the trailing six
/// months. Each penalty caps at 0.60 and only the worse of the two applies;
/// they never stack. Result is bounded to [0.40, 1.0].
pub fn new_credit(num_inquiries: u32, num_new_accounts: u32) -> f64 {
    let inquiry_penalty = (num_inquiries as f64 * 0.15).min(0.60);
    let new_account_penalty = (num_new_accounts as f64 * 0.20).min(0.60);

    1.0 - inquiry_penalty.max(new_account_penalty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_order() {
        let keys: Vec<&str> = Component::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "payment_history",
                "credit_utilization",
                "credit_age",
                "credit_mix",
                "new_credit"
            ]
        );
    }

    #[test]
    fn test_payment_history_perfect() {
        assert_eq!(payment_history(100.0, 0.0), 1.0);
    }

    #[test]
    fn test_payment_history_no_penalty_branch() {
        assert_eq!(payment_history(80.0, 0.0), 0.8);
    }

    #[test]
    fn test_payment_history_full_saturation() {
        // 90 days average lateness saturates the penalty at a 50% cut
        assert_eq!(payment_history(100.0, 90.0), 0.5);
    }

    #[test]
    fn test_payment_history_penalty_saturates() {
        // No further reduction past 90 days
        assert_eq!(payment_history(100.0, 180.0), 0.5);
        assert_eq!(payment_history(100.0, 90.0), payment_history(100.0, 365.0));
    }

    #[test]
    fn test_payment_history_partial_penalty() {
        // 95% on time, 5 days late avg: 0.95 * (1 - (5/90) * 0.5)
        let score = payment_history(95.0, 5.0);
        assert!((score - 0.9236111111111111).abs() < 1e-9);
    }

    #[test]
    fn test_payment_history_no_upper_clamp() {
        // Out-of-contract input escapes above 1.0; only the final aggregate
        // is hard-clamped
        assert_eq!(payment_history(150.0, 0.0), 1.5);
    }

    #[test]
    fn test_utilization_buckets() {
        assert_eq!(credit_utilization(0.0), 0.95);
        assert_eq!(credit_utilization(25.0), 1.0);
        assert_eq!(credit_utilization(40.0), 0.85);
        assert_eq!(credit_utilization(60.0), 0.60);
        assert_eq!(credit_utilization(80.0), 0.30);
        assert_eq!(credit_utilization(500.0), 0.30);
    }

    #[test]
    fn test_utilization_boundaries_inclusive() {
        assert_eq!(credit_utilization(10.0), 0.95);
        assert_eq!(credit_utilization(10.01), 1.0);
        assert_eq!(credit_utilization(30.0), 1.0);
        assert_eq!(credit_utilization(30.01), 0.85);
        assert_eq!(credit_utilization(50.0), 0.85);
        assert_eq!(credit_utilization(50.01), 0.60);
        assert_eq!(credit_utilization(75.0), 0.60);
        assert_eq!(credit_utilization(75.01), 0.30);
    }

    #[test]
    fn test_credit_age_tiers() {
        assert_eq!(credit_age(0.0), 0.40);
        assert_eq!(credit_age(0.99), 0.40);
        assert_eq!(credit_age(1.0), 0.70);
        assert_eq!(credit_age(2.9), 0.70);
        assert_eq!(credit_age(3.0), 0.85);
        assert_eq!(credit_age(4.99), 0.85);
        assert_eq!(credit_age(5.0), 1.0);
        assert_eq!(credit_age(40.0), 1.0);
    }

    #[test]
    fn test_credit_mix_no_products_floor() {
        assert_eq!(credit_mix(0, 0, false), 0.30);
    }

    #[test]
    fn test_credit_mix_card_only_below_floor() {
        // A single card scores below the no-products floor; the floor only
        // applies when there are no products at all
        assert!((credit_mix(0, 0, true) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_credit_mix_full_spread() {
        let score = credit_mix(1, 1, true);
        assert!((score - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_credit_mix_saturates_at_one() {
        assert_eq!(credit_mix(5, 5, true), 1.0);
        assert_eq!(credit_mix(2, 2, true), 1.0);
    }

    #[test]
    fn test_credit_mix_loan_type_cap() {
        // Diminishing returns: a third loan of a type adds nothing
        assert_eq!(credit_mix(3, 0, false), credit_mix(2, 0, false));
        assert_eq!(credit_mix(0, 7, false), credit_mix(0, 2, false));
    }

    #[test]
    fn test_new_credit_clean() {
        assert_eq!(new_credit(0, 0), 1.0);
    }

    #[test]
    fn test_new_credit_single_inquiry() {
        assert_eq!(new_credit(1, 0), 0.85);
    }

    #[test]
    fn test_new_credit_inquiry_penalty_caps() {
        // 4 inquiries hit the 0.60 cap
        assert_eq!(new_credit(4, 0), 0.40);
        assert_eq!(new_credit(20, 0), 0.40);
    }

    #[test]
    fn test_new_credit_new_account_penalty_caps() {
        assert_eq!(new_credit(0, 4), 0.40);
        assert_eq!(new_credit(0, 10), 0.40);
    }

    #[test]
    fn test_new_credit_penalties_do_not_stack() {
        // inquiry penalty 0.30, new-account penalty 0.40: only the worse applies
        assert_eq!(new_credit(2, 2), 0.60);
    }

    #[test]
    fn test_new_credit_lower_bound() {
        assert_eq!(new_credit(100, 100), 0.40);
    }
}
