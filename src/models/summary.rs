use std::fmt;

use serde::Serialize;

/// Sign-based label for the remaining calorie balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Balance {
    Surplus,
    Deficit,
}

impl Balance {
    /// Surplus when nothing is left over or more, deficit below zero.
    pub fn of(remaining: i64) -> Self {
        if remaining >= 0 {
            Balance::Surplus
        } else {
            Balance::Deficit
        }
    }

    /// Lowercase class name used by the output markup.
    pub fn css_class(&self) -> &'static str {
        match self {
            Balance::Surplus => "surplus",
            Balance::Deficit => "deficit",
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Balance::Surplus => f.write_str("Surplus"),
            Balance::Deficit => f.write_str("Deficit"),
        }
    }
}

/// Outcome of one successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalorieSummary {
    pub budgeted: i64,
    pub consumed: i64,
    pub burned: i64,
    /// `budgeted - consumed + burned`, saturating at the `i64` bounds.
    pub remaining: i64,
    pub balance: Balance,
}

impl CalorieSummary {
    pub fn new(budgeted: i64, consumed: i64, burned: i64) -> Self {
        let remaining = budgeted.saturating_sub(consumed).saturating_add(burned);
        Self {
            budgeted,
            consumed,
            burned,
            remaining,
            balance: Balance::of(remaining),
        }
    }

    /// Absolute value of the remaining balance, as displayed.
    pub fn magnitude(&self) -> u64 {
        self.remaining.unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surplus_at_zero() {
        let summary = CalorieSummary::new(2000, 2000, 0);
        assert_eq!(summary.remaining, 0);
        assert_eq!(summary.balance, Balance::Surplus);
    }

    #[test]
    fn test_deficit_magnitude() {
        let summary = CalorieSummary::new(1500, 1800, 100);
        assert_eq!(summary.remaining, -200);
        assert_eq!(summary.balance, Balance::Deficit);
        assert_eq!(summary.magnitude(), 200);
    }

    #[test]
    fn test_balance_labels() {
        assert_eq!(Balance::Surplus.to_string(), "Surplus");
        assert_eq!(Balance::Deficit.css_class(), "deficit");
    }
}
