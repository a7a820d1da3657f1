use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::counter::sanitize::{clean_input_string, find_invalid_input};
use crate::error::{CalorieError, Result};
use crate::form::Form;
use crate::models::{CalorieSummary, Category};

/// Per-category totals plus the budget, read from one submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalorieTally {
    totals: BTreeMap<Category, i64>,
    pub budget: i64,
}

impl CalorieTally {
    /// Total for one category (0 when it has no entries).
    pub fn total(&self, category: Category) -> i64 {
        self.totals.get(&category).copied().unwrap_or(0)
    }

    /// Breakfast + lunch + dinner + snacks.
    pub fn consumed(&self) -> i64 {
        Category::ALL
            .iter()
            .filter(|c| c.is_consumed())
            .map(|c| self.total(*c))
            .fold(0, i64::saturating_add)
    }

    /// Exercise total.
    pub fn burned(&self) -> i64 {
        self.total(Category::Exercise)
    }

    pub fn summary(&self) -> CalorieSummary {
        CalorieSummary::new(self.budget, self.consumed(), self.burned())
    }
}

/// Coerce cleaned field text to a whole number of calories.
///
/// Empty text is 0. Decimal literals (optionally with an exponent that got past
/// the invalid-input check, such as `1.e5`) and `0x`/`0o`/`0b` integer
/// literals take their value when it is whole. Fractions, out-of-range values
/// and anything else silently become 0.
pub fn coerce_number(text: &str) -> i64 {
    if text.is_empty() {
        return 0;
    }

    parse_prefixed_integer(text)
        .or_else(|| parse_decimal(text))
        .and_then(whole_calories)
        .unwrap_or(0)
}

fn whole_calories(value: f64) -> Option<i64> {
    // `fract` is NaN for infinities, which also fails the check.
    if value.fract() != 0.0 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1].to_ascii_lowercase() {
        b'x' => 16,
        b'o' => 8,
        b'b' => 2,
        _ => return None,
    };

    // Invalid digits after a radix prefix make the whole value non-numeric.
    let value = text[2..].chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    });
    Some(value.unwrap_or(0.0))
}

fn parse_decimal(text: &str) -> Option<f64> {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let mut normalized = if int_part.is_empty() {
        "0".to_string()
    } else {
        int_part.to_string()
    };
    if !frac_part.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_part);
    }
    if let Some(exp) = exponent {
        if exp.is_empty() || !all_digits(exp) {
            return None;
        }
        normalized.push('e');
        normalized.push_str(exp);
    }

    normalized.parse().ok()
}

/// Sum a list of raw calorie field values.
///
/// Each value is cleaned first. The first value containing exponential
/// notation aborts with [`CalorieError::InvalidInput`] naming the matched text.
pub fn calories_from_inputs<'a, I>(values: I) -> Result<i64>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut calories: i64 = 0;

    for raw in values {
        let cleaned = clean_input_string(raw);
        if let Some(invalid) = find_invalid_input(&cleaned) {
            warn!(input = raw, matched = invalid, "rejected exponential notation");
            return Err(CalorieError::InvalidInput(invalid.to_string()));
        }
        calories = calories.saturating_add(coerce_number(&cleaned));
    }

    Ok(calories)
}

/// Read every calorie field of the form plus its budget.
///
/// Categories are read in page order, then the budget; any invalid value
/// aborts the whole tally.
pub fn tally(form: &Form) -> Result<CalorieTally> {
    let mut totals = BTreeMap::new();

    for category in Category::ALL {
        let values = form.entries(category).iter().map(|e| e.calories.as_str());
        let total = calories_from_inputs(values)?;
        totals.insert(category, total);
    }

    let budget = calories_from_inputs([form.budget()])?;

    let tally = CalorieTally { totals, budget };
    debug!(
        budget = tally.budget,
        consumed = tally.consumed(),
        burned = tally.burned(),
        "tallied form"
    );
    Ok(tally)
}
