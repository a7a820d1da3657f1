use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{CalorieError, Result};

/// Minimum Jaro-Winkler similarity for a fuzzy category match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// One of the five buckets entries are grouped into.
///
/// Breakfast through snacks count as consumed calories; exercise counts as
/// burned calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    Exercise,
}

impl Category {
    /// All categories in page order.
    pub const ALL: [Category; 5] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Snacks,
        Category::Exercise,
    ];

    /// Lowercase identifier, used as the field id prefix.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Dinner => "dinner",
            Category::Snacks => "snacks",
            Category::Exercise => "exercise",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Snacks => "Snacks",
            Category::Exercise => "Exercise",
        }
    }

    /// Whether entries in this category are eaten (as opposed to burned).
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Category::Exercise)
    }

    /// Look up a category by name, falling back to the closest fuzzy match.
    pub fn resolve(input: &str) -> Result<Category> {
        if let Ok(category) = input.parse() {
            return Ok(category);
        }

        let needle = input.trim().to_lowercase();
        Self::ALL
            .iter()
            .map(|c| (*c, jaro_winkler(c.id(), &needle)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(c, _)| c)
            .ok_or_else(|| CalorieError::UnknownCategory(input.to_string()))
    }
}

impl FromStr for Category {
    type Err = CalorieError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalorieError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
