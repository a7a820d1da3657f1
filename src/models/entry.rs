use crate::models::Category;

/// A named calorie value inside a category.
///
/// Both halves are kept as the raw text the user typed; nothing is parsed
/// until the form is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Category this entry belongs to.
    pub category: Category,

    /// 1-based position within the category.
    pub number: usize,

    /// Free-text name, e.g. "Oatmeal".
    pub name: String,

    /// Raw calorie field text.
    pub calories: String,
}

impl Entry {
    pub fn new(
        category: Category,
        number: usize,
        name: impl Into<String>,
        calories: impl Into<String>,
    ) -> Self {
        Self {
            category,
            number,
            name: name.into(),
            calories: calories.into(),
        }
    }

    /// Field id of the name input, e.g. `breakfast-1-name`.
    pub fn name_field_id(&self) -> String {
        format!("{}-{}-name", self.category.id(), self.number)
    }

    /// Field id of the calories input, e.g. `breakfast-1-calories`.
    pub fn calories_field_id(&self) -> String {
        format!("{}-{}-calories", self.category.id(), self.number)
    }

    pub fn name_label(&self) -> String {
        format!("Entry {} Name", self.number)
    }

    pub fn calories_label(&self) -> String {
        format!("Entry {} Calories", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_and_labels() {
        let entry = Entry::new(Category::Snacks, 3, "Apple", "95");
        assert_eq!(entry.name_field_id(), "snacks-3-name");
        assert_eq!(entry.calories_field_id(), "snacks-3-calories");
        assert_eq!(entry.name_label(), "Entry 3 Name");
        assert_eq!(entry.calories_label(), "Entry 3 Calories");
    }
}
