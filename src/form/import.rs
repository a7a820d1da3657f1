use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::form::Form;
use crate::models::Category;

/// One entry as written in a form snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct EntrySnapshot {
    #[serde(default)]
    pub name: String,

    /// Calorie text; JSON numbers are accepted and kept as their text.
    #[serde(default, deserialize_with = "text_or_number")]
    pub calories: String,
}

/// A whole form as written in a snapshot file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSnapshot {
    #[serde(default, deserialize_with = "text_or_number")]
    pub budget: String,

    #[serde(default)]
    pub entries: BTreeMap<Category, Vec<EntrySnapshot>>,
}

fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

impl FormSnapshot {
    /// Build a fresh form, appending entries so they are numbered from 1.
    pub fn into_form(self) -> Form {
        let mut form = Form::new();
        form.set_budget(self.budget);
        for (category, entries) in self.entries {
            for entry in entries {
                form.add_entry(category, entry.name, entry.calories);
            }
        }
        form
    }
}

/// Parse a form snapshot from JSON text.
pub fn parse_form(json: &str) -> Result<Form> {
    let snapshot: FormSnapshot = serde_json::from_str(json)?;
    Ok(snapshot.into_form())
}

/// Load a form snapshot from a JSON file. The file is only ever read.
pub fn load_form<P: AsRef<Path>>(path: P) -> Result<Form> {
    let content = fs::read_to_string(path.as_ref())?;
    let form = parse_form(&content)?;
    debug!(
        path = %path.as_ref().display(),
        entries = form.total_entries(),
        "loaded form snapshot"
    );
    Ok(form)
}
