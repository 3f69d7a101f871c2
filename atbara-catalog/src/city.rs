use serde::{Deserialize, Serialize};

/// A served station. `id` doubles as the translation key for the localised name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct City {
    pub id: String,
    pub name_en: String,
}

impl City {
    pub fn new(id: &str, name_en: &str) -> Self {
        Self {
            id: id.to_string(),
            name_en: name_en.to_string(),
        }
    }
}
