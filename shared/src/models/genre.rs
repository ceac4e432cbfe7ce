//! Genre choices used to populate the browse-by filter

use serde::{Deserialize, Serialize};

/// One selectable genre: `code` is sent as the filter value, `label` is shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreChoice {
    pub code: String,
    pub label: String,
}

impl GenreChoice {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }

    /// Build choices from the backend's `[[code, label], ...]` payload.
    ///
    /// A repeated code keeps the position of its first occurrence and the
    /// label of its last one.
    pub fn from_pairs<I>(pairs: I) -> Vec<GenreChoice>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut choices: Vec<GenreChoice> = Vec::new();
        for (code, label) in pairs {
            match choices.iter_mut().find(|c| c.code == code) {
                Some(existing) => existing.label = label,
                None => choices.push(GenreChoice { code, label }),
            }
        }
        choices
    }
}
