use serde::{Deserialize, Serialize};

/// A classroom (course offering) that owns sections and assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

/// A section of a classroom. Due dates are set per section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    #[serde(default)]
    pub classroom_id: i64,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    /// Explicit roster. `None` means every known user belongs to the section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_ids: Option<Vec<i64>>,
}

impl Section {
    /// Name shown in reports, falling back to `name` when no display name is set.
    pub fn display_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}
