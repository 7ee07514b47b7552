use serde::{Deserialize, Serialize};

/// Completion state of a report's checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChecklistStatus {
    Completed,
    Pending,
}

impl ChecklistStatus {
    /// String form used in the JSON resource and in filter matching
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecklistStatus::Completed => "Completed",
            ChecklistStatus::Pending => "Pending",
        }
    }

    /// All statuses, in display order
    pub fn all() -> Vec<ChecklistStatus> {
        vec![ChecklistStatus::Completed, ChecklistStatus::Pending]
    }

    /// Parse from the string form
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Completed" => Some(ChecklistStatus::Completed),
            "Pending" => Some(ChecklistStatus::Pending),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChecklistStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
