use serde::{Deserialize, Serialize};

/// Report categories present in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    Sales,
    Inventory,
    Finance,
}

impl ReportType {
    /// String form used in the JSON resource and in filter matching
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Sales => "Sales",
            ReportType::Inventory => "Inventory",
            ReportType::Finance => "Finance",
        }
    }

    /// All report types, in display order
    pub fn all() -> Vec<ReportType> {
        vec![ReportType::Sales, ReportType::Inventory, ReportType::Finance]
    }

    /// Parse from the string form
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Sales" => Some(ReportType::Sales),
            "Inventory" => Some(ReportType::Inventory),
            "Finance" => Some(ReportType::Finance),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
