use serde::{Deserialize, Serialize};

/// Branch offices the reports are filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "New York")]
    NewYork,
    #[serde(rename = "Los Angeles")]
    LosAngeles,
    Chicago,
}

impl Branch {
    /// String form used in the JSON resource and in filter matching
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::NewYork => "New York",
            Branch::LosAngeles => "Los Angeles",
            Branch::Chicago => "Chicago",
        }
    }

    /// All branches, in display order
    pub fn all() -> Vec<Branch> {
        vec![Branch::NewYork, Branch::LosAngeles, Branch::Chicago]
    }

    /// Parse from the string form
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "New York" => Some(Branch::NewYork),
            "Los Angeles" => Some(Branch::LosAngeles),
            "Chicago" => Some(Branch::Chicago),
            _ => None,
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
