use serde::{Deserialize, Serialize};

use crate::enums::{Branch, ChecklistStatus, ReportType};

/// One row of the report dataset.
///
/// `date` stays a string: the resource uses fixed-width `YYYY-MM-DD`, so range
/// checks are plain lexicographic comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub id: i64,
    pub date: String,
    pub report_type: ReportType,
    pub branch: Branch,
    pub checklist: ChecklistStatus,
}
