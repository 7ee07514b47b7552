pub mod branch;
pub mod checklist_status;
pub mod report_type;

pub use branch::Branch;
pub use checklist_status::ChecklistStatus;
pub use report_type::ReportType;
