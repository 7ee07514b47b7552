pub mod filter;
pub mod report_entry;

pub use filter::{filter_entries, FilterCriteria, FilterField};
pub use report_entry::ReportEntry;
