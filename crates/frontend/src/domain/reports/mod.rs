use contracts::domain::ReportEntry;
use rust_xlsxwriter::{Worksheet, XlsxError};

use crate::shared::export::ExcelExportable;

pub mod api;
pub mod ui;

// Column order mirrors the JSON field order of the resource.
impl ExcelExportable for ReportEntry {
    fn headers() -> Vec<&'static str> {
        vec!["id", "date", "reportType", "branch", "checklist"]
    }

    fn write_row(&self, sheet: &mut Worksheet, row: u32) -> Result<(), XlsxError> {
        sheet.write(row, 0, self.id)?;
        sheet.write(row, 1, self.date.as_str())?;
        sheet.write(row, 2, self.report_type.as_str())?;
        sheet.write(row, 3, self.branch.as_str())?;
        sheet.write(row, 4, self.checklist.as_str())?;
        Ok(())
    }
}
