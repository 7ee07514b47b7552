/// Shared helpers for exporting table data to an Excel workbook
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Trait for types that can be written into a worksheet row by row
pub trait ExcelExportable {
    /// Column headers, in worksheet column order
    fn headers() -> Vec<&'static str>;

    /// Writes this item's cells into `sheet` at `row`
    fn write_row(&self, sheet: &mut Worksheet, row: u32) -> Result<(), XlsxError>;
}

/// Serializes `data` into a single-sheet workbook named "Data".
///
/// An empty slice still yields a valid workbook containing only the header
/// row. Does not touch the DOM, so it is unit-testable on the host.
pub fn build_workbook<T: ExcelExportable>(data: &[T]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("Data")
        .map_err(|e| format!("Failed to name sheet: {}", e))?;

    for (col, header) in T::headers().into_iter().enumerate() {
        sheet
            .write(0, col as u16, header)
            .map_err(|e| format!("Failed to write header: {}", e))?;
    }

    for (i, item) in data.iter().enumerate() {
        item.write_row(sheet, (i + 1) as u32)
            .map_err(|e| format!("Failed to write row {}: {}", i + 1, e))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Failed to serialize workbook: {}", e))
}

/// Exports `data` to an Excel file and initiates the download
pub fn export_to_excel<T: ExcelExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let bytes = build_workbook(data)?;
    let blob = create_xlsx_blob(&bytes)?;
    download_blob(&blob, filename)
}

/// Creates a Blob object with the workbook bytes
fn create_xlsx_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(XLSX_MIME_TYPE);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Initiates the browser download of a Blob through a transient anchor
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
