use contracts::domain::ReportEntry;
use gloo_net::http::Request;

/// Path of the static dataset bundled with the app
pub const REPORT_DATA_URL: &str = "/mockData.json";

/// Fetch the full report dataset. Issued once at mount.
pub async fn fetch_report_entries() -> Result<Vec<ReportEntry>, String> {
    let response = Request::get(REPORT_DATA_URL)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch report data: {}", response.status()));
    }

    response
        .json::<Vec<ReportEntry>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
