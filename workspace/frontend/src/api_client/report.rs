use common::{ApiError, ReportRecord};
use crate::api_client;

/// Get the assembled report-card records for a class in a session
pub async fn get_report_cards(class_id: &str, session_id: &str) -> Result<Vec<ReportRecord>, ApiError> {
    log::trace!("Fetching report cards for class {} / session {}", class_id, session_id);
    let result: Result<Vec<ReportRecord>, ApiError> = api_client::get(
        "/v1/reports/report-card-data",
        &[("classId", class_id), ("sessionId", session_id)],
    )
    .await;
    match &result {
        Ok(records) => log::info!("Fetched {} report cards", records.len()),
        Err(e) => log::error!("Failed to fetch report cards for class {}: {}", class_id, e),
    }
    result
}
