use std::path::Path;

use anyhow::{Context, Result};
use common::ReportRecord;
use tracing::{debug, info, trace, warn};

use crate::render::render_records;

/// Read report-card records from `input` and write the printable document to
/// `output`. Returns the number of pages written.
pub async fn render_reports(input: &Path, output: &Path, app_name: &str) -> Result<usize> {
    trace!("Entering render_reports function");
    info!("Rendering report cards from {}", input.display());

    let raw = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read report records from '{}'", input.display()))?;
    let records: Vec<ReportRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("'{}' is not a JSON array of report-card records", input.display()))?;
    debug!("Parsed {} record(s)", records.len());

    if records.is_empty() {
        warn!("No report-card records in {}; the document will have no pages", input.display());
    }

    let html = render_records(app_name, &records)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    tokio::fs::write(output, html)
        .await
        .with_context(|| format!("Failed to write document to '{}'", output.display()))?;

    info!("Wrote {} report card page(s) to {}", records.len(), output.display());
    Ok(records.len())
}
