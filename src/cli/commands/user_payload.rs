use std::path::Path;

use anyhow::{Context, Result};
use common::{UserForm, build_user_payload};
use tracing::{debug, info};

/// Build the role-narrowed payload for the form stored at `input`, as pretty
/// JSON.
pub async fn user_payload(input: &Path) -> Result<String> {
    info!("Building user payload from {}", input.display());

    let raw = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read user form from '{}'", input.display()))?;
    let form: UserForm = serde_json::from_str(&raw)
        .with_context(|| format!("'{}' is not a valid user form", input.display()))?;
    debug!("Form for {} with role '{}'", form.email, form.role);

    let payload = build_user_payload(&form);
    serde_json::to_string_pretty(&payload).context("Failed to serialize user payload")
}
