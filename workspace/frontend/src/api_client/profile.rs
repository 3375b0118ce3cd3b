use common::editor::PROFILE_PICTURE_PART;
use common::{ApiError, ProfileSubmission, UserProfile};
use web_sys::{File, FormData};
use crate::api_client;

const PROFILE_ENDPOINT: &str = "/v1/profiles/me";

/// Get the signed-in user's profile
pub async fn get_my_profile() -> Result<UserProfile, ApiError> {
    log::trace!("Fetching own profile");
    let result: Result<UserProfile, ApiError> = api_client::get(PROFILE_ENDPOINT, &[]).await;
    match &result {
        Ok(profile) => log::info!("Fetched profile for {} ({})", profile.email, profile.role),
        Err(e) => log::error!("Failed to fetch profile: {}", e),
    }
    result
}

fn to_form_data(submission: &ProfileSubmission, picture: Option<&File>) -> Result<FormData, ApiError> {
    let js_error = |e: wasm_bindgen::JsValue| ApiError::Decode(format!("Failed to build form data: {:?}", e));

    let form = FormData::new().map_err(js_error)?;
    for (field, value) in &submission.fields {
        form.append_with_str(field.key(), value).map_err(js_error)?;
    }
    if let Some(file) = picture {
        form.append_with_blob_and_filename(PROFILE_PICTURE_PART, file, &file.name())
            .map_err(js_error)?;
    }
    Ok(form)
}

/// Update the signed-in user's profile with the populated fields and an
/// optional new picture
pub async fn update_my_profile(
    submission: &ProfileSubmission,
    picture: Option<File>,
) -> Result<UserProfile, ApiError> {
    log::debug!(
        "Updating profile: {} field(s), picture: {}",
        submission.fields.len(),
        picture.is_some()
    );
    let form = to_form_data(submission, picture.as_ref())?;
    let result: Result<UserProfile, ApiError> = api_client::put_multipart(PROFILE_ENDPOINT, form).await;
    match &result {
        Ok(profile) => log::info!("Profile updated for {}", profile.email),
        Err(e) => log::error!("Failed to update profile: {}", e),
    }
    result
}
