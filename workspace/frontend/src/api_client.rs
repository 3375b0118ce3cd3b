pub mod auth;
pub mod profile;
pub mod report;

use common::{ApiError, ErrorBody};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use web_sys::{FormData, RequestCredentials};
use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Session cookies ride along on every call.
fn with_session(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

/// Turn a response into `T`, or into an [`ApiError`] carrying the server's
/// `message` for non-OK statuses.
async fn read_response<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.ok() {
        let status = response.status();
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
        let body: Option<ErrorBody> = response.json().await.ok();
        let err = ApiError::from_error_body(status, body);
        log::error!("{} {} - {:?}", method, endpoint, err);
        return Err(err);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        let err = ApiError::Decode(e.to_string());
        log::error!("{} {} - {}", method, endpoint, err);
        err
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(data)
}

fn network_error(method: &str, endpoint: &str, e: gloo_net::Error) -> ApiError {
    let err = ApiError::Network(e.to_string());
    log::error!("{} {} - {}", method, endpoint, err);
    err
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str, query: &[(&str, &str)]) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = with_session(Request::get(&url))
        .query(query.iter().copied())
        .send()
        .await
        .map_err(|e| network_error("GET", endpoint, e))?;

    read_response("GET", endpoint, response).await
}

/// Common POST request handler with a JSON body
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = with_session(Request::post(&url))
        .json(body)
        .map_err(|e| {
            let err = ApiError::Decode(format!("Failed to serialize request: {}", e));
            log::error!("POST {} - {}", endpoint, err);
            err
        })?
        .send()
        .await
        .map_err(|e| network_error("POST", endpoint, e))?;

    read_response("POST", endpoint, response).await
}

/// PUT with a multipart form body. The browser sets the boundary header.
pub async fn put_multipart<T>(endpoint: &str, form: FormData) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("PUT (multipart) request to: {}", url);

    let response = with_session(Request::put(&url))
        .body(form)
        .map_err(|e| {
            let err = ApiError::Decode(format!("Failed to build request: {}", e));
            log::error!("PUT {} - {}", endpoint, err);
            err
        })?
        .send()
        .await
        .map_err(|e| network_error("PUT", endpoint, e))?;

    read_response("PUT", endpoint, response).await
}
