use common::{ApiError, AuthUser, LoginRequest};
use crate::api_client;

/// Sign in with email and password
pub async fn login(request: &LoginRequest) -> Result<AuthUser, ApiError> {
    log::debug!("Logging in as: {}", request.email);
    let result: Result<AuthUser, ApiError> = api_client::post("/v1/auth/login", request).await;
    match &result {
        Ok(user) => log::info!("Logged in: {} ({})", user.email, user.role),
        Err(e) => log::error!("Login failed for '{}': {}", request.email, e),
    }
    result
}
