use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::role::Role;

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid credentials. Please try again.";

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// First validation message, if the request is not fit to send.
    pub fn validation_message(&self) -> Option<String> {
        let errors = self.validate().err()?;
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string());
        Some(message)
    }
}

/// Identity returned by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub branch_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login_request() {
        let req = LoginRequest::new("  ada@school.test ", "pw");
        assert_eq!(req.email, "ada@school.test");
        assert_eq!(req.validation_message(), None);
    }

    #[test]
    fn test_invalid_email() {
        let req = LoginRequest::new("not-an-email", "pw");
        assert_eq!(req.validation_message().as_deref(), Some("Enter a valid email address."));
    }

    #[test]
    fn test_missing_password() {
        let req = LoginRequest::new("ada@school.test", "");
        assert_eq!(req.validation_message().as_deref(), Some("Password is required."));
    }

    #[test]
    fn test_auth_user_from_api() {
        let user: AuthUser = serde_json::from_str(
            r#"{"_id":"u1","name":"Ada","email":"ada@school.test","role":"Branch Admin","branchId":"b1"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::BranchAdmin);
        assert_eq!(user.branch_id.as_deref(), Some("b1"));
    }
}
