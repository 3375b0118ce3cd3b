//! Domain types shared by the browser front-end and the `schoolhub` CLI.
//! Everything here is target-independent so it can be unit-tested natively
//! and compiled to WASM unchanged.

pub mod auth;
pub mod editor;
pub mod error;
pub mod payload;
pub mod profile;
pub mod report;
pub mod role;
mod wire;

pub use auth::{AuthUser, LoginRequest};
pub use editor::{ProfileAction, ProfileDraft, ProfileEditorState, ProfileSubmission};
pub use error::{ApiError, ErrorBody};
pub use payload::{UserForm, UserPayload, build_user_payload};
pub use profile::{ProfileDetails, ProfileField, UserProfile};
pub use report::{ReportDocument, ReportPage, ReportRecord};
pub use role::Role;

/// Application display name used when no build-time `APP_NAME` is set.
pub const DEFAULT_APP_NAME: &str = "Multi School Management System";
