//! Profile page state: the last-confirmed display copy, the editable draft,
//! and the transitions driven by fetch/save outcomes and user input.

use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::profile::{ProfileField, UserProfile};
use crate::role::Role;

pub const FETCH_FAILED_MESSAGE: &str = "Could not load your profile. Please try again later.";
pub const SAVE_SUCCESS_MESSAGE: &str = "Profile updated successfully.";
pub const SAVE_FAILED_FALLBACK: &str = "Failed to update profile. Please try again.";

/// Multipart part name for the optional picture upload.
pub const PROFILE_PICTURE_PART: &str = "profilePicture";

/// In-progress, user-edited copy of a profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    values: BTreeMap<ProfileField, String>,
}

impl ProfileDraft {
    pub fn from_profile(profile: &UserProfile) -> Self {
        let values = ProfileField::visible_for(&profile.role)
            .into_iter()
            .filter_map(|field| profile.value(field).map(|value| (field, value)))
            .collect();
        Self { values }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }
}

/// Fields to send on save, already filtered and trimmed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSubmission {
    pub fields: Vec<(ProfileField, String)>,
}

impl ProfileSubmission {
    /// Collect every field with a non-blank value: identity fields, the
    /// identifier owned by `role`, then the fixed detail fields. Identifier
    /// fields belonging to other roles are never sent.
    pub fn build(role: &Role, draft: &ProfileDraft) -> Self {
        let fields = ProfileField::visible_for(role)
            .into_iter()
            .filter_map(|field| {
                let value = draft.get(field).trim();
                (!value.is_empty()).then(|| (field, value.to_string()))
            })
            .collect::<Vec<_>>();

        tracing::debug!(role = %role, field_count = fields.len(), "built profile submission");
        Self { fields }
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
    FetchStarted,
    FetchSucceeded(UserProfile),
    FetchFailed(ApiError),
    ToggleEdit,
    FieldChanged(ProfileField, String),
    SaveStarted,
    SaveSucceeded,
    SaveFailed(ApiError),
    DismissNotice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileEditorState {
    /// Last profile confirmed by the server.
    pub profile: Option<UserProfile>,
    pub draft: ProfileDraft,
    pub editing: bool,
    pub loading: bool,
    pub saving: bool,
    pub load_error: Option<String>,
    pub save_error: Option<String>,
    pub notice: Option<String>,
    /// Bumped after every successful save; observers re-fetch on change.
    pub refresh: u32,
}

impl Default for ProfileEditorState {
    fn default() -> Self {
        Self {
            profile: None,
            draft: ProfileDraft::default(),
            editing: false,
            loading: true,
            saving: false,
            load_error: None,
            save_error: None,
            notice: None,
            refresh: 0,
        }
    }
}

impl ProfileEditorState {
    pub fn apply(mut self, action: ProfileAction) -> Self {
        tracing::trace!(?action, "profile editor action");
        match action {
            ProfileAction::FetchStarted => {
                self.loading = true;
            }
            ProfileAction::FetchSucceeded(profile) => {
                self.draft = ProfileDraft::from_profile(&profile);
                self.profile = Some(profile);
                self.loading = false;
                self.load_error = None;
            }
            ProfileAction::FetchFailed(error) => {
                tracing::warn!(%error, "profile fetch failed");
                self.loading = false;
                self.load_error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
            ProfileAction::ToggleEdit => {
                self.editing = !self.editing;
                self.save_error = None;
            }
            ProfileAction::FieldChanged(field, value) => {
                self.draft.set(field, value);
            }
            ProfileAction::SaveStarted => {
                self.saving = true;
                self.save_error = None;
            }
            ProfileAction::SaveSucceeded => {
                self.saving = false;
                self.editing = false;
                self.notice = Some(SAVE_SUCCESS_MESSAGE.to_string());
                self.refresh = self.refresh.wrapping_add(1);
            }
            ProfileAction::SaveFailed(error) => {
                tracing::warn!(%error, "profile save failed");
                self.saving = false;
                self.save_error = Some(error.user_message(SAVE_FAILED_FALLBACK));
            }
            ProfileAction::DismissNotice => {
                self.notice = None;
            }
        }
        self
    }

    /// A re-fetch is running while an earlier profile is still on screen.
    pub fn refreshing(&self) -> bool {
        self.loading && self.profile.is_some()
    }

    /// Caption for the edit-mode toggle. Closing the form keeps the draft.
    pub fn toggle_label(&self) -> &'static str {
        if self.editing { "Close" } else { "Edit Profile" }
    }

    /// Fields to render, empty until a profile has been loaded.
    pub fn visible_fields(&self) -> Vec<ProfileField> {
        self.profile
            .as_ref()
            .map(|profile| ProfileField::visible_for(&profile.role))
            .unwrap_or_default()
    }

    /// Submission for the current draft, or `None` before the first load.
    pub fn submission(&self) -> Option<ProfileSubmission> {
        self.profile
            .as_ref()
            .map(|profile| ProfileSubmission::build(&profile.role, &self.draft))
    }
}
