use common::ApiError;

/// Lifecycle of a one-shot API fetch driven by user action.
#[derive(Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    /// Settle a finished request. Failures keep the server's `message` when it
    /// sent one, otherwise `fallback`.
    pub fn settle(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => Self::Error(e.user_message(fallback)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}
