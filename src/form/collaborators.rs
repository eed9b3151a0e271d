use async_trait::async_trait;
use thiserror::Error;

use crate::db::models::project::ProjectDraft;
use crate::error::AppError;

pub const DEFAULT_SUBMIT_ERROR: &str = "Failed to submit project. Please try again.";

/// A rejected save. The message, when present and non-empty, is shown to
/// the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .message.as_deref().filter(|m| !m.is_empty()).unwrap_or(DEFAULT_SUBMIT_ERROR))]
pub struct SaveError {
    message: Option<String>,
}

impl SaveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn without_message() -> Self {
        Self { message: None }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|message| !message.is_empty())
    }
}

/// Only validation and transport failures reach the user; storage and
/// internal errors fall back to the default text.
impl From<AppError> for SaveError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation { message } => SaveError::new(message),
            AppError::Http(err) => SaveError::new(err.to_string()),
            AppError::Database(_)
            | AppError::Connection(_)
            | AppError::Pool(_)
            | AppError::Config(_)
            | AppError::Internal(_) => SaveError::without_message(),
        }
    }
}

/// Persists a submitted project.
#[async_trait]
pub trait ProjectSaver: Send + Sync {
    async fn save(&self, project: &ProjectDraft) -> Result<(), SaveError>;
}

/// Told when the user backs out of the form.
pub trait CloseNotifier {
    fn closed(&mut self);
}

impl<F> CloseNotifier for F
where
    F: FnMut(),
{
    fn closed(&mut self) {
        self()
    }
}
