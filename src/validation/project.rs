use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::db::models::project::ProjectDraft;
use crate::error::AppError;

/// Keys of the form's error map. `Submit` carries save failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    Description,
    ImageUrl,
    ProjectUrl,
    GithubUrl,
    Technologies,
    Submit,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Title,
        Field::Description,
        Field::ImageUrl,
        Field::ProjectUrl,
        Field::GithubUrl,
        Field::Technologies,
        Field::Submit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::ImageUrl => "imageUrl",
            Field::ProjectUrl => "projectUrl",
            Field::GithubUrl => "githubUrl",
            Field::Technologies => "technologies",
            Field::Submit => "submit",
        }
    }

    fn rust_name(self) -> &'static str {
        match self {
            Field::ImageUrl => "image_url",
            Field::ProjectUrl => "project_url",
            Field::GithubUrl => "github_url",
            other => other.as_str(),
        }
    }

    /// Accepts the wire name (`imageUrl`) or the struct field name
    /// (`image_url`) that `#[derive(Validate)]` reports.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == name || field.rust_name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message per field, in declaration order of [`Field`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn first_message(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (name, field_errors) in errors.field_errors() {
            let name = name.to_string();
            let Some(field) = Field::from_name(&name) else {
                continue;
            };
            let message = field_errors
                .first()
                .and_then(|error| error.message.as_ref())
                .map(|message| message.to_string())
                .unwrap_or_else(|| format!("Validation failed for field: {}", name));
            out.insert(field, message);
        }
        out
    }
}

/// Per-field errors for a draft; empty when the draft is valid.
pub fn draft_errors(draft: &ProjectDraft) -> FieldErrors {
    match draft.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => FieldErrors::from(&errors),
    }
}

pub fn validate_project(draft: &ProjectDraft) -> Result<(), AppError> {
    let errors = draft_errors(draft);
    match errors.first_message() {
        Some(message) => Err(AppError::validation(message)),
        None => Ok(()),
    }
}
