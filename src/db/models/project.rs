use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::rules::{validate_asset_url, validate_external_url, validate_required};

// Project models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Row to insert. Links that were never given are `None`, not `""`.
#[derive(Insertable, Clone, Debug, PartialEq, Eq)]
#[diesel(table_name = crate::schema::projects)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Vec<String>,
}

/// The editable project record behind the creation form.
///
/// Optional links are plain strings; an empty string means "not given".
/// Serialises with the camelCase keys the persistence API expects.
#[derive(Serialize, Deserialize, Validate, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    #[validate(
        custom(function = "validate_required", message = "Title is required"),
        length(max = 255, message = "Title must be 255 characters or less")
    )]
    pub title: String,

    #[validate(custom(function = "validate_required", message = "Description is required"))]
    pub description: String,

    // 站内路径（以 `/` 开头）只允许用于图片
    #[validate(custom(function = "validate_asset_url", message = "Please enter a valid URL"))]
    pub image_url: String,

    #[validate(custom(function = "validate_external_url", message = "Please enter a valid URL"))]
    pub project_url: String,

    #[validate(custom(function = "validate_external_url", message = "Please enter a valid URL"))]
    pub github_url: String,

    #[validate(length(min = 1, message = "At least one technology is required"))]
    pub technologies: Vec<String>,
}

impl From<&ProjectDraft> for NewProject {
    fn from(draft: &ProjectDraft) -> Self {
        NewProject {
            title: draft.title.clone(),
            description: draft.description.clone(),
            image_url: non_empty(&draft.image_url),
            project_url: non_empty(&draft.project_url),
            github_url: non_empty(&draft.github_url),
            technologies: draft.technologies.clone(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
