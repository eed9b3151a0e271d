use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::db::models::project::ProjectDraft;
use crate::error::{AppError, AppResult};
use crate::form::{ProjectSaver, SaveError};

const PROJECTS_PATH: &str = "api/projects";

/// Saves projects by posting them to the persistence API.
#[derive(Clone, Debug)]
pub struct HttpProjectSaver {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpProjectSaver {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("Invalid API base URL: {}", e)))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(PROJECTS_PATH)
            .map_err(|e| AppError::Config(format!("Invalid API base URL: {}", e)))?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &ApiConfig) -> AppResult<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ProjectSaver for HttpProjectSaver {
    async fn save(&self, project: &ProjectDraft) -> Result<(), SaveError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(project)
            .send()
            .await
            .map_err(AppError::from)?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "persistence API accepted project");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "persistence API rejected project");
        Err(match error_message(&body) {
            Some(message) => SaveError::new(message),
            None => SaveError::without_message(),
        })
    }
}

/// Pulls a user-facing message out of an API error body.
///
/// Accepts `{"error": "..."}`, `{"error": {"message": "..."}}` and
/// `{"message": "..."}`.
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = match &value["error"] {
        Value::String(message) => Some(message.as_str()),
        Value::Object(error) => error.get("message").and_then(Value::as_str),
        _ => None,
    }
    .or_else(|| value["message"].as_str())?;

    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}
