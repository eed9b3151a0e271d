use async_trait::async_trait;
use tracing::{error, info};

use crate::db::models::project::{NewProject, Project, ProjectDraft};
use crate::db::repositories::ProjectsRepo;
use crate::config::DatabaseConfig;
use crate::db::{DbPool, create_pool};
use crate::error::{AppError, AppResult};
use crate::form::{ProjectSaver, SaveError};
use crate::validation::validate_project;

/// Saves projects straight into the database.
#[derive(Clone)]
pub struct RepoProjectSaver {
    pool: DbPool,
}

impl RepoProjectSaver {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        Ok(Self::new(create_pool(config)?))
    }

    pub async fn create(&self, project: &ProjectDraft) -> AppResult<Project> {
        validate_project(project)?;

        let pool = self.pool.clone();
        let new_project = NewProject::from(project);
        let created = tokio::task::spawn_blocking(move || -> AppResult<Project> {
            let mut conn = pool.get()?;
            Ok(ProjectsRepo::insert(&mut conn, &new_project)?)
        })
        .await
        .map_err(|e| AppError::internal(format!("Project insert task failed: {}", e)))??;

        info!(project_id = %created.id, title = %created.title, "project stored");
        Ok(created)
    }
}

#[async_trait]
impl ProjectSaver for RepoProjectSaver {
    async fn save(&self, project: &ProjectDraft) -> Result<(), SaveError> {
        if let Err(err) = self.create(project).await {
            if !matches!(err, AppError::Validation { .. }) {
                error!(error = %err, "failed to store project");
            }
            return Err(err.into());
        }
        Ok(())
    }
}
