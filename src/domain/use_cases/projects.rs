use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::project::{NewProject, Project},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler {
    pub project_repo: Arc<dyn ProjectRepository>,
}

impl ProjectHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepository>) -> Self {
        ProjectHandler { project_repo }
    }

    /// All projects, most recently created first.
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    /// The featured subset, same ordering.
    pub async fn list_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_featured_projects().await
    }

    /// Validated insert; used by seeding, not by any public route.
    pub async fn create_project(&self, request: NewProject) -> Result<Project, AppError> {
        request.validate()?;

        self.project_repo.create_project(&request).await
    }

    pub async fn count_projects(&self) -> Result<i64, AppError> {
        self.project_repo.count_projects().await
    }

    pub async fn check_connection(&self) -> Result<(), AppError> {
        self.project_repo.check_connection().await
    }
}
