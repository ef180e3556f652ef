use async_trait::async_trait;
use mockall::automock;

use crate::{
    entities::project::{NewProject, Project},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[automock]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn list_featured_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError>;
    async fn count_projects(&self) -> Result<i64, AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, image_url, demo_url, github_url,
                   technologies, featured, created_at
            FROM projects
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn list_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, image_url, demo_url, github_url,
                   technologies, featured, created_at
            FROM projects
            WHERE featured = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (title, description, image_url, demo_url, github_url, technologies, featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, image_url, demo_url, github_url,
                      technologies, featured, created_at
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.demo_url)
        .bind(&project.github_url)
        .bind(&project.technologies)
        .bind(project.featured)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn count_projects(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
