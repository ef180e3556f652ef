use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub demo_url: String,
    pub github_url: String,
    pub technologies: Vec<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert form for seeding; id and created_at are assigned by the store.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: String,

    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,

    pub image_url: String,
    pub demo_url: String,
    pub github_url: String,
    pub technologies: Vec<String>,

    #[serde(default)]
    pub featured: bool,
}
