use serde::Serialize;
use uuid::Uuid;

/// Reserved for a future admin login; no route reads or writes users yet.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}
