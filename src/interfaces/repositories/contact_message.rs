use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    entities::contact_message::{ContactMessage, NewContactMessage},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactMessageRepo,
};

#[automock]
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<ContactMessage, AppError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
    async fn mark_message_read(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxContactMessageRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxContactMessageRepo { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for SqlxContactMessageRepo {
    async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<ContactMessage, AppError> {
        let created = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, subject, message, created_at, read
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, subject, message, created_at, read
            FROM contact_messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Marking an unknown id is a silent no-op, not an error.
    async fn mark_message_read(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query(r#"UPDATE contact_messages SET read = TRUE WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
