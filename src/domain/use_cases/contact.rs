use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::contact_message::{ContactMessage, NewContactMessage},
    errors::AppError,
    repositories::contact_message::ContactMessageRepository,
};

pub struct ContactHandler {
    pub contact_repo: Arc<dyn ContactMessageRepository>,
}

impl ContactHandler {
    pub fn new(contact_repo: Arc<dyn ContactMessageRepository>) -> Self {
        ContactHandler { contact_repo }
    }

    /// Validates the form and persists it; the store assigns id, created_at
    /// and the unread flag.
    pub async fn create_contact_message(
        &self,
        request: NewContactMessage,
    ) -> Result<ContactMessage, AppError> {
        request.validate()?;

        self.contact_repo.create_contact_message(&request).await
    }

    /// Lists all received messages, newest first. Administrative; not
    /// exposed on any public route.
    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.contact_repo.list_contact_messages().await
    }

    /// Flags a message as read. Unknown ids are ignored.
    pub async fn mark_message_read(&self, id: &Uuid) -> Result<(), AppError> {
        self.contact_repo.mark_message_read(id).await
    }
}
