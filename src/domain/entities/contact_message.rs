use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewContactMessage {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    pub subject: Option<String>,

    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> NewContactMessage {
        NewContactMessage {
            name: "Al".into(),
            email: "a@b.com".into(),
            subject: None,
            message: "1234567890".into(),
        }
    }

    #[test]
    fn accepts_minimal_valid_form() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn subject_is_optional() {
        let form = NewContactMessage {
            subject: Some("Hello".into()),
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn collects_every_failing_field() {
        let form = NewContactMessage {
            name: "A".into(),
            email: "not-an-email".into(),
            subject: None,
            message: "short".into(),
        };

        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("message"));
    }

    #[test]
    fn reports_configured_messages() {
        let form = NewContactMessage {
            name: "A".into(),
            email: "a@b.com".into(),
            subject: None,
            message: "1234567890".into(),
        };

        let errors = form.validate().unwrap_err();
        let name_errors = &errors.field_errors()["name"];
        assert_eq!(
            name_errors[0].message.as_deref(),
            Some("Name must be at least 2 characters")
        );
    }
}
