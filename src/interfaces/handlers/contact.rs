use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};

use crate::{
    entities::contact_message::NewContactMessage,
    errors::AppError,
    handlers::json_error::json_error,
    AppState,
};

#[post("/contact")]
pub async fn submit_contact_message(
    state: web::Data<AppState>,
    form: web::Json<NewContactMessage>,
) -> impl Responder {
    match state.contact_handler.create_contact_message(form.into_inner()).await {
        // The persisted record is deliberately not echoed back
        Ok(_) => HttpResponse::Created().json(serde_json::json!({
            "success": true,
            "message": "Message sent successfully"
        })),
        Err(e @ AppError::ValidationError(_)) => e.to_http_response(),
        Err(e) => {
            tracing::error!("Error saving contact message: {}", e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send message")
        }
    }
}
