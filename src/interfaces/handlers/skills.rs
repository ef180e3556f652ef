use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};

use crate::{handlers::json_error::json_error, AppState};

#[get("/skills")]
pub async fn list_skills(state: web::Data<AppState>) -> impl Responder {
    match state.skill_handler.list_skill_categories().await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(e) => {
            tracing::error!("Error fetching skills: {}", e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch skills")
        }
    }
}
