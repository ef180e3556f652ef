use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};

use crate::{handlers::json_error::json_error, AppState};

#[get("/projects")]
pub async fn list_projects(state: web::Data<AppState>) -> impl Responder {
    match state.project_handler.list_projects().await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => {
            tracing::error!("Error fetching projects: {}", e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch projects")
        }
    }
}

#[get("/projects/featured")]
pub async fn list_featured_projects(state: web::Data<AppState>) -> impl Responder {
    match state.project_handler.list_featured_projects().await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => {
            tracing::error!("Error fetching featured projects: {}", e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch featured projects")
        }
    }
}
