use actix_web::web;

use crate::handlers::{contact, projects, skills};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(projects::list_featured_projects)
        .service(projects::list_projects)
        .service(skills::list_skills)
        .service(contact::submit_contact_message);
}
