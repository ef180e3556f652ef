use actix_web::web;

use crate::handlers::home::home;
use crate::handlers::system::health_check;

mod api;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .service(health_check)
            .configure(api::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
