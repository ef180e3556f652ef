use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::db;

use repositories::sqlx_repo::{SqlxContactMessageRepo, SqlxProjectRepo, SqlxSkillRepo};
use use_cases::{contact::ContactHandler, projects::ProjectHandler, skills::SkillHandler};

pub struct AppState {
    pub project_handler: ProjectHandler,
    pub skill_handler: SkillHandler,
    pub contact_handler: ContactHandler,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        AppState {
            project_handler: ProjectHandler::new(Arc::new(SqlxProjectRepo::new(pool.clone()))),
            skill_handler: SkillHandler::new(Arc::new(SqlxSkillRepo::new(pool.clone()))),
            contact_handler: ContactHandler::new(Arc::new(SqlxContactMessageRepo::new(pool))),
        }
    }
}
