use std::sync::Arc;

use portfolio_api::{
    repositories::{
        contact_message::MockContactMessageRepository,
        project::MockProjectRepository,
        skill::MockSkillRepository,
    },
    use_cases::{contact::ContactHandler, projects::ProjectHandler, skills::SkillHandler},
    AppState,
};

/// Assembles an AppState backed entirely by mock repositories, so route
/// tests run without a live database.
#[allow(dead_code)]
pub fn test_state(
    project_repo: MockProjectRepository,
    skill_repo: MockSkillRepository,
    contact_repo: MockContactMessageRepository,
) -> AppState {
    AppState {
        project_handler: ProjectHandler::new(Arc::new(project_repo)),
        skill_handler: SkillHandler::new(Arc::new(skill_repo)),
        contact_handler: ContactHandler::new(Arc::new(contact_repo)),
    }
}
