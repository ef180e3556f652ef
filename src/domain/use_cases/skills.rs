use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::skill::{NewSkill, NewSkillCategory, Skill, SkillCategory, SkillCategoryWithSkills},
    errors::AppError,
    repositories::skill::SkillRepository,
};

pub struct SkillHandler {
    pub skill_repo: Arc<dyn SkillRepository>,
}

impl SkillHandler {
    pub fn new(skill_repo: Arc<dyn SkillRepository>) -> Self {
        SkillHandler { skill_repo }
    }

    /// Categories in display order, each carrying its skills already ordered.
    pub async fn list_skill_categories(&self) -> Result<Vec<SkillCategoryWithSkills>, AppError> {
        self.skill_repo.list_categories_with_skills().await
    }

    /// Validated insert; used by seeding, not by any public route.
    pub async fn create_category(&self, request: NewSkillCategory) -> Result<SkillCategory, AppError> {
        request.validate()?;

        self.skill_repo.create_category(&request).await
    }

    /// Validated insert; the store enforces that category_id exists.
    pub async fn create_skill(&self, request: NewSkill) -> Result<Skill, AppError> {
        request.validate()?;

        self.skill_repo.create_skill(&request).await
    }

    pub async fn count_categories(&self) -> Result<i64, AppError> {
        self.skill_repo.count_categories().await
    }
}
