use std::collections::HashMap;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    entities::skill::{NewSkill, NewSkillCategory, Skill, SkillCategory, SkillCategoryWithSkills},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[automock]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_categories_with_skills(&self) -> Result<Vec<SkillCategoryWithSkills>, AppError>;
    async fn create_category(&self, category: &NewSkillCategory) -> Result<SkillCategory, AppError>;
    async fn create_skill(&self, skill: &NewSkill) -> Result<Skill, AppError>;
    async fn count_categories(&self) -> Result<i64, AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    /// Two-query eager load: categories and skills fetched once each and
    /// grouped in process, so the result never needs a follow-up query.
    async fn list_categories_with_skills(&self) -> Result<Vec<SkillCategoryWithSkills>, AppError> {
        let categories = sqlx::query_as::<_, SkillCategory>(
            r#"SELECT id, name, sort_order FROM skill_categories ORDER BY sort_order ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        let skills = sqlx::query_as::<_, Skill>(
            r#"SELECT id, name, percentage, category_id, sort_order FROM skills ORDER BY sort_order ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_category: HashMap<Uuid, Vec<Skill>> = HashMap::new();
        for skill in skills {
            by_category.entry(skill.category_id).or_default().push(skill);
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let skills = by_category.remove(&category.id).unwrap_or_default();
                SkillCategoryWithSkills::new(category, skills)
            })
            .collect())
    }

    async fn create_category(&self, category: &NewSkillCategory) -> Result<SkillCategory, AppError> {
        let created = sqlx::query_as::<_, SkillCategory>(
            r#"
            INSERT INTO skill_categories (name, sort_order)
            VALUES ($1, $2)
            RETURNING id, name, sort_order
            "#,
        )
        .bind(&category.name)
        .bind(category.order)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn create_skill(&self, skill: &NewSkill) -> Result<Skill, AppError> {
        let created = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, percentage, category_id, sort_order)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, percentage, category_id, sort_order
            "#,
        )
        .bind(&skill.name)
        .bind(skill.percentage)
        .bind(skill.category_id)
        .bind(skill.order)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn count_categories(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM skill_categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
