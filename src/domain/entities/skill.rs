use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: Uuid,
    pub name: String,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub percentage: i32,
    pub category_id: Uuid,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
}

/// Category plus its skills, already ordered. Built by the repository so
/// callers never issue a follow-up query per category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryWithSkills {
    pub id: Uuid,
    pub name: String,
    pub order: i32,
    pub skills: Vec<Skill>,
}

impl SkillCategoryWithSkills {
    pub fn new(category: SkillCategory, skills: Vec<Skill>) -> Self {
        SkillCategoryWithSkills {
            id: category.id,
            name: category.name,
            order: category.order,
            skills,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSkillCategory {
    #[validate(length(min = 2, message = "Category name must be at least 2 characters"))]
    pub name: String,

    pub order: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    #[validate(length(min = 2, message = "Skill name must be at least 2 characters"))]
    pub name: String,

    #[validate(range(min = 0, max = 100, message = "Percentage must be between 0 and 100"))]
    pub percentage: i32,

    pub category_id: Uuid,

    pub order: i32,
}
