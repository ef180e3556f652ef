mod test_utils;

use actix_web::{middleware::NormalizePath, test, web, App};
use serde_json::{json, Value};
use uuid::Uuid;

use portfolio_api::{
    entities::skill::{Skill, SkillCategoryWithSkills},
    errors::AppError,
    repositories::{
        contact_message::MockContactMessageRepository,
        project::MockProjectRepository,
        skill::MockSkillRepository,
    },
    routes::configure_routes,
};
use test_utils::test_state;

fn fixture_categories() -> Vec<SkillCategoryWithSkills> {
    let frontend_id = Uuid::new_v4();
    let backend_id = Uuid::new_v4();

    vec![
        SkillCategoryWithSkills {
            id: frontend_id,
            name: "Frontend Development".into(),
            order: 1,
            skills: vec![
                Skill {
                    id: Uuid::new_v4(),
                    name: "JavaScript / TypeScript".into(),
                    percentage: 95,
                    category_id: frontend_id,
                    order: 1,
                },
                Skill {
                    id: Uuid::new_v4(),
                    name: "React / Vue.js".into(),
                    percentage: 90,
                    category_id: frontend_id,
                    order: 2,
                },
            ],
        },
        SkillCategoryWithSkills {
            id: backend_id,
            name: "Backend Development".into(),
            order: 2,
            skills: vec![Skill {
                id: Uuid::new_v4(),
                name: "Node.js / Express".into(),
                percentage: 92,
                category_id: backend_id,
                order: 1,
            }],
        },
    ]
}

macro_rules! test_app {
    ($skill_repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(
                    MockProjectRepository::new(),
                    $skill_repo,
                    MockContactMessageRepository::new(),
                )))
                .wrap(NormalizePath::trim())
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_rt::test]
async fn lists_categories_with_nested_ordered_skills() {
    let categories = fixture_categories();

    let mut skill_repo = MockSkillRepository::new();
    let categories_clone = categories.clone();
    skill_repo
        .expect_list_categories_with_skills()
        .times(1)
        .returning(move || Ok(categories_clone.clone()));

    let app = test_app!(skill_repo);

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let listed = body.as_array().expect("array body");
    assert_eq!(listed.len(), 2);

    // Categories ascend by order, skills ascend within each category and
    // reference their containing category.
    assert_eq!(listed[0]["order"], 1);
    assert_eq!(listed[1]["order"], 2);

    for category in listed {
        let category_id = category["id"].as_str().unwrap();
        let skills = category["skills"].as_array().expect("nested skills");
        let orders: Vec<i64> = skills.iter().map(|s| s["order"].as_i64().unwrap()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
        assert!(skills.iter().all(|s| s["categoryId"] == category_id));
    }
}

#[actix_rt::test]
async fn category_without_skills_serializes_an_empty_list() {
    let lonely_id = Uuid::new_v4();
    let categories = vec![SkillCategoryWithSkills {
        id: lonely_id,
        name: "Other Skills & Tools".into(),
        order: 3,
        skills: vec![],
    }];

    let mut skill_repo = MockSkillRepository::new();
    skill_repo
        .expect_list_categories_with_skills()
        .returning(move || Ok(categories.clone()));

    let app = test_app!(skill_repo);

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["skills"], json!([]));
}

#[actix_rt::test]
async fn storage_failure_returns_500_with_generic_message() {
    let mut skill_repo = MockSkillRepository::new();
    skill_repo
        .expect_list_categories_with_skills()
        .returning(|| Err(AppError::InternalError("Database error: connection refused".into())));

    let app = test_app!(skill_repo);

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Failed to fetch skills"}));
}
