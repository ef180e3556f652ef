mod test_utils;

use actix_web::{middleware::NormalizePath, test, web, App};
use serde_json::Value;

use portfolio_api::{
    errors::AppError,
    repositories::{
        contact_message::MockContactMessageRepository,
        project::MockProjectRepository,
        skill::MockSkillRepository,
    },
    routes::configure_routes,
};
use test_utils::test_state;

macro_rules! test_app {
    ($project_repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(
                    $project_repo,
                    MockSkillRepository::new(),
                    MockContactMessageRepository::new(),
                )))
                .wrap(NormalizePath::trim())
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_rt::test]
async fn home_returns_service_banner() {
    let app = test_app!(MockProjectRepository::new());

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "Ok");
    assert!(body["version"].as_str().is_some());
}

#[actix_rt::test]
async fn health_reports_database_ok() {
    let mut project_repo = MockProjectRepository::new();
    project_repo.expect_check_connection().returning(|| Ok(()));

    let app = test_app!(project_repo);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "OK");
    assert!(body["uptime"].as_str().is_some());
}

#[actix_rt::test]
async fn health_reports_unreachable_database() {
    let mut project_repo = MockProjectRepository::new();
    project_repo
        .expect_check_connection()
        .returning(|| Err(AppError::InternalError("Database error: connection refused".into())));

    let app = test_app!(project_repo);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["database"], "Unavailable");
}
