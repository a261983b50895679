mod common;
mod support;

use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use awards_backend::{AppError, AppState};
use backend_test_support::problem_details::expect_problem;
use support::factory::get;
use support::{build_test_state, create_test_app};

#[actix_web::test]
async fn unknown_route_is_problem_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = get(&app, "/api/does-not-exist").await;
    let problem = expect_problem(resp, StatusCode::NOT_FOUND, "NOT_FOUND").await;
    assert!(problem.detail.contains("/api/does-not-exist"));
    assert_eq!(problem.type_, "https://awards.local/errors/NOT_FOUND");
    assert_eq!(problem.title, "Not Found");
    Ok(())
}

#[actix_web::test]
async fn malformed_json_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/participants")
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    expect_problem(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
    Ok(())
}

#[actix_web::test]
async fn wrong_field_type_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/votes")
        .set_json(serde_json::json!({ "voterId": 7, "targetId": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    expect_problem(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
    Ok(())
}

#[actix_web::test]
async fn success_responses_carry_trace_header() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = get(&app, "/api/state").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let trace = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(!trace.is_empty());
    Ok(())
}

async fn boom() -> Result<HttpResponse, AppError> {
    Err(AppError::internal(
        "connection string postgres://user:secret@db/awards leaked",
    ))
}

#[actix_web::test]
async fn server_errors_hide_internal_detail() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(AppState::new_without_db())
        .with_routes(|cfg| {
            cfg.route("/boom", web::get().to(boom));
        })
        .build()
        .await;

    let resp = get(&app, "/boom").await;
    let problem =
        expect_problem(resp, StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL").await;
    assert_eq!(problem.detail, "Internal server error");
    assert!(!problem.detail.contains("secret"));
    Ok(())
}

#[actix_web::test]
async fn missing_database_is_service_unavailable() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await;

    let resp = get(&app, "/api/participants").await;
    expect_problem(resp, StatusCode::SERVICE_UNAVAILABLE, "DB_UNAVAILABLE").await;
    Ok(())
}
