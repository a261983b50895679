//! Assertions for RFC 7807 problem-details responses.
//!
//! The shape is mirrored locally so this crate does not depend on the backend.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's problem-details body.
#[derive(Debug, Deserialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Read a service response and check it is a problem-details error with the
/// expected status and code. Returns the parsed body for further checks.
///
/// Also checks that the `x-trace-id` header matches the body's `trace_id`.
pub async fn expect_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
) -> Problem {
    assert_eq!(resp.status(), expected_status, "unexpected status");

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let header_trace = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-trace-id header should be present");

    let body = actix_web::test::read_body(resp).await;
    let problem: Problem =
        serde_json::from_slice(&body).expect("body should be problem-details JSON");

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert!(!problem.trace_id.is_empty(), "trace_id should not be empty");
    assert_eq!(
        problem.trace_id, header_trace,
        "trace_id in body should match x-trace-id header"
    );

    problem
}
