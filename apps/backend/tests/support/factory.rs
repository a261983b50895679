use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error};
use awards_backend::domain::Participant;
use awards_backend::errors::DomainError;
use awards_backend::repos::participants as participants_repo;
use backend_test_support::unique_helpers::{unique_name, unique_photo_url};
use sea_orm::ConnectionTrait;
use serde_json::{json, Value};

/// Registers a participant straight through the repository.
pub async fn seed_participant<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    prefix: &str,
) -> Result<Participant, DomainError> {
    participants_repo::create_participant(
        conn,
        &unique_name(prefix),
        "",
        &unique_photo_url(prefix),
    )
    .await
}

/// Registers a participant over HTTP and returns the response body.
pub async fn register<S>(app: &S, name: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/participants")
        .set_json(json!({
            "name": name,
            "bio": format!("{name} bio"),
            "photoUrl": format!("https://img.example/{name}.png"),
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "registering {name}");
    test::read_body_json(resp).await
}

pub async fn cast_vote<S>(app: &S, voter_id: &str, target_id: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/votes")
        .set_json(json!({ "voterId": voter_id, "targetId": target_id }))
        .to_request();
    test::call_service(app, req).await
}

pub async fn set_phase<S>(app: &S, phase: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::put()
        .uri("/api/state/phase")
        .set_json(json!({ "phase": phase }))
        .to_request();
    test::call_service(app, req).await
}

pub async fn get<S>(app: &S, uri: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    test::call_service(app, req).await
}
