mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use awards_backend::adapters::votes_sea::{self, VoteCreate};
use awards_backend::errors::domain::{ConflictKind, DomainError};
use awards_backend::AppError;
use backend_test_support::problem_details::expect_problem;
use common::expect_json;
use serde_json::json;
use support::factory::{cast_vote, get, register, seed_participant};
use support::{build_test_state, create_test_app};

#[actix_web::test]
async fn cast_vote_records_ballot() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;
    let (a, b) = (alice["id"].as_str().unwrap(), bob["id"].as_str().unwrap());

    let body = expect_json(cast_vote(&app, a, b).await, 201).await;
    assert_eq!(body["voterId"], a);
    assert_eq!(body["targetId"], b);
    assert!(body["at"].is_string());

    let check = expect_json(get(&app, &format!("/api/votes/check/{a}")).await, 200).await;
    assert_eq!(check, json!({ "hasVoted": true }));

    let check = expect_json(get(&app, &format!("/api/votes/check/{b}")).await, 200).await;
    assert_eq!(check, json!({ "hasVoted": false }));
    Ok(())
}

#[actix_web::test]
async fn second_vote_is_already_voted() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;
    let carol = register(&app, "carol").await;
    let a = alice["id"].as_str().unwrap();

    expect_json(cast_vote(&app, a, bob["id"].as_str().unwrap()).await, 201).await;
    let resp = cast_vote(&app, a, carol["id"].as_str().unwrap()).await;
    expect_problem(resp, StatusCode::BAD_REQUEST, "ALREADY_VOTED").await;

    // original ballot stands
    let tally = expect_json(get(&app, "/api/votes/tally").await, 200).await;
    let bob_entry = tally
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["id"] == bob["id"])
        .expect("bob in tally");
    assert_eq!(bob_entry["votes"], 1);
    Ok(())
}

#[actix_web::test]
async fn self_vote_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let alice = register(&app, "alice").await;
    let a = alice["id"].as_str().unwrap();

    let resp = cast_vote(&app, a, a).await;
    expect_problem(resp, StatusCode::BAD_REQUEST, "SELF_VOTE").await;

    let check = expect_json(get(&app, &format!("/api/votes/check/{a}")).await, 200).await;
    assert_eq!(check["hasVoted"], false);
    Ok(())
}

#[actix_web::test]
async fn missing_ids_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    for body in [
        json!({}),
        json!({ "voterId": "x" }),
        json!({ "targetId": "x" }),
        json!({ "voterId": "  ", "targetId": "x" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/votes")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        expect_problem(resp, StatusCode::BAD_REQUEST, "VOTE_IDS_REQUIRED").await;
    }
    Ok(())
}

#[actix_web::test]
async fn unknown_participants_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let alice = register(&app, "alice").await;
    let a = alice["id"].as_str().unwrap();

    let resp = cast_vote(&app, a, "no-such-id").await;
    expect_problem(resp, StatusCode::BAD_REQUEST, "INVALID_PARTICIPANT_IDS").await;

    let resp = cast_vote(&app, "ghost", a).await;
    expect_problem(resp, StatusCode::BAD_REQUEST, "INVALID_PARTICIPANT_IDS").await;
    Ok(())
}

#[actix_web::test]
async fn voting_is_allowed_in_any_phase() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;

    // still closed
    expect_json(
        cast_vote(&app, alice["id"].as_str().unwrap(), bob["id"].as_str().unwrap()).await,
        201,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn unknown_voter_check_is_false() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let check = expect_json(get(&app, "/api/votes/check/nobody").await, 200).await;
    assert_eq!(check["hasVoted"], false);
    Ok(())
}

/// The pre-check can lose a race; the primary key still catches the duplicate.
#[actix_web::test]
async fn storage_rejects_duplicate_voter() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("database configured");

    let alice = seed_participant(db, "alice").await?;
    let bob = seed_participant(db, "bob").await?;
    let carol = seed_participant(db, "carol").await?;

    votes_sea::insert_vote(db, VoteCreate::new(&alice.id, &bob.id)).await?;
    let err = votes_sea::insert_vote(db, VoteCreate::new(&alice.id, &carol.id))
        .await
        .expect_err("duplicate voter must fail");

    let domain = DomainError::from(err);
    assert!(matches!(
        domain,
        DomainError::Conflict(ConflictKind::AlreadyVoted, _)
    ));
    assert_eq!(AppError::from(domain).code().as_str(), "ALREADY_VOTED");
    Ok(())
}
