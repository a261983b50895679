use actix_web::{web, HttpResponse};

use super::dto::{
    AllVotedResponse, CastVoteRequest, HasVotedResponse, TallyEntryResponse, VoteResponse,
};
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::votes::VoteService;
use crate::state::app_state::AppState;

async fn cast_vote(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CastVoteRequest>,
) -> Result<HttpResponse, AppError> {
    let CastVoteRequest {
        voter_id,
        target_id,
    } = body.into_inner();

    let vote = VoteService::new()
        .cast(&app_state, voter_id, target_id)
        .await?;
    Ok(HttpResponse::Created().json(VoteResponse::from(vote)))
}

async fn check_voted(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let has_voted = VoteService::new().has_voted(db, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(HasVotedResponse { has_voted }))
}

async fn tally(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let entries: Vec<TallyEntryResponse> = VoteService::new()
        .tally(db)
        .await?
        .into_iter()
        .map(TallyEntryResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(entries))
}

async fn winner(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let entry = VoteService::new().winner(db).await?;
    Ok(HttpResponse::Ok().json(TallyEntryResponse::from(entry)))
}

async fn all_voted(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let all_voted = VoteService::new().all_voted(db).await?;
    Ok(HttpResponse::Ok().json(AllVotedResponse { all_voted }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(cast_vote)))
        .route("/check/{voter_id}", web::get().to(check_voted))
        .route("/tally", web::get().to(tally))
        .route("/winner", web::get().to(winner))
        .route("/all-voted", web::get().to(all_voted));
}
