use actix_web::{web, HttpResponse};

use super::dto::{ParticipantResponse, RegisterParticipantRequest};
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::participants::{ParticipantService, Registration};
use crate::state::app_state::AppState;

async fn list_participants(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let participants: Vec<ParticipantResponse> = ParticipantService::new()
        .list(db)
        .await?
        .into_iter()
        .map(ParticipantResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(participants))
}

async fn register_participant(
    app_state: web::Data<AppState>,
    body: ValidatedJson<RegisterParticipantRequest>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let RegisterParticipantRequest {
        name,
        bio,
        photo_url,
    } = body.into_inner();

    let participant = ParticipantService::new()
        .register(
            db,
            Registration {
                name,
                bio,
                photo_url,
            },
        )
        .await?;

    Ok(HttpResponse::Created().json(ParticipantResponse::from(participant)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_participants))
            .route(web::post().to(register_participant)),
    );
}
