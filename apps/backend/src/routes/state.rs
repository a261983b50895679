use actix_web::{web, HttpResponse};

use super::dto::{PhaseResponse, SetPhaseRequest};
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::phase::PhaseService;
use crate::state::app_state::AppState;

async fn get_state(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let phase = PhaseService::new().current(db).await?;
    Ok(HttpResponse::Ok().json(PhaseResponse { phase }))
}

async fn set_phase(
    app_state: web::Data<AppState>,
    body: ValidatedJson<SetPhaseRequest>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let phase = PhaseService::new().set(db, body.into_inner().phase).await?;
    Ok(HttpResponse::Ok().json(PhaseResponse { phase }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(get_state))
        .route("/phase", web::put().to(set_phase));
}
