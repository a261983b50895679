use actix_web::{web, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod dto;
pub mod health;
pub mod participants;
pub mod state;
pub mod votes;

/// Registers every route. Shared by `main.rs` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Phase: /api/state/**
    cfg.service(web::scope("/api/state").configure(state::configure_routes));

    // Roster: /api/participants
    cfg.service(web::scope("/api/participants").configure(participants::configure_routes));

    // Ballots and results: /api/votes/**
    cfg.service(web::scope("/api/votes").configure(votes::configure_routes));
}

/// Fallback for unmatched routes.
pub async fn not_found(req: HttpRequest) -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}
