use actix_web::{web, App, HttpServer};
use awards_backend::config::db::{DbKind, RuntimeEnv};
use awards_backend::infra::state::build_state;
use awards_backend::middleware::cors::cors_middleware;
use awards_backend::middleware::request_trace::RequestTrace;
use awards_backend::middleware::structured_logger::StructuredLogger;
use awards_backend::routes;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, systemd unit, or an exported shell).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });
    let db_kind = match std::env::var("BACKEND_DB")
        .unwrap_or_else(|_| "sqlite-file".to_string())
        .parse::<DbKind>()
    {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(db_kind)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(host = %host, port, db_kind = ?db_kind, "server.starting");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
