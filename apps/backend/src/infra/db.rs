//! Pool construction and startup bootstrap.

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{DatabaseConnection, SqlxPostgresConnector, SqlxSqliteConnector};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::{info, trace, warn};

use crate::config::db::{
    make_conn_spec, sqlite_file_path, validate_db_config, ConnectionSettings, DbKind, DbSettings,
    RuntimeEnv,
};
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::repos::phase;

const PG_CONNECT_ATTEMPTS: u32 = 5;
const PG_CONNECT_INTERVAL_MS: u64 = 500;

fn engine(db_kind: DbKind) -> &'static str {
    match db_kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Retry with a fixed interval; returns the last error once attempts run out.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt < max_attempts => {
                warn!(
                    attempt,
                    max_attempts,
                    interval_ms,
                    error = %e,
                    "connection_retry=failed"
                );
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Session statements run on every new pooled connection.
fn session_statements(settings: &DbSettings) -> Vec<String> {
    match settings {
        DbSettings::Sqlite { busy_timeout_ms } => vec![
            "PRAGMA foreign_keys = ON;".to_string(),
            format!("PRAGMA busy_timeout = {busy_timeout_ms};"),
        ],
        DbSettings::Postgres {
            app_name,
            statement_timeout,
        } => vec![
            format!("SET application_name = '{}';", app_name.replace('\'', "''")),
            "SET timezone = 'UTC';".to_string(),
            format!("SET statement_timeout = '{statement_timeout}';"),
        ],
    }
}

async fn build_sqlite_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
    cfg: &ConnectionSettings,
) -> Result<DatabaseConnection, AppError> {
    let url = make_conn_spec(env, db_kind)?;

    let mut connect_opts = SqliteConnectOptions::from_str(&url)
        .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
        .foreign_keys(true);

    if db_kind == DbKind::SqliteFile {
        let path = sqlite_file_path(env);
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| {
                AppError::config(format!(
                    "cannot create SQLite directory {}: {e}",
                    dir.display()
                ))
            })?;
        }
        connect_opts = connect_opts
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);
    }

    let statements = session_statements(&cfg.db_settings);
    let mut pool_opts = SqlitePoolOptions::new()
        .min_connections(cfg.pool_min)
        .max_connections(cfg.pool_max)
        .acquire_timeout(Duration::from_millis(cfg.acquire_timeout_ms));

    // An in-memory database lives exactly as long as its connection.
    if db_kind == DbKind::SqliteMemory {
        pool_opts = pool_opts.idle_timeout(None).max_lifetime(None);
    }

    let pool = pool_opts
        .after_connect(move |conn, _meta| {
            let statements = statements.clone();
            Box::pin(async move {
                for stmt in &statements {
                    sqlx::query(stmt).execute(&mut *conn).await?;
                }
                trace!("db=sqlite hook=after_connect ok");
                Ok::<_, sqlx::Error>(())
            })
        })
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::config(format!("failed to create SQLite pool: {e}")))?;

    info!(
        engine = "sqlite",
        url = %url,
        min = cfg.pool_min,
        max = cfg.pool_max,
        "pool=create"
    );
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

async fn build_postgres_pool(
    env: RuntimeEnv,
    cfg: &ConnectionSettings,
) -> Result<DatabaseConnection, AppError> {
    let url = make_conn_spec(env, DbKind::Postgres)?;

    let pool = retry_connection(
        || {
            let url = url.clone();
            let statements = session_statements(&cfg.db_settings);
            async move {
                PgPoolOptions::new()
                    .min_connections(cfg.pool_min)
                    .max_connections(cfg.pool_max)
                    .acquire_timeout(Duration::from_millis(cfg.acquire_timeout_ms))
                    .idle_timeout(Duration::from_secs(30))
                    .after_connect(move |conn, _meta| {
                        let statements = statements.clone();
                        Box::pin(async move {
                            for stmt in &statements {
                                sqlx::query(stmt).execute(&mut *conn).await?;
                            }
                            Ok::<_, sqlx::Error>(())
                        })
                    })
                    .connect(&url)
                    .await
                    .map_err(|e| {
                        AppError::config(format!("failed to connect to Postgres: {e}"))
                    })
            }
        },
        PG_CONNECT_ATTEMPTS,
        PG_CONNECT_INTERVAL_MS,
    )
    .await?;

    info!(
        engine = "postgresql",
        url = %Redacted(&url),
        min = cfg.pool_min,
        max = cfg.pool_max,
        "pool=create"
    );
    Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
}

pub async fn build_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, AppError> {
    let cfg = ConnectionSettings::for_kind(db_kind);
    match db_kind {
        DbKind::Postgres => build_postgres_pool(env, &cfg).await,
        DbKind::SqliteFile | DbKind::SqliteMemory => build_sqlite_pool(env, db_kind, &cfg).await,
    }
}

/// Build the pool *and* guarantee the schema and seed row are in place.
///
/// Safe to run on every start: migrations skip what is applied and the
/// phase row is only inserted when absent.
pub async fn bootstrap_db(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, AppError> {
    validate_db_config(env, db_kind)?;

    info!(
        env = ?env,
        db_kind = ?db_kind,
        engine = engine(db_kind),
        pid = std::process::id(),
        "bootstrap=start"
    );

    let conn = build_pool(env, db_kind).await?;

    migration::migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))?;

    let seeded = phase::ensure_phase(&conn).await?;

    info!(phase_seeded = seeded, "bootstrap=ready");
    Ok(conn)
}
