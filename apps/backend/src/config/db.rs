use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;

/// Which environment the process is running in. Decides database names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Test runs enforce the `_test` suffix on Postgres database names
    Test,
}

/// Storage engine selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// Fresh database per pool; contents vanish when the pool drops
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite" | "sqlite-file" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "unknown database kind '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

/// Per-connection session settings applied from the pool's after_connect hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbSettings {
    Sqlite {
        busy_timeout_ms: u32,
    },
    Postgres {
        app_name: String,
        statement_timeout: String,
    },
}

/// Pool sizing plus session settings for one engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub pool_min: u32,
    pub pool_max: u32,
    pub acquire_timeout_ms: u64,
    pub db_settings: DbSettings,
}

impl ConnectionSettings {
    pub fn for_kind(db_kind: DbKind) -> Self {
        match db_kind {
            DbKind::Postgres => Self {
                pool_min: 1,
                pool_max: 10,
                acquire_timeout_ms: 5_000,
                db_settings: DbSettings::Postgres {
                    app_name: "awards-backend".to_string(),
                    statement_timeout: "10s".to_string(),
                },
            },
            DbKind::SqliteFile => Self {
                pool_min: 1,
                pool_max: 5,
                acquire_timeout_ms: 5_000,
                db_settings: DbSettings::Sqlite {
                    busy_timeout_ms: 5_000,
                },
            },
            // One connection only: every extra connection would open its own empty database.
            DbKind::SqliteMemory => Self {
                pool_min: 1,
                pool_max: 1,
                acquire_timeout_ms: 5_000,
                db_settings: DbSettings::Sqlite {
                    busy_timeout_ms: 5_000,
                },
            },
        }
    }
}

/// Checks the variables a given env/kind pair needs before any connection is attempted.
pub fn validate_db_config(env: RuntimeEnv, db_kind: DbKind) -> Result<(), AppError> {
    match db_kind {
        DbKind::Postgres => {
            db_name(env)?;
            credentials()?;
            Ok(())
        }
        DbKind::SqliteFile | DbKind::SqliteMemory => Ok(()),
    }
}

/// Connection string for the given env/kind pair.
pub fn make_conn_spec(env: RuntimeEnv, db_kind: DbKind) -> Result<String, AppError> {
    match db_kind {
        DbKind::Postgres => postgres_url(env),
        DbKind::SqliteFile => {
            let path = sqlite_file_path(env);
            Ok(format!("sqlite://{}?mode=rwc", path.display()))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Builds a Postgres URL from POSTGRES_HOST/PORT, the env's database name and app credentials
pub fn postgres_url(env: RuntimeEnv) -> Result<String, AppError> {
    let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
    let db_name = db_name(env)?;
    let (username, password) = credentials()?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

/// Location of the SQLite file: `$SQLITE_DB_DIR/awards.db` (or `awards_test.db` under test).
pub fn sqlite_file_path(env: RuntimeEnv) -> PathBuf {
    let dir = env::var("SQLITE_DB_DIR").unwrap_or_else(|_| "data".to_string());
    let file = match env {
        RuntimeEnv::Prod => "awards.db",
        RuntimeEnv::Test => "awards_test.db",
    };
    PathBuf::from(dir).join(file)
}

fn db_name(env: RuntimeEnv) -> Result<String, AppError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn credentials() -> Result<(String, String), AppError> {
    let username = must_var("APP_DB_USER")?;
    let password = must_var("APP_DB_PASSWORD")?;
    Ok((username, password))
}

fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
