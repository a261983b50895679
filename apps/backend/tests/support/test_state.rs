use std::env;
use std::env::VarError;
use std::str::FromStr;

use awards_backend::config::db::{DbKind, RuntimeEnv};
use awards_backend::infra::state::{build_state, StateBuilder};
use awards_backend::state::app_state::AppState;
use awards_backend::AppError;

/// `AWARDS_TEST_DB_KIND` picks the engine; in-memory SQLite when unset.
pub fn resolve_test_db_kind() -> Result<DbKind, AppError> {
    match env::var("AWARDS_TEST_DB_KIND") {
        Ok(raw) => DbKind::from_str(&raw),
        Err(VarError::NotPresent) => Ok(DbKind::SqliteMemory),
        Err(err) => Err(AppError::config(format!(
            "failed to read AWARDS_TEST_DB_KIND: {err}"
        ))),
    }
}

pub fn test_state_builder() -> Result<StateBuilder, AppError> {
    let db_kind = resolve_test_db_kind()?;
    Ok(build_state().with_env(RuntimeEnv::Test).with_db(db_kind))
}

/// Fresh, migrated and seeded state. With the default engine every call gets
/// its own empty database.
pub async fn build_test_state() -> Result<AppState, AppError> {
    test_state_builder()?.build().await
}
