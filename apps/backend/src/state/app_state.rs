use sea_orm::DatabaseConnection;

use crate::config::db::DbKind;

/// Shared resources handed to every handler through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Connection pool (absent only in tests that never touch storage)
    db: Option<DatabaseConnection>,
    db_kind: Option<DbKind>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, db_kind: DbKind) -> Self {
        Self {
            db: Some(db),
            db_kind: Some(db_kind),
        }
    }

    pub fn new_without_db() -> Self {
        Self {
            db: None,
            db_kind: None,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn db_kind(&self) -> Option<DbKind> {
        self.db_kind
    }
}
