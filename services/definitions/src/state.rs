use sea_orm::DatabaseConnection;

use crate::domain::types::AuthorizationPolicy;
use crate::infra::db::{DbCategoryRepository, DbDefinitionRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub policy: AuthorizationPolicy,
    pub allow_anonymous_delete: bool,
}

impl AppState {
    pub fn definition_repo(&self) -> DbDefinitionRepository {
        DbDefinitionRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn category_repo(&self) -> DbCategoryRepository {
        DbCategoryRepository {
            db: self.db.clone(),
        }
    }
}
