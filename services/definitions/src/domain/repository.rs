#![allow(async_fn_in_trait)]

use crate::domain::types::{
    DefinitionDetail, DefinitionDraft, DefinitionListing, DefinitionStatus, MutationGuard,
    MutationOutcome, OwnDefinition, User,
};
use crate::error::DefinitionsServiceError;

/// Repository for term definitions.
pub trait DefinitionRepository: Send + Sync {
    /// Approved definitions whose term contains `term` literally (case-sensitive).
    async fn find_approved_by_term(
        &self,
        term: &str,
    ) -> Result<Vec<DefinitionListing>, DefinitionsServiceError>;

    /// Approved definitions in the given category.
    async fn find_approved_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<DefinitionListing>, DefinitionsServiceError>;

    /// A definition by id unless it is deleted.
    async fn find_visible_by_id(
        &self,
        id: i32,
    ) -> Result<Option<DefinitionDetail>, DefinitionsServiceError>;

    /// Insert a new definition and return its id.
    async fn create(&self, draft: &DefinitionDraft) -> Result<i32, DefinitionsServiceError>;

    /// Overwrite a non-deleted definition, atomically with the existence and guard checks.
    async fn update(
        &self,
        id: i32,
        draft: &DefinitionDraft,
        guard: MutationGuard,
    ) -> Result<MutationOutcome, DefinitionsServiceError>;

    /// Mark a definition deleted and stamp `deleted_at`. Deleting an already deleted
    /// definition is applied again.
    async fn soft_delete(
        &self,
        id: i32,
        guard: MutationGuard,
    ) -> Result<MutationOutcome, DefinitionsServiceError>;

    /// The owner's non-deleted definitions, most recently updated first.
    async fn list_by_owner(
        &self,
        user_id: i32,
    ) -> Result<Vec<OwnDefinition>, DefinitionsServiceError>;

    async fn count_by_status(
        &self,
        user_id: i32,
        status: DefinitionStatus,
    ) -> Result<u64, DefinitionsServiceError>;
}

/// Read-only access to accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DefinitionsServiceError>;
}

/// Read-only access to the category lookup.
pub trait CategoryRepository: Send + Sync {
    async fn exists(&self, id: i32) -> Result<bool, DefinitionsServiceError>;
}
