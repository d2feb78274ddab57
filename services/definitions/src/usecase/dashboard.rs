use crate::domain::repository::{DefinitionRepository, UserRepository};
use crate::domain::types::{DefinitionStatus, OwnDefinition, User};
use crate::error::DefinitionsServiceError;

/// Caller's own submissions plus per-status totals.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub user: User,
    pub total_approved: u64,
    /// Definitions awaiting moderation (`Pending`).
    pub total_review: u64,
    pub total_reject: u64,
    pub definitions: Vec<OwnDefinition>,
}

pub struct DashboardSummaryUseCase<U: UserRepository, R: DefinitionRepository> {
    pub users: U,
    pub repo: R,
}

impl<U: UserRepository, R: DefinitionRepository> DashboardSummaryUseCase<U, R> {
    pub async fn execute(&self, user_id: i32) -> Result<DashboardSummary, DefinitionsServiceError> {
        // A gateway identity without an account row is treated as unauthenticated.
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(DefinitionsServiceError::Unauthorized)?;

        let definitions = self.repo.list_by_owner(user_id).await?;
        let (total_approved, total_review, total_reject) = tokio::try_join!(
            self.repo.count_by_status(user_id, DefinitionStatus::Approved),
            self.repo.count_by_status(user_id, DefinitionStatus::Pending),
            self.repo.count_by_status(user_id, DefinitionStatus::Rejected),
        )?;

        Ok(DashboardSummary {
            user,
            total_approved,
            total_review,
            total_reject,
            definitions,
        })
    }
}
