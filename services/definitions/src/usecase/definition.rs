use crate::domain::repository::{CategoryRepository, DefinitionRepository};
use crate::domain::types::{
    AuthorizationPolicy, DefinitionDetail, DefinitionDraft, DefinitionInput, DefinitionListing,
    DefinitionStatus, FieldError, MutationGuard, MutationOutcome, SearchCriteria,
};
use crate::error::DefinitionsServiceError;

// ── ListDefinitions ──────────────────────────────────────────────────────────

pub struct ListDefinitionsUseCase<R: DefinitionRepository> {
    pub repo: R,
}

impl<R: DefinitionRepository> ListDefinitionsUseCase<R> {
    pub async fn execute(
        &self,
        criteria: SearchCriteria,
    ) -> Result<Vec<DefinitionListing>, DefinitionsServiceError> {
        let definitions = match &criteria {
            SearchCriteria::Term(term) => self.repo.find_approved_by_term(term).await?,
            SearchCriteria::Category(category_id) => {
                self.repo.find_approved_by_category(*category_id).await?
            }
        };
        if definitions.is_empty() {
            return Err(DefinitionsServiceError::TermNotFound);
        }
        Ok(definitions)
    }
}

// ── GetDefinition ────────────────────────────────────────────────────────────

pub struct GetDefinitionUseCase<R: DefinitionRepository> {
    pub repo: R,
}

impl<R: DefinitionRepository> GetDefinitionUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<DefinitionDetail, DefinitionsServiceError> {
        self.repo
            .find_visible_by_id(id)
            .await?
            .ok_or(DefinitionsServiceError::DefinitionNotFound)
    }
}

// ── CreateDefinition ─────────────────────────────────────────────────────────

pub struct CreateDefinitionUseCase<R: DefinitionRepository, C: CategoryRepository> {
    pub repo: R,
    pub categories: C,
}

impl<R: DefinitionRepository, C: CategoryRepository> CreateDefinitionUseCase<R, C> {
    /// New definitions always start pending review, owned by `actor`.
    pub async fn execute(
        &self,
        actor: i32,
        input: DefinitionInput,
    ) -> Result<i32, DefinitionsServiceError> {
        ensure_category_exists(&self.categories, input.category_id).await?;
        let id = self.repo.create(&pending_draft(actor, input)).await?;
        tracing::info!(definition_id = id, user_id = actor, "definition submitted");
        Ok(id)
    }
}

// ── UpdateDefinition ─────────────────────────────────────────────────────────

pub struct UpdateDefinitionUseCase<R: DefinitionRepository, C: CategoryRepository> {
    pub repo: R,
    pub categories: C,
    pub policy: AuthorizationPolicy,
}

impl<R: DefinitionRepository, C: CategoryRepository> UpdateDefinitionUseCase<R, C> {
    /// Overwrites term, body, category and owner, and sends the definition back to review.
    ///
    /// A missing definition is reported before an unknown category.
    pub async fn execute(
        &self,
        actor: i32,
        id: i32,
        input: DefinitionInput,
    ) -> Result<(), DefinitionsServiceError> {
        if self.repo.find_visible_by_id(id).await?.is_none() {
            return Err(DefinitionsServiceError::DefinitionNotFound);
        }
        ensure_category_exists(&self.categories, input.category_id).await?;
        let guard = MutationGuard {
            actor: Some(actor),
            policy: self.policy,
        };
        let outcome = self
            .repo
            .update(id, &pending_draft(actor, input), guard)
            .await?;
        outcome_to_result(outcome)?;
        tracing::info!(definition_id = id, user_id = actor, "definition resubmitted");
        Ok(())
    }
}

// ── DeleteDefinition ─────────────────────────────────────────────────────────

pub struct DeleteDefinitionUseCase<R: DefinitionRepository> {
    pub repo: R,
    pub policy: AuthorizationPolicy,
    pub allow_anonymous: bool,
}

impl<R: DefinitionRepository> DeleteDefinitionUseCase<R> {
    pub async fn execute(
        &self,
        actor: Option<i32>,
        id: i32,
    ) -> Result<(), DefinitionsServiceError> {
        if actor.is_none() && !self.allow_anonymous {
            return Err(DefinitionsServiceError::Unauthorized);
        }
        let guard = MutationGuard {
            actor,
            policy: self.policy,
        };
        let outcome = self.repo.soft_delete(id, guard).await?;
        outcome_to_result(outcome)?;
        tracing::info!(definition_id = id, user_id = ?actor, "definition deleted");
        Ok(())
    }
}

fn pending_draft(actor: i32, input: DefinitionInput) -> DefinitionDraft {
    DefinitionDraft {
        user_id: actor,
        term: input.term,
        definition: input.definition,
        category_id: input.category_id,
        status: DefinitionStatus::Pending,
    }
}

async fn ensure_category_exists<C: CategoryRepository>(
    categories: &C,
    category_id: i32,
) -> Result<(), DefinitionsServiceError> {
    if categories.exists(category_id).await? {
        Ok(())
    } else {
        Err(DefinitionsServiceError::invalid_field(FieldError::new(
            "categoryId",
            "exists",
            "categoryId does not exist",
        )))
    }
}

fn outcome_to_result(outcome: MutationOutcome) -> Result<(), DefinitionsServiceError> {
    match outcome {
        MutationOutcome::Applied => Ok(()),
        MutationOutcome::NotFound => Err(DefinitionsServiceError::DefinitionNotFound),
        MutationOutcome::Forbidden => Err(DefinitionsServiceError::Forbidden),
    }
}
