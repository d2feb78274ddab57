use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel as _, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select, TransactionTrait,
};

use kamus_core::sea_ext::FilterContains as _;
use kamus_definitions_schema::{categories, definitions, status_definitions, users};

use crate::domain::repository::{CategoryRepository, DefinitionRepository, UserRepository};
use crate::domain::types::{
    Category, DefinitionDetail, DefinitionDraft, DefinitionListing, DefinitionStatus,
    MutationGuard, MutationOutcome, OwnDefinition, User,
};
use crate::error::DefinitionsServiceError;

// ── Definition repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDefinitionRepository {
    pub db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct ListingRow {
    id: i32,
    term: String,
    definition: String,
    category: String,
    username: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromQueryResult)]
struct DetailRow {
    id: i32,
    term: String,
    definition: String,
    category_id: i32,
    category: String,
    username: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromQueryResult)]
struct OwnRow {
    id: i32,
    term: String,
    definition: String,
    category: String,
    status_definition: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Definitions joined with their category label and owner username.
fn with_category_and_owner() -> Select<definitions::Entity> {
    definitions::Entity::find()
        .select_only()
        .column(definitions::Column::Id)
        .column(definitions::Column::Term)
        .column(definitions::Column::Definition)
        .column(definitions::Column::CategoryId)
        .column(definitions::Column::CreatedAt)
        .column_as(categories::Column::Category, "category")
        .column_as(users::Column::Username, "username")
        .join(JoinType::InnerJoin, definitions::Relation::Category.def())
        .join(JoinType::InnerJoin, definitions::Relation::User.def())
}

fn approved() -> Select<definitions::Entity> {
    with_category_and_owner()
        .filter(definitions::Column::StatusDefinitionId.eq(DefinitionStatus::Approved.id()))
}

impl DbDefinitionRepository {
    async fn listings(
        &self,
        query: Select<definitions::Entity>,
        what: &'static str,
    ) -> Result<Vec<DefinitionListing>, DefinitionsServiceError> {
        let rows = query
            .order_by_asc(definitions::Column::Id)
            .into_model::<ListingRow>()
            .all(&self.db)
            .await
            .context(what)?;
        Ok(rows.into_iter().map(listing_from_row).collect())
    }
}

impl DefinitionRepository for DbDefinitionRepository {
    async fn find_approved_by_term(
        &self,
        term: &str,
    ) -> Result<Vec<DefinitionListing>, DefinitionsServiceError> {
        let query = approved().filter_contains(definitions::Column::Term, term);
        self.listings(query, "find approved definitions by term")
            .await
    }

    async fn find_approved_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<DefinitionListing>, DefinitionsServiceError> {
        let query = approved().filter(definitions::Column::CategoryId.eq(category_id));
        self.listings(query, "find approved definitions by category")
            .await
    }

    async fn find_visible_by_id(
        &self,
        id: i32,
    ) -> Result<Option<DefinitionDetail>, DefinitionsServiceError> {
        let row = with_category_and_owner()
            .filter(definitions::Column::Id.eq(id))
            .filter(definitions::Column::StatusDefinitionId.ne(DefinitionStatus::Deleted.id()))
            .into_model::<DetailRow>()
            .one(&self.db)
            .await
            .context("find visible definition by id")?;
        Ok(row.map(detail_from_row))
    }

    async fn create(&self, draft: &DefinitionDraft) -> Result<i32, DefinitionsServiceError> {
        let now = Utc::now();
        let model = definitions::ActiveModel {
            term: Set(draft.term.clone()),
            definition: Set(draft.definition.clone()),
            user_id: Set(draft.user_id),
            category_id: Set(draft.category_id),
            status_definition_id: Set(draft.status.id()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create definition")?;
        Ok(model.id)
    }

    async fn update(
        &self,
        id: i32,
        draft: &DefinitionDraft,
        guard: MutationGuard,
    ) -> Result<MutationOutcome, DefinitionsServiceError> {
        let outcome = self
            .db
            .transaction::<_, MutationOutcome, DbErr>(|txn| {
                let draft = draft.clone();
                Box::pin(async move {
                    let Some(row) = definitions::Entity::find_by_id(id)
                        .lock_exclusive()
                        .one(txn)
                        .await?
                    else {
                        return Ok(MutationOutcome::NotFound);
                    };
                    if row.status_definition_id == DefinitionStatus::Deleted.id() {
                        return Ok(MutationOutcome::NotFound);
                    }
                    if !guard.allows(row.user_id) {
                        return Ok(MutationOutcome::Forbidden);
                    }

                    let mut definition = row.into_active_model();
                    definition.user_id = Set(draft.user_id);
                    definition.term = Set(draft.term);
                    definition.definition = Set(draft.definition);
                    definition.category_id = Set(draft.category_id);
                    definition.status_definition_id = Set(draft.status.id());
                    definition.updated_at = Set(Utc::now());
                    definition.update(txn).await?;
                    Ok(MutationOutcome::Applied)
                })
            })
            .await
            .context("update definition")?;
        Ok(outcome)
    }

    async fn soft_delete(
        &self,
        id: i32,
        guard: MutationGuard,
    ) -> Result<MutationOutcome, DefinitionsServiceError> {
        let outcome = self
            .db
            .transaction::<_, MutationOutcome, DbErr>(|txn| {
                Box::pin(async move {
                    let Some(row) = definitions::Entity::find_by_id(id)
                        .lock_exclusive()
                        .one(txn)
                        .await?
                    else {
                        return Ok(MutationOutcome::NotFound);
                    };
                    if !guard.allows(row.user_id) {
                        return Ok(MutationOutcome::Forbidden);
                    }

                    let now = Utc::now();
                    let mut definition = row.into_active_model();
                    definition.status_definition_id = Set(DefinitionStatus::Deleted.id());
                    definition.deleted_at = Set(Some(now));
                    definition.updated_at = Set(now);
                    definition.update(txn).await?;
                    Ok(MutationOutcome::Applied)
                })
            })
            .await
            .context("soft delete definition")?;
        Ok(outcome)
    }

    async fn list_by_owner(
        &self,
        user_id: i32,
    ) -> Result<Vec<OwnDefinition>, DefinitionsServiceError> {
        let rows = definitions::Entity::find()
            .select_only()
            .column(definitions::Column::Id)
            .column(definitions::Column::Term)
            .column(definitions::Column::Definition)
            .column(definitions::Column::CreatedAt)
            .column(definitions::Column::UpdatedAt)
            .column_as(categories::Column::Category, "category")
            .column_as(
                status_definitions::Column::StatusDefinition,
                "status_definition",
            )
            .join(JoinType::InnerJoin, definitions::Relation::Category.def())
            .join(
                JoinType::InnerJoin,
                definitions::Relation::StatusDefinition.def(),
            )
            .filter(definitions::Column::UserId.eq(user_id))
            .filter(definitions::Column::StatusDefinitionId.ne(DefinitionStatus::Deleted.id()))
            .order_by_desc(definitions::Column::UpdatedAt)
            .into_model::<OwnRow>()
            .all(&self.db)
            .await
            .context("list definitions by owner")?;
        Ok(rows.into_iter().map(own_from_row).collect())
    }

    async fn count_by_status(
        &self,
        user_id: i32,
        status: DefinitionStatus,
    ) -> Result<u64, DefinitionsServiceError> {
        let total = definitions::Entity::find()
            .filter(definitions::Column::UserId.eq(user_id))
            .filter(definitions::Column::StatusDefinitionId.eq(status.id()))
            .count(&self.db)
            .await
            .with_context(|| format!("count {} definitions", status.label()))?;
        Ok(total)
    }
}

fn listing_from_row(row: ListingRow) -> DefinitionListing {
    DefinitionListing {
        id: row.id,
        term: row.term,
        definition: row.definition,
        category: row.category,
        username: row.username,
        created_at: row.created_at,
    }
}

fn detail_from_row(row: DetailRow) -> DefinitionDetail {
    DefinitionDetail {
        id: row.id,
        term: row.term,
        definition: row.definition,
        category: Category {
            id: row.category_id,
            category: row.category,
        },
        username: row.username,
        created_at: row.created_at,
    }
}

fn own_from_row(row: OwnRow) -> OwnDefinition {
    OwnDefinition {
        id: row.id,
        term: row.term,
        definition: row.definition,
        category: row.category,
        status_definition: row.status_definition,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DefinitionsServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
    }
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn exists(&self, id: i32) -> Result<bool, DefinitionsServiceError> {
        let total = categories::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("check category exists")?;
        Ok(total > 0)
    }
}
