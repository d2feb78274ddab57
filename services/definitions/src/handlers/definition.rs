use axum::{
    Json,
    extract::{Path, RawQuery, State, rejection::JsonRejection},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kamus_auth_types::identity::Identity;
use kamus_core::envelope::Envelope;

use crate::domain::types::{
    Category, DefinitionDetail, DefinitionInput, DefinitionListing, DefinitionPayload,
    FieldError, SearchCriteria, parse_positive_id,
};
use crate::error::DefinitionsServiceError;
use crate::state::AppState;
use crate::usecase::definition::{
    CreateDefinitionUseCase, DeleteDefinitionUseCase, GetDefinitionUseCase,
    ListDefinitionsUseCase, UpdateDefinitionUseCase,
};

type HandlerResult<T> = Result<Envelope<T>, DefinitionsServiceError>;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DefinitionListItem {
    pub id: i32,
    pub term: String,
    pub definition: String,
    pub category: String,
    pub username: String,
    #[serde(serialize_with = "kamus_core::serde::to_unix_seconds")]
    pub created_at: DateTime<Utc>,
}

impl From<DefinitionListing> for DefinitionListItem {
    fn from(d: DefinitionListing) -> Self {
        Self {
            id: d.id,
            term: d.term,
            definition: d.definition,
            category: d.category,
            username: d.username,
            created_at: d.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub id: i32,
    pub category: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            category: c.category,
        }
    }
}

/// Unlike the listing, the detail view carries the whole category record.
#[derive(Serialize)]
pub struct DefinitionDetailResponse {
    pub id: i32,
    pub term: String,
    pub definition: String,
    pub category: CategoryResponse,
    pub username: String,
    #[serde(serialize_with = "kamus_core::serde::to_unix_seconds")]
    pub created_at: DateTime<Utc>,
}

impl From<DefinitionDetail> for DefinitionDetailResponse {
    fn from(d: DefinitionDetail) -> Self {
        Self {
            id: d.id,
            term: d.term,
            definition: d.definition,
            category: d.category.into(),
            username: d.username,
            created_at: d.created_at,
        }
    }
}

// ── Request helpers ──────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionListQuery {
    pub term: Option<String>,
    pub category_id: Option<String>,
}

/// Non-numeric ids can never match a row, so they are reported as not found.
fn definition_id(raw: &str) -> Result<i32, DefinitionsServiceError> {
    parse_positive_id(raw).ok_or(DefinitionsServiceError::DefinitionNotFound)
}

fn validated_input(
    payload: Result<Json<DefinitionPayload>, JsonRejection>,
) -> Result<DefinitionInput, DefinitionsServiceError> {
    let Json(payload) = payload.map_err(|rejection| {
        DefinitionsServiceError::invalid_field(FieldError::new(
            "body",
            "json",
            rejection.body_text(),
        ))
    })?;
    DefinitionInput::validate(payload).map_err(DefinitionsServiceError::InvalidInput)
}

// ── GET /definitions ─────────────────────────────────────────────────────────

pub async fn list_definitions(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> HandlerResult<Vec<DefinitionListItem>> {
    let query: DefinitionListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|e| {
            DefinitionsServiceError::invalid_field(FieldError::new(
                "query",
                "format",
                e.to_string(),
            ))
        })?
        .unwrap_or_default();

    let criteria = SearchCriteria::parse(query.term.as_deref(), query.category_id.as_deref())?;
    let usecase = ListDefinitionsUseCase {
        repo: state.definition_repo(),
    };
    let definitions = usecase.execute(criteria).await?;
    Ok(Envelope::ok(
        "Definitions found",
        definitions.into_iter().map(Into::into).collect(),
    ))
}

// ── GET /definitions/{id} ────────────────────────────────────────────────────

pub async fn get_definition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<DefinitionDetailResponse> {
    let id = definition_id(&id)?;
    let usecase = GetDefinitionUseCase {
        repo: state.definition_repo(),
    };
    let definition = usecase.execute(id).await?;
    Ok(Envelope::ok("Definition found", definition.into()))
}

// ── POST /definitions ────────────────────────────────────────────────────────

pub async fn create_definition(
    identity: Identity,
    State(state): State<AppState>,
    payload: Result<Json<DefinitionPayload>, JsonRejection>,
) -> HandlerResult<()> {
    let input = validated_input(payload)?;
    let usecase = CreateDefinitionUseCase {
        repo: state.definition_repo(),
        categories: state.category_repo(),
    };
    usecase.execute(identity.user_id, input).await?;
    Ok(Envelope::created("Definition created"))
}

// ── PUT /definitions/{id} ────────────────────────────────────────────────────

pub async fn update_definition(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DefinitionPayload>, JsonRejection>,
) -> HandlerResult<()> {
    let input = validated_input(payload)?;
    let id = definition_id(&id)?;
    let usecase = UpdateDefinitionUseCase {
        repo: state.definition_repo(),
        categories: state.category_repo(),
        policy: state.policy,
    };
    usecase.execute(identity.user_id, id, input).await?;
    Ok(Envelope::done("Definition updated"))
}

// ── DELETE /definitions/{id} ─────────────────────────────────────────────────

pub async fn delete_definition(
    identity: Option<Identity>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<()> {
    let id = definition_id(&id)?;
    let usecase = DeleteDefinitionUseCase {
        repo: state.definition_repo(),
        policy: state.policy,
        allow_anonymous: state.allow_anonymous_delete,
    };
    usecase
        .execute(identity.map(|identity| identity.user_id), id)
        .await?;
    Ok(Envelope::done("Definition deleted"))
}
