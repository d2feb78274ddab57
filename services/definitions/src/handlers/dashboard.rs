use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use kamus_auth_types::identity::Identity;
use kamus_core::envelope::Envelope;

use crate::domain::types::OwnDefinition;
use crate::error::DefinitionsServiceError;
use crate::state::AppState;
use crate::usecase::dashboard::{DashboardSummary, DashboardSummaryUseCase};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnDefinitionResponse {
    pub id: i32,
    pub term: String,
    pub definition: String,
    pub category: String,
    pub status_definition: String,
    #[serde(serialize_with = "kamus_core::serde::to_unix_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "kamus_core::serde::to_unix_seconds")]
    pub updated_at: DateTime<Utc>,
}

impl From<OwnDefinition> for OwnDefinitionResponse {
    fn from(d: OwnDefinition) -> Self {
        Self {
            id: d.id,
            term: d.term,
            definition: d.definition,
            category: d.category,
            status_definition: d.status_definition,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct DashboardResponse {
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub total_approved: u64,
    pub total_review: u64,
    pub total_reject: u64,
    pub definitions: Vec<OwnDefinitionResponse>,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            user_id: summary.user.id,
            username: summary.user.username,
            email: summary.user.email,
            total_approved: summary.total_approved,
            total_review: summary.total_review,
            total_reject: summary.total_reject,
            definitions: summary.definitions.into_iter().map(Into::into).collect(),
        }
    }
}

// ── GET /dashboard/definitions ───────────────────────────────────────────────

pub async fn get_dashboard(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Envelope<DashboardResponse>, DefinitionsServiceError> {
    let usecase = DashboardSummaryUseCase {
        users: state.user_repo(),
        repo: state.definition_repo(),
    };
    let summary = usecase.execute(identity.user_id).await?;
    Ok(Envelope::ok("Dashboard summary", summary.into()))
}
