use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Moderation state of a definition. Ids match the seeded `status_definitions` rows.
///
/// The dashboard reports `Pending` under the name "review"; both names refer to the
/// same status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionStatus {
    Pending,
    Approved,
    Rejected,
    Deleted,
}

impl DefinitionStatus {
    pub const fn id(self) -> i32 {
        match self {
            Self::Pending => 1,
            Self::Approved => 2,
            Self::Rejected => 3,
            Self::Deleted => 4,
        }
    }

    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Self::Pending),
            2 => Some(Self::Approved),
            3 => Some(Self::Rejected),
            4 => Some(Self::Deleted),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Deleted => "deleted",
        }
    }
}

/// Account as seen by this service (read-only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub category: String,
}

/// Public listing row: an approved definition with its category label and owner.
#[derive(Debug, Clone)]
pub struct DefinitionListing {
    pub id: i32,
    pub term: String,
    pub definition: String,
    pub category: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Single non-deleted definition with the full category record.
#[derive(Debug, Clone)]
pub struct DefinitionDetail {
    pub id: i32,
    pub term: String,
    pub definition: String,
    pub category: Category,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Dashboard row: one of the caller's own definitions.
#[derive(Debug, Clone)]
pub struct OwnDefinition {
    pub id: i32,
    pub term: String,
    pub definition: String,
    pub category: String,
    pub status_definition: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column values written by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionDraft {
    pub user_id: i32,
    pub term: String,
    pub definition: String,
    pub category_id: i32,
    pub status: DefinitionStatus,
}

// ── Search ───────────────────────────────────────────────────────────────────

/// What the public listing filters on. A term takes precedence over a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriteria {
    Term(String),
    Category(i32),
}

/// Why [`SearchCriteria::parse`] refused its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriteriaError {
    Missing,
    Invalid(FieldError),
}

impl SearchCriteria {
    /// Build criteria from already percent-decoded query values. The term is trimmed and
    /// an empty term counts as absent.
    pub fn parse(
        term: Option<&str>,
        category_id: Option<&str>,
    ) -> Result<Self, SearchCriteriaError> {
        if let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) {
            return Ok(Self::Term(term.to_owned()));
        }
        match category_id.map(str::trim).filter(|c| !c.is_empty()) {
            Some(raw) => parse_positive_id(raw).map(Self::Category).ok_or_else(|| {
                SearchCriteriaError::Invalid(FieldError::new(
                    "categoryId",
                    "number",
                    "categoryId must be a positive integer",
                ))
            }),
            None => Err(SearchCriteriaError::Missing),
        }
    }
}

/// Parse a strictly positive `i32` id.
pub fn parse_positive_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

// ── Payload validation ───────────────────────────────────────────────────────

pub const TERM_MAX_LEN: usize = 255;
pub const DEFINITION_MAX_LEN: usize = 10_000;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

/// Create/update request body before validation. Fields stay untyped so a wrong
/// type becomes a field error instead of a body rejection. Unknown fields
/// (including any status) are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionPayload {
    pub term: Option<Value>,
    pub definition: Option<Value>,
    pub category_id: Option<Value>,
}

/// Validated create/update input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionInput {
    pub term: String,
    pub definition: String,
    pub category_id: i32,
}

impl DefinitionInput {
    /// Validate shape and bounds. Category existence is checked later against storage.
    pub fn validate(payload: DefinitionPayload) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let term = required_text(payload.term, "term", TERM_MAX_LEN, &mut errors);
        let definition =
            required_text(payload.definition, "definition", DEFINITION_MAX_LEN, &mut errors);
        let category_id = match payload.category_id {
            None | Some(Value::Null) => {
                errors.push(FieldError::new("categoryId", "required", "categoryId is required"));
                None
            }
            Some(value) => {
                let id = match &value {
                    Value::Number(n) => n
                        .as_i64()
                        .and_then(|n| i32::try_from(n).ok())
                        .filter(|id| *id > 0),
                    Value::String(s) => parse_positive_id(s),
                    _ => None,
                };
                if id.is_none() {
                    errors.push(FieldError::new(
                        "categoryId",
                        "number",
                        "categoryId must be a positive integer",
                    ));
                }
                id
            }
        };

        match (term, definition, category_id) {
            (Some(term), Some(definition), Some(category_id)) if errors.is_empty() => Ok(Self {
                term,
                definition,
                category_id,
            }),
            _ => Err(errors),
        }
    }
}

fn required_text(
    value: Option<Value>,
    field: &'static str,
    max_len: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let text = match value {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "required", format!("{field} is required")));
            return None;
        }
        Some(Value::String(s)) => s.trim().to_owned(),
        Some(_) => {
            errors.push(FieldError::new(field, "string", format!("{field} must be a string")));
            return None;
        }
    };
    if text.is_empty() {
        errors.push(FieldError::new(field, "required", format!("{field} is required")));
        return None;
    }
    if text.chars().count() > max_len {
        errors.push(FieldError::new(
            field,
            "maxLength",
            format!("{field} must be at most {max_len} characters"),
        ));
        return None;
    }
    Some(text)
}

// ── Authorization ────────────────────────────────────────────────────────────

/// Who may modify or delete a definition owned by someone else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorizationPolicy {
    /// Only the owner may update or delete.
    #[default]
    OwnerOnly,
    /// Any authenticated user may update or delete any definition.
    AnyAuthenticated,
}

/// Ownership check evaluated by the repository while it holds the row lock.
///
/// `actor` is `None` only for anonymous deletes, which the use case admits solely when
/// they are enabled; there is no identity to compare, so the check passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationGuard {
    pub actor: Option<i32>,
    pub policy: AuthorizationPolicy,
}

impl MutationGuard {
    pub fn allows(&self, owner_id: i32) -> bool {
        match (self.policy, self.actor) {
            (AuthorizationPolicy::AnyAuthenticated, _) | (_, None) => true,
            (AuthorizationPolicy::OwnerOnly, Some(actor)) => actor == owner_id,
        }
    }
}

/// Result of a guarded update or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    NotFound,
    Forbidden,
}
