use serde::Deserialize;

use kamus_core::config::Config;

use crate::domain::types::AuthorizationPolicy;

/// Definitions service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct DefinitionsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `DEFINITIONS_PORT`.
    #[serde(default = "default_port")]
    pub definitions_port: u16,
    /// `owner-only` (default) or `any-authenticated`. Env var: `AUTHORIZATION_POLICY`.
    #[serde(default)]
    pub authorization_policy: AuthorizationPolicy,
    /// Accept `DELETE /definitions/{id}` without an identity header. Env var:
    /// `ALLOW_ANONYMOUS_DELETE`.
    #[serde(default)]
    pub allow_anonymous_delete: bool,
}

fn default_port() -> u16 {
    3114
}

impl Config for DefinitionsConfig {}
