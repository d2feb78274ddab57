//! Gateway-injected identity header extractors.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use http::request::Parts;

use kamus_core::error::AppError;

/// Header carrying the authenticated user's numeric id.
pub const USER_ID_HEADER: &str = "x-kamus-user-id";

/// Authenticated caller injected by the gateway via `x-kamus-user-id`.
///
/// Rejects with 401 if the header is absent or is not a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
}

fn read_user_id(parts: &Parts) -> Option<Option<i32>> {
    let raw = parts.headers.get(USER_ID_HEADER)?;
    Some(
        raw.to_str()
            .ok()
            .and_then(|s| s.trim().parse::<i32>().ok())
            .filter(|id| *id > 0),
    )
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract synchronously and return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = read_user_id(parts).flatten();
        async move {
            let user_id = user_id.ok_or(AppError::Unauthorized)?;
            Ok(Self { user_id })
        }
    }
}

/// `Option<Identity>` extraction: a missing header yields `None`, a present but
/// malformed one is still rejected with 401.
impl<S> OptionalFromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        let user_id = read_user_id(parts);
        async move {
            match user_id {
                None => Ok(None),
                Some(Some(user_id)) => Ok(Some(Self { user_id })),
                Some(None) => {
                    tracing::debug!("rejecting malformed {USER_ID_HEADER} header");
                    Err(AppError::Unauthorized)
                }
            }
        }
    }
}
