//! Mock auth helpers for integration tests.
//!
//! Services behind the gateway receive an `x-kamus-user-id` header injected by the
//! gateway. In tests, `MockAuth` produces that header directly so no real gateway is needed.

use axum::http::{HeaderName, HeaderValue};

use kamus_auth_types::identity::USER_ID_HEADER;

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: i32,
}

impl MockAuth {
    pub fn new(user_id: i32) -> Self {
        Self { user_id }
    }

    /// The header name/value pair the gateway would inject.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from(self.user_id),
        )
    }
}
