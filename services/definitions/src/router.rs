use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use kamus_core::health::healthz;
use kamus_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    dashboard::get_dashboard,
    definition::{
        create_definition, delete_definition, get_definition, list_definitions,
        update_definition,
    },
    health::readyz,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Dashboard
        .route("/dashboard/definitions", get(get_dashboard))
        // Definitions
        .route("/definitions", get(list_definitions))
        .route("/definitions", post(create_definition))
        .route(
            "/definitions/{id}",
            get(get_definition)
                .put(update_definition)
                .delete(delete_definition),
        )
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
}
