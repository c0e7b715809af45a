use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::server::State;

/// The response of a `GET /health` request.
#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) database: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

/// Handler for `GET /health`
///
/// In demo mode the app reports itself healthy without touching the database. Otherwise the
/// database is probed on every call and a failed probe answers 500.
pub(crate) async fn health(Extension(state): Extension<Arc<State>>) -> Response {
    if !state.availability.is_available() {
        return Json(HealthResponse {
            status: "healthy",
            database: Some("not_available"),
            mode: Some("demo_without_database"),
            error: None,
        })
        .into_response();
    }

    match state.store.check_connectivity().await {
        Ok(()) => Json(HealthResponse {
            status: "healthy",
            database: Some("connected"),
            mode: None,
            error: None,
        })
        .into_response(),
        Err(e) => {
            tracing::error!("Health probe failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "unhealthy",
                    database: None,
                    mode: None,
                    error: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}
