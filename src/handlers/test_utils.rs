//! Helpers for driving the router in handler tests.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::server::{app, State};
use crate::store::UserStore;

/// Build the router the same way startup does, over the given store.
pub(crate) async fn test_app(store: Arc<dyn UserStore>) -> Router {
    app(State::initialize(store).await)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub(crate) async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub(crate) async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_text(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

pub(crate) async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}
