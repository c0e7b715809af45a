use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::constants::{DEMO_CREATE_MESSAGE, DEMO_LIST_MESSAGE, USER_CREATED_MESSAGE};
use crate::error::ServiceError;
use crate::handlers::ValidatedJson;
use crate::models::{DemoUser, NewUser, User, DEMO_USERS};
use crate::server::State;

/// The JSON input for `POST /users`
///
/// Absent fields deserialize as empty strings so they fail validation like empty ones do.
/// The upper bound matches the `VARCHAR(100)` columns.
#[derive(Debug, Validate, Deserialize)]
pub(crate) struct NewUserInput {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters."))]
    pub(crate) name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Email must be 1 to 100 characters."))]
    pub(crate) email: String,
}

/// The response output for `GET /users`
#[derive(Debug, Serialize)]
pub(crate) struct UsersResponse {
    pub(crate) users: Vec<User>,
}

/// The response output for `GET /users` in demo mode
#[derive(Debug, Serialize)]
pub(crate) struct DemoUsersResponse {
    pub(crate) users: Vec<User>,
    pub(crate) message: &'static str,
    pub(crate) demo_users: [DemoUser; 2],
}

/// The response output for `POST /users`
#[derive(Debug, Serialize)]
pub(crate) struct NewUserResponse {
    pub(crate) id: i32,
    pub(crate) message: &'static str,
}

/// The response output for `POST /users` in demo mode
#[derive(Debug, Serialize)]
pub(crate) struct DemoCreateResponse {
    pub(crate) message: &'static str,
    pub(crate) demo_mode: bool,
}

/// Handler for `GET /users`
pub(crate) async fn list_users(
    Extension(state): Extension<Arc<State>>,
) -> Result<Response, ServiceError> {
    if !state.availability.is_available() {
        return Ok(Json(DemoUsersResponse {
            users: Vec::new(),
            message: DEMO_LIST_MESSAGE,
            demo_users: DEMO_USERS,
        })
        .into_response());
    }

    let users = state.store.list_users().await?;

    Ok(Json(UsersResponse { users }).into_response())
}

/// Handler for `POST /users`
pub(crate) async fn create_user(
    Extension(state): Extension<Arc<State>>,
    ValidatedJson(input): ValidatedJson<NewUserInput>,
) -> Result<Response, ServiceError> {
    if !state.availability.is_available() {
        return Ok(Json(DemoCreateResponse {
            message: DEMO_CREATE_MESSAGE,
            demo_mode: true,
        })
        .into_response());
    }

    let user = state
        .store
        .insert_user(NewUser {
            name: input.name,
            email: input.email,
        })
        .await?;
    tracing::info!(id = user.id, "Created user");

    Ok((
        StatusCode::CREATED,
        Json(NewUserResponse {
            id: user.id,
            message: USER_CREATED_MESSAGE,
        }),
    )
        .into_response())
}
