use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ServiceError;

pub(crate) mod health;
pub(crate) mod index;
pub(crate) mod user;

#[cfg(test)]
pub(crate) mod test_utils;

pub(crate) use health::*;
pub(crate) use index::*;
pub(crate) use user::*;

/// A validated JSON body with some input.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ValidatedJson<T>(pub(crate) T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
