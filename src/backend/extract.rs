//! Request extractors shared by the handlers
//!
//! `JsonBody` wraps axum's `Json` so that every body rejection (missing
//! content type, syntax error, wrong shape) comes back as a 400 in the
//! standard error format.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::backend::error::BackendError;

/// JSON request body with 400 rejections
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            BackendError::from(rejection)
        })?;
        Ok(JsonBody(value))
    }
}

/// Parse a path identifier, naming the resource in the error
pub fn parse_id(raw: &str, resource: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::warn!("Invalid {} ID: {}", resource, raw);
        BackendError::validation(format!("Invalid {} ID", resource))
    })
}
