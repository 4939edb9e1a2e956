use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// JSON request body extractor that rejects with `AppError::BadRequest`.
///
/// Unlike `axum::Json`, the body is decoded whatever the request `Content-Type`, and every
/// decoding failure (malformed JSON, missing field, wrong type) becomes a 400 with the
/// serde error as message. Unknown fields are ignored.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

        Ok(Self(value))
    }
}
