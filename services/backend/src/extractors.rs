use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejections speak the collapse error envelope.
///
/// Axum's stock `Json` rejection replies with plain text; this wrapper
/// funnels missing/malformed bodies and uncoercible seeds through
/// `AppError`, so the client always receives the JSON envelope.
pub struct CollapseJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for CollapseJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(CollapseJson(value)),
            Err(rejection) => Err(AppError::InvalidRequest(rejection.to_string())),
        }
    }
}
