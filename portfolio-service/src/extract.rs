use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// JSON body that is deserialized and then checked with `validator`.
///
/// A request without a `content-type` header is still parsed as JSON.
/// Every body problem (malformed JSON, wrong shape, non-JSON content type)
/// and every field validation failure is a 422.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let parsed = if req.headers().contains_key(CONTENT_TYPE) {
            Json::<T>::from_request(req, state).await
        } else {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Json::<T>::from_bytes(&bytes)
        };

        let Json(value) = parsed.map_err(json_rejection_response)?;

        value
            .validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(value))
    }
}

fn json_rejection_response(rejection: JsonRejection) -> Response {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    match rejection {
        JsonRejection::BytesRejection(e) => e.into_response(),
        other => AppError::Unprocessable(anyhow::anyhow!(other.body_text())).into_response(),
    }
}
