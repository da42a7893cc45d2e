pub mod comment;
pub mod follow;
pub mod health;
pub mod like;
pub mod media;
pub mod rating;
pub mod tag;

use axum::Json;
use serde::Serialize;

use media_domain::pagination::PageRequest;

use crate::error::MediaApiError;

/// `{"message": ...}` body returned by every mutation.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub(crate) fn message(message: &'static str) -> Json<MessageResponse> {
    Json(MessageResponse { message })
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u64,
}

/// Parse `page` / `per-page` from a raw query string. Absent → defaults.
pub(crate) fn parse_page(raw_query: Option<String>) -> Result<PageRequest, MediaApiError> {
    raw_query
        .as_deref()
        .map(serde_qs::from_str::<PageRequest>)
        .transpose()
        .map_err(|_| MediaApiError::MissingData)
        .map(Option::unwrap_or_default)
}
