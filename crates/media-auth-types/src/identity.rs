//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::request::Parts;

use media_core::error::AppError;
use media_domain::user::UserLevel;

pub const USER_ID_HEADER: &str = "x-media-user-id";
pub const USER_LEVEL_HEADER: &str = "x-media-user-level";

/// Verified actor identity injected by the gateway via `x-media-user-id` and
/// `x-media-user-level`.
///
/// Rejects with 401 if either header is absent or malformed. Ownership checks
/// are done by the use cases after extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityHeaders {
    pub user_id: i32,
    pub user_level: UserLevel,
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = AppError;

    // Values are read synchronously so the returned future is 'static.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = header_str(parts, USER_ID_HEADER).and_then(|s| s.parse::<i32>().ok());
        let user_level =
            header_str(parts, USER_LEVEL_HEADER).and_then(|s| s.parse::<UserLevel>().ok());

        async move {
            match (user_id, user_level) {
                (Some(user_id), Some(user_level)) => Ok(Self {
                    user_id,
                    user_level,
                }),
                _ => {
                    tracing::debug!("rejecting request without valid identity headers");
                    Err(AppError::Unauthorized)
                }
            }
        }
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}
