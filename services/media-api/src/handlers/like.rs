use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use media_auth_types::identity::IdentityHeaders;

use crate::domain::types::Like;
use crate::error::MediaApiError;
use crate::handlers::{CountResponse, MessageResponse, message, parse_page};
use crate::state::AppState;
use crate::usecase::like::{
    CountLikesUseCase, DeleteLikeUseCase, GetLikesUseCase, LikeScope, PostLikeUseCase,
};

#[derive(Serialize)]
pub struct LikeResponse {
    pub like_id: i32,
    pub media_id: i32,
    pub user_id: i32,
    #[serde(serialize_with = "media_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self {
            like_id: like.like_id,
            media_id: like.media_id,
            user_id: like.user_id,
            created_at: like.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct PostLikeBody {
    pub media_id: i32,
}

async fn list(
    state: &AppState,
    scope: LikeScope,
    raw_query: Option<String>,
) -> Result<Json<Vec<LikeResponse>>, MediaApiError> {
    let page = parse_page(raw_query)?;
    let usecase = GetLikesUseCase {
        repo: state.like_repo(),
    };
    let likes = usecase.execute(scope, page).await?;
    Ok(Json(likes.into_iter().map(Into::into).collect()))
}

// ── GET /likes ───────────────────────────────────────────────────────────────

pub async fn get_likes(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<LikeResponse>>, MediaApiError> {
    list(&state, LikeScope::All, raw_query).await
}

// ── GET /likes/bymedia/{media_id} ────────────────────────────────────────────

pub async fn get_likes_by_media(
    State(state): State<AppState>,
    Path(media_id): Path<i32>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<LikeResponse>>, MediaApiError> {
    list(&state, LikeScope::Media(media_id), raw_query).await
}

// ── GET /likes/byuser ────────────────────────────────────────────────────────

pub async fn get_my_likes(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<LikeResponse>>, MediaApiError> {
    list(&state, LikeScope::User(identity.user_id), raw_query).await
}

// ── GET /likes/count/{media_id} ──────────────────────────────────────────────

pub async fn get_like_count(
    State(state): State<AppState>,
    Path(media_id): Path<i32>,
) -> Result<Json<CountResponse>, MediaApiError> {
    let usecase = CountLikesUseCase {
        repo: state.like_repo(),
    };
    let count = usecase.execute(media_id).await?;
    Ok(Json(CountResponse { count }))
}

// ── POST /likes ──────────────────────────────────────────────────────────────

pub async fn post_like(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<PostLikeBody>,
) -> Result<(StatusCode, Json<MessageResponse>), MediaApiError> {
    let usecase = PostLikeUseCase {
        repo: state.like_repo(),
        media: state.media_repo(),
    };
    usecase.execute(body.media_id, identity.user_id).await?;
    Ok((StatusCode::CREATED, message("Like added")))
}

// ── DELETE /likes/{media_id} ─────────────────────────────────────────────────

pub async fn delete_like(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(media_id): Path<i32>,
) -> Result<Json<MessageResponse>, MediaApiError> {
    let usecase = DeleteLikeUseCase {
        repo: state.like_repo(),
    };
    usecase.execute(media_id, identity.user_id).await?;
    Ok(message("Like deleted"))
}
