use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use media_auth_types::identity::IdentityHeaders;

use crate::domain::types::Comment;
use crate::error::MediaApiError;
use crate::handlers::{CountResponse, MessageResponse, message, parse_page};
use crate::state::AppState;
use crate::usecase::comment::{
    CommentScope, CountCommentsUseCase, DeleteCommentUseCase, GetCommentUseCase,
    GetCommentsUseCase, PostCommentUseCase, UpdateCommentUseCase,
};

#[derive(Serialize)]
pub struct CommentResponse {
    pub comment_id: i32,
    pub media_id: i32,
    pub user_id: i32,
    pub comment_text: String,
    #[serde(serialize_with = "media_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            comment_id: comment.comment_id,
            media_id: comment.media_id,
            user_id: comment.user_id,
            comment_text: comment.comment_text,
            created_at: comment.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct PostCommentBody {
    pub media_id: i32,
    pub comment_text: String,
}

#[derive(Deserialize)]
pub struct UpdateCommentBody {
    pub comment_text: String,
}

async fn list(
    state: &AppState,
    scope: CommentScope,
    raw_query: Option<String>,
) -> Result<Json<Vec<CommentResponse>>, MediaApiError> {
    let page = parse_page(raw_query)?;
    let usecase = GetCommentsUseCase {
        repo: state.comment_repo(),
    };
    let comments = usecase.execute(scope, page).await?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

// ── GET /comments ────────────────────────────────────────────────────────────

pub async fn get_comments(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<CommentResponse>>, MediaApiError> {
    list(&state, CommentScope::All, raw_query).await
}

// ── GET /comments/bymedia/{id} ───────────────────────────────────────────────

pub async fn get_comments_by_media(
    State(state): State<AppState>,
    Path(media_id): Path<i32>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<CommentResponse>>, MediaApiError> {
    list(&state, CommentScope::Media(media_id), raw_query).await
}

// ── GET /comments/byuser ─────────────────────────────────────────────────────

pub async fn get_my_comments(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<CommentResponse>>, MediaApiError> {
    list(&state, CommentScope::User(identity.user_id), raw_query).await
}

// ── GET /comments/count/{id} ─────────────────────────────────────────────────

pub async fn get_comment_count(
    State(state): State<AppState>,
    Path(media_id): Path<i32>,
) -> Result<Json<CountResponse>, MediaApiError> {
    let usecase = CountCommentsUseCase {
        repo: state.comment_repo(),
    };
    let count = usecase.execute(media_id).await?;
    Ok(Json(CountResponse { count }))
}

// ── GET /comments/{id} ───────────────────────────────────────────────────────

pub async fn get_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
) -> Result<Json<CommentResponse>, MediaApiError> {
    let usecase = GetCommentUseCase {
        repo: state.comment_repo(),
    };
    let comment = usecase.execute(comment_id).await?;
    Ok(Json(comment.into()))
}

// ── POST /comments ───────────────────────────────────────────────────────────

pub async fn post_comment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<PostCommentBody>,
) -> Result<(StatusCode, Json<MessageResponse>), MediaApiError> {
    let usecase = PostCommentUseCase {
        repo: state.comment_repo(),
        media: state.media_repo(),
    };
    usecase
        .execute(body.media_id, identity.user_id, &body.comment_text)
        .await?;
    Ok((StatusCode::CREATED, message("Comment added")))
}

// ── PUT /comments/{id} ───────────────────────────────────────────────────────

pub async fn update_comment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
    Json(body): Json<UpdateCommentBody>,
) -> Result<Json<MessageResponse>, MediaApiError> {
    let usecase = UpdateCommentUseCase {
        repo: state.comment_repo(),
    };
    usecase
        .execute(
            comment_id,
            identity.user_id,
            identity.user_level,
            &body.comment_text,
        )
        .await?;
    Ok(message("Comment updated"))
}

// ── DELETE /comments/{id} ────────────────────────────────────────────────────

pub async fn delete_comment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
) -> Result<Json<MessageResponse>, MediaApiError> {
    let usecase = DeleteCommentUseCase {
        repo: state.comment_repo(),
    };
    usecase
        .execute(comment_id, identity.user_id, identity.user_level)
        .await?;
    Ok(message("Comment deleted"))
}
