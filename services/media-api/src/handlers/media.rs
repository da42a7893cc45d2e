use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use media_auth_types::identity::IdentityHeaders;

use crate::domain::types::{MediaItem, NewMediaItem};
use crate::error::MediaApiError;
use crate::handlers::{MessageResponse, message, parse_page};
use crate::state::AppState;
use crate::usecase::media::{
    DeleteMediaUseCase, GetMediaListUseCase, GetMediaUseCase, MediaScope, PostMediaUseCase,
};

#[derive(Serialize)]
pub struct MediaResponse {
    pub media_id: i32,
    pub user_id: i32,
    pub filename: String,
    pub thumbnail: Option<String>,
    pub filesize: i64,
    pub media_type: String,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub app_id: String,
    #[serde(serialize_with = "media_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<MediaItem> for MediaResponse {
    fn from(item: MediaItem) -> Self {
        Self {
            media_id: item.media_id,
            user_id: item.user_id,
            filename: item.filename,
            thumbnail: item.thumbnail,
            filesize: item.filesize,
            media_type: item.media_type,
            title: item.title,
            description: item.description,
            ingredients: item.ingredients,
            app_id: item.app_id,
            created_at: item.created_at,
        }
    }
}

/// Metadata registered by the upload collaborator once the file is stored.
#[derive(Deserialize)]
pub struct PostMediaBody {
    pub filename: String,
    pub thumbnail: Option<String>,
    pub filesize: i64,
    pub media_type: String,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub app_id: String,
}

#[derive(Serialize)]
pub struct MediaCreatedResponse {
    pub message: &'static str,
    pub media: MediaResponse,
}

// ── GET /media ───────────────────────────────────────────────────────────────

pub async fn get_media_list(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<MediaResponse>>, MediaApiError> {
    let page = parse_page(raw_query)?;
    let usecase = GetMediaListUseCase {
        repo: state.media_repo(),
    };
    let items = usecase.execute(MediaScope::All, page).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

// ── GET /media/byuser/{user_id} ──────────────────────────────────────────────

pub async fn get_media_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<MediaResponse>>, MediaApiError> {
    let page = parse_page(raw_query)?;
    let usecase = GetMediaListUseCase {
        repo: state.media_repo(),
    };
    let items = usecase.execute(MediaScope::User(user_id), page).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

// ── GET /media/app/{app_id} ──────────────────────────────────────────────────

pub async fn get_media_by_app(
    State(state): State<AppState>,
    Path(app_id): Path<String>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<MediaResponse>>, MediaApiError> {
    let page = parse_page(raw_query)?;
    let usecase = GetMediaListUseCase {
        repo: state.media_repo(),
    };
    let items = usecase.execute(MediaScope::App(app_id), page).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

// ── GET /media/{id} ──────────────────────────────────────────────────────────

pub async fn get_media(
    State(state): State<AppState>,
    Path(media_id): Path<i32>,
) -> Result<Json<MediaResponse>, MediaApiError> {
    let usecase = GetMediaUseCase {
        repo: state.media_repo(),
    };
    let item = usecase.execute(media_id).await?;
    Ok(Json(item.into()))
}

// ── POST /media ──────────────────────────────────────────────────────────────

pub async fn post_media(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<PostMediaBody>,
) -> Result<(StatusCode, Json<MediaCreatedResponse>), MediaApiError> {
    let usecase = PostMediaUseCase {
        repo: state.media_repo(),
    };
    let item = usecase
        .execute(NewMediaItem {
            user_id: identity.user_id,
            filename: body.filename,
            thumbnail: body.thumbnail,
            filesize: body.filesize,
            media_type: body.media_type,
            title: body.title,
            description: body.description,
            ingredients: body.ingredients,
            app_id: body.app_id,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MediaCreatedResponse {
            message: "Media created",
            media: item.into(),
        }),
    ))
}

// ── DELETE /media/{id} ───────────────────────────────────────────────────────

pub async fn delete_media(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(media_id): Path<i32>,
) -> Result<Json<MessageResponse>, MediaApiError> {
    let usecase = DeleteMediaUseCase {
        repo: state.media_repo(),
    };
    usecase
        .execute(media_id, identity.user_id, identity.user_level)
        .await?;
    Ok(message("Media deleted"))
}
