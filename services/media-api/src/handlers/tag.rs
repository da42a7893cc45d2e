use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use media_auth_types::identity::IdentityHeaders;

use crate::domain::types::{MediaTag, Tag};
use crate::error::MediaApiError;
use crate::handlers::{MessageResponse, message, parse_page};
use crate::state::AppState;
use crate::usecase::tag::{
    AddMediaTagUseCase, DeleteMediaTagUseCase, GetMediaTagsUseCase, GetTagsUseCase,
};

#[derive(Serialize)]
pub struct TagResponse {
    pub tag_id: i32,
    pub tag_name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            tag_id: tag.tag_id,
            tag_name: tag.tag_name,
        }
    }
}

#[derive(Serialize)]
pub struct MediaTagResponse {
    pub media_id: i32,
    pub tag_id: i32,
    pub tag_name: String,
}

impl From<MediaTag> for MediaTagResponse {
    fn from(tag: MediaTag) -> Self {
        Self {
            media_id: tag.media_id,
            tag_id: tag.tag_id,
            tag_name: tag.tag_name,
        }
    }
}

#[derive(Deserialize)]
pub struct PostTagBody {
    pub media_id: i32,
    pub tag_name: String,
}

#[derive(Serialize)]
pub struct TagAddedResponse {
    pub message: &'static str,
    pub tag: MediaTagResponse,
}

// ── GET /tags ────────────────────────────────────────────────────────────────

pub async fn get_tags(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<TagResponse>>, MediaApiError> {
    let page = parse_page(raw_query)?;
    let usecase = GetTagsUseCase {
        repo: state.tag_repo(),
    };
    let tags = usecase.execute(page).await?;
    Ok(Json(tags.into_iter().map(Into::into).collect()))
}

// ── GET /tags/bymedia/{id} ───────────────────────────────────────────────────

pub async fn get_tags_by_media(
    State(state): State<AppState>,
    Path(media_id): Path<i32>,
) -> Result<Json<Vec<MediaTagResponse>>, MediaApiError> {
    let usecase = GetMediaTagsUseCase {
        repo: state.tag_repo(),
        media: state.media_repo(),
    };
    let tags = usecase.execute(media_id).await?;
    Ok(Json(tags.into_iter().map(Into::into).collect()))
}

// ── POST /tags ───────────────────────────────────────────────────────────────

pub async fn post_tag(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<PostTagBody>,
) -> Result<(StatusCode, Json<TagAddedResponse>), MediaApiError> {
    let usecase = AddMediaTagUseCase {
        repo: state.tag_repo(),
        media: state.media_repo(),
    };
    let tag = usecase
        .execute(
            body.media_id,
            &body.tag_name,
            identity.user_id,
            identity.user_level,
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(TagAddedResponse {
            message: "Tag added",
            tag: tag.into(),
        }),
    ))
}

// ── DELETE /tags/bymedia/{id}/{tag_id} ───────────────────────────────────────

pub async fn delete_media_tag(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path((media_id, tag_id)): Path<(i32, i32)>,
) -> Result<Json<MessageResponse>, MediaApiError> {
    let usecase = DeleteMediaTagUseCase {
        repo: state.tag_repo(),
        media: state.media_repo(),
    };
    usecase
        .execute(media_id, tag_id, identity.user_id, identity.user_level)
        .await?;
    Ok(message("Tag deleted"))
}
