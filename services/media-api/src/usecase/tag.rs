use media_domain::pagination::PageRequest;
use media_domain::user::UserLevel;

use crate::domain::repository::{MediaRepository, TagRepository};
use crate::domain::types::{MediaTag, Tag, normalize_tag_name};
use crate::error::MediaApiError;

/// Only the uploader or an Admin may change an item's tags. Anyone else sees
/// the item as missing.
async fn ensure_editable<M: MediaRepository>(
    media: &M,
    media_id: i32,
    user_id: i32,
    user_level: UserLevel,
) -> Result<(), MediaApiError> {
    let item = media
        .find_by_id(media_id)
        .await?
        .ok_or(MediaApiError::MediaNotFound)?;
    if !user_level.overrides_ownership() && item.user_id != user_id {
        return Err(MediaApiError::MediaNotFound);
    }
    Ok(())
}

// ── GetTags ──────────────────────────────────────────────────────────────────

pub struct GetTagsUseCase<R: TagRepository> {
    pub repo: R,
}

impl<R: TagRepository> GetTagsUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Tag>, MediaApiError> {
        self.repo.list(page).await
    }
}

// ── GetMediaTags ─────────────────────────────────────────────────────────────

pub struct GetMediaTagsUseCase<R: TagRepository, M: MediaRepository> {
    pub repo: R,
    pub media: M,
}

impl<R: TagRepository, M: MediaRepository> GetMediaTagsUseCase<R, M> {
    pub async fn execute(&self, media_id: i32) -> Result<Vec<MediaTag>, MediaApiError> {
        if !self.media.exists(media_id).await? {
            return Err(MediaApiError::MediaNotFound);
        }
        self.repo.list_by_media(media_id).await
    }
}

// ── AddMediaTag ──────────────────────────────────────────────────────────────

pub struct AddMediaTagUseCase<R: TagRepository, M: MediaRepository> {
    pub repo: R,
    pub media: M,
}

impl<R: TagRepository, M: MediaRepository> AddMediaTagUseCase<R, M> {
    pub async fn execute(
        &self,
        media_id: i32,
        tag_name: &str,
        user_id: i32,
        user_level: UserLevel,
    ) -> Result<MediaTag, MediaApiError> {
        let tag_name = normalize_tag_name(tag_name).ok_or(MediaApiError::InvalidTagName)?;
        ensure_editable(&self.media, media_id, user_id, user_level).await?;

        let tag = self.repo.find_or_create(&tag_name).await?;
        if !self.repo.attach(media_id, tag.tag_id).await? {
            return Err(MediaApiError::TagAlreadyExists);
        }
        tracing::info!(media_id, tag_id = tag.tag_id, "tag attached");
        Ok(MediaTag {
            media_id,
            tag_id: tag.tag_id,
            tag_name: tag.tag_name,
        })
    }
}

// ── DeleteMediaTag ───────────────────────────────────────────────────────────

pub struct DeleteMediaTagUseCase<R: TagRepository, M: MediaRepository> {
    pub repo: R,
    pub media: M,
}

impl<R: TagRepository, M: MediaRepository> DeleteMediaTagUseCase<R, M> {
    pub async fn execute(
        &self,
        media_id: i32,
        tag_id: i32,
        user_id: i32,
        user_level: UserLevel,
    ) -> Result<(), MediaApiError> {
        ensure_editable(&self.media, media_id, user_id, user_level).await?;
        if !self.repo.detach(media_id, tag_id).await? {
            return Err(MediaApiError::TagNotFound);
        }
        Ok(())
    }
}
