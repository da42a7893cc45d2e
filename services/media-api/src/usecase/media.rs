use media_domain::pagination::PageRequest;
use media_domain::user::UserLevel;

use crate::domain::repository::MediaRepository;
use crate::domain::types::{MediaItem, NewMediaItem};
use crate::error::MediaApiError;

// ── PostMedia ────────────────────────────────────────────────────────────────

pub struct PostMediaUseCase<R: MediaRepository> {
    pub repo: R,
}

impl<R: MediaRepository> PostMediaUseCase<R> {
    pub async fn execute(&self, item: NewMediaItem) -> Result<MediaItem, MediaApiError> {
        if item.filename.trim().is_empty()
            || item.title.trim().is_empty()
            || item.media_type.trim().is_empty()
            || item.app_id.trim().is_empty()
            || item.filesize < 0
        {
            return Err(MediaApiError::MissingData);
        }
        self.repo.create(&item).await
    }
}

// ── DeleteMedia ──────────────────────────────────────────────────────────────

pub struct DeleteMediaUseCase<R: MediaRepository> {
    pub repo: R,
}

impl<R: MediaRepository> DeleteMediaUseCase<R> {
    /// Comments, likes and ratings of the item go with it (`ON DELETE CASCADE`).
    pub async fn execute(
        &self,
        media_id: i32,
        user_id: i32,
        user_level: UserLevel,
    ) -> Result<(), MediaApiError> {
        let owner = (!user_level.overrides_ownership()).then_some(user_id);
        if !self.repo.delete(media_id, owner).await? {
            return Err(MediaApiError::MediaNotFound);
        }
        Ok(())
    }
}

// ── GetMedia ─────────────────────────────────────────────────────────────────

pub struct GetMediaUseCase<R: MediaRepository> {
    pub repo: R,
}

impl<R: MediaRepository> GetMediaUseCase<R> {
    pub async fn execute(&self, media_id: i32) -> Result<MediaItem, MediaApiError> {
        self.repo
            .find_by_id(media_id)
            .await?
            .ok_or(MediaApiError::MediaNotFound)
    }
}

// ── GetMediaList ─────────────────────────────────────────────────────────────

pub enum MediaScope {
    All,
    User(i32),
    App(String),
}

pub struct GetMediaListUseCase<R: MediaRepository> {
    pub repo: R,
}

impl<R: MediaRepository> GetMediaListUseCase<R> {
    pub async fn execute(
        &self,
        scope: MediaScope,
        page: PageRequest,
    ) -> Result<Vec<MediaItem>, MediaApiError> {
        match scope {
            MediaScope::All => self.repo.list(page).await,
            MediaScope::User(user_id) => self.repo.list_by_user(user_id, page).await,
            MediaScope::App(app_id) => self.repo.list_by_app(&app_id, page).await,
        }
    }
}
