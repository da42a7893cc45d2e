use media_domain::pagination::PageRequest;

use crate::domain::repository::{LikeRepository, MediaRepository};
use crate::domain::types::Like;
use crate::error::MediaApiError;

// ── PostLike ─────────────────────────────────────────────────────────────────

pub struct PostLikeUseCase<R: LikeRepository, M: MediaRepository> {
    pub repo: R,
    pub media: M,
}

impl<R: LikeRepository, M: MediaRepository> PostLikeUseCase<R, M> {
    pub async fn execute(&self, media_id: i32, user_id: i32) -> Result<Like, MediaApiError> {
        if !self.media.exists(media_id).await? {
            return Err(MediaApiError::MediaNotFound);
        }
        if self.repo.find(media_id, user_id).await?.is_some() {
            return Err(MediaApiError::LikeAlreadyExists);
        }
        self.repo
            .create(media_id, user_id)
            .await?
            .ok_or(MediaApiError::LikeAlreadyExists)
    }
}

// ── DeleteLike ───────────────────────────────────────────────────────────────

pub struct DeleteLikeUseCase<R: LikeRepository> {
    pub repo: R,
}

impl<R: LikeRepository> DeleteLikeUseCase<R> {
    pub async fn execute(&self, media_id: i32, user_id: i32) -> Result<(), MediaApiError> {
        if !self.repo.delete(media_id, user_id).await? {
            return Err(MediaApiError::LikeNotFound);
        }
        Ok(())
    }
}

// ── CountLikes ───────────────────────────────────────────────────────────────

pub struct CountLikesUseCase<R: LikeRepository> {
    pub repo: R,
}

impl<R: LikeRepository> CountLikesUseCase<R> {
    pub async fn execute(&self, media_id: i32) -> Result<u64, MediaApiError> {
        self.repo.count_by_media(media_id).await
    }
}

// ── GetLikes ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub enum LikeScope {
    All,
    Media(i32),
    User(i32),
}

pub struct GetLikesUseCase<R: LikeRepository> {
    pub repo: R,
}

impl<R: LikeRepository> GetLikesUseCase<R> {
    pub async fn execute(
        &self,
        scope: LikeScope,
        page: PageRequest,
    ) -> Result<Vec<Like>, MediaApiError> {
        match scope {
            LikeScope::All => self.repo.list(page).await,
            LikeScope::Media(media_id) => self.repo.list_by_media(media_id, page).await,
            LikeScope::User(user_id) => self.repo.list_by_user(user_id, page).await,
        }
    }
}
