use media_domain::pagination::PageRequest;
use media_domain::user::UserLevel;

use crate::domain::repository::{CommentRepository, MediaRepository};
use crate::domain::types::{Comment, normalize_comment_text};
use crate::error::MediaApiError;

// ── PostComment ──────────────────────────────────────────────────────────────

pub struct PostCommentUseCase<R: CommentRepository, M: MediaRepository> {
    pub repo: R,
    pub media: M,
}

impl<R: CommentRepository, M: MediaRepository> PostCommentUseCase<R, M> {
    pub async fn execute(
        &self,
        media_id: i32,
        user_id: i32,
        comment_text: &str,
    ) -> Result<Comment, MediaApiError> {
        let text = normalize_comment_text(comment_text).ok_or(MediaApiError::InvalidCommentText)?;
        if !self.media.exists(media_id).await? {
            return Err(MediaApiError::MediaNotFound);
        }
        self.repo.create(media_id, user_id, &text).await
    }
}

// ── UpdateComment ────────────────────────────────────────────────────────────

pub struct UpdateCommentUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> UpdateCommentUseCase<R> {
    pub async fn execute(
        &self,
        comment_id: i32,
        user_id: i32,
        user_level: UserLevel,
        comment_text: &str,
    ) -> Result<(), MediaApiError> {
        let text = normalize_comment_text(comment_text).ok_or(MediaApiError::InvalidCommentText)?;
        let owner = (!user_level.overrides_ownership()).then_some(user_id);
        if !self.repo.update_text(comment_id, owner, &text).await? {
            return Err(MediaApiError::CommentNotFound);
        }
        Ok(())
    }
}

// ── DeleteComment ────────────────────────────────────────────────────────────

pub struct DeleteCommentUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> DeleteCommentUseCase<R> {
    pub async fn execute(
        &self,
        comment_id: i32,
        user_id: i32,
        user_level: UserLevel,
    ) -> Result<(), MediaApiError> {
        let owner = (!user_level.overrides_ownership()).then_some(user_id);
        if !self.repo.delete(comment_id, owner).await? {
            return Err(MediaApiError::CommentNotFound);
        }
        Ok(())
    }
}

// ── GetComment ───────────────────────────────────────────────────────────────

pub struct GetCommentUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> GetCommentUseCase<R> {
    pub async fn execute(&self, comment_id: i32) -> Result<Comment, MediaApiError> {
        self.repo
            .find_by_id(comment_id)
            .await?
            .ok_or(MediaApiError::CommentNotFound)
    }
}

// ── CountComments ────────────────────────────────────────────────────────────

pub struct CountCommentsUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> CountCommentsUseCase<R> {
    pub async fn execute(&self, media_id: i32) -> Result<u64, MediaApiError> {
        self.repo.count_by_media(media_id).await
    }
}

// ── GetComments ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub enum CommentScope {
    All,
    Media(i32),
    User(i32),
}

pub struct GetCommentsUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> GetCommentsUseCase<R> {
    pub async fn execute(
        &self,
        scope: CommentScope,
        page: PageRequest,
    ) -> Result<Vec<Comment>, MediaApiError> {
        match scope {
            CommentScope::All => self.repo.list(page).await,
            CommentScope::Media(media_id) => self.repo.list_by_media(media_id, page).await,
            CommentScope::User(user_id) => self.repo.list_by_user(user_id, page).await,
        }
    }
}
