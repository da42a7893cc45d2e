use media_domain::pagination::PageRequest;
use media_domain::user::UserLevel;

use crate::domain::repository::{MediaRepository, RatingRepository};
use crate::domain::types::{Rating, RatingToggle, parse_rating_value};
use crate::error::MediaApiError;

// ── SetRating ────────────────────────────────────────────────────────────────

pub struct SetRatingUseCase<R: RatingRepository, M: MediaRepository> {
    pub repo: R,
    pub media: M,
}

impl<R: RatingRepository, M: MediaRepository> SetRatingUseCase<R, M> {
    /// `rating_value` 0 clears the caller's rating, 1–5 replaces it.
    pub async fn execute(
        &self,
        media_id: i32,
        user_id: i32,
        rating_value: i64,
    ) -> Result<RatingToggle, MediaApiError> {
        let rating_value =
            parse_rating_value(rating_value).ok_or(MediaApiError::InvalidRatingValue)?;
        if !self.media.exists(media_id).await? {
            return Err(MediaApiError::MediaNotFound);
        }
        let outcome = self.repo.toggle(media_id, user_id, rating_value).await?;
        tracing::debug!(media_id, user_id, rating_value, ?outcome, "rating toggled");
        Ok(outcome)
    }
}

// ── DeleteRating ─────────────────────────────────────────────────────────────

pub struct DeleteRatingUseCase<R: RatingRepository> {
    pub repo: R,
}

impl<R: RatingRepository> DeleteRatingUseCase<R> {
    pub async fn execute(
        &self,
        rating_id: i32,
        user_id: i32,
        user_level: UserLevel,
    ) -> Result<(), MediaApiError> {
        let owner = (!user_level.overrides_ownership()).then_some(user_id);
        if !self.repo.delete(rating_id, owner).await? {
            return Err(MediaApiError::RatingNotFound);
        }
        Ok(())
    }
}

// ── GetAverageRating ─────────────────────────────────────────────────────────

pub struct GetAverageRatingUseCase<R: RatingRepository> {
    pub repo: R,
}

impl<R: RatingRepository> GetAverageRatingUseCase<R> {
    pub async fn execute(&self, media_id: i32) -> Result<f64, MediaApiError> {
        self.repo
            .average(media_id)
            .await?
            .ok_or(MediaApiError::NoRatingsFound)
    }
}

// ── GetRating (caller's rating for one media item) ───────────────────────────

pub struct GetRatingUseCase<R: RatingRepository> {
    pub repo: R,
}

impl<R: RatingRepository> GetRatingUseCase<R> {
    pub async fn execute(&self, media_id: i32, user_id: i32) -> Result<Rating, MediaApiError> {
        self.repo
            .find(media_id, user_id)
            .await?
            .ok_or(MediaApiError::RatingNotFound)
    }
}

// ── GetRatings ───────────────────────────────────────────────────────────────

/// Which ratings to list.
#[derive(Debug, Clone, Copy)]
pub enum RatingScope {
    All,
    Media(i32),
    User(i32),
}

pub struct GetRatingsUseCase<R: RatingRepository> {
    pub repo: R,
}

impl<R: RatingRepository> GetRatingsUseCase<R> {
    pub async fn execute(
        &self,
        scope: RatingScope,
        page: PageRequest,
    ) -> Result<Vec<Rating>, MediaApiError> {
        match scope {
            RatingScope::All => self.repo.list(page).await,
            RatingScope::Media(media_id) => self.repo.list_by_media(media_id, page).await,
            RatingScope::User(user_id) => self.repo.list_by_user(user_id, page).await,
        }
    }
}
