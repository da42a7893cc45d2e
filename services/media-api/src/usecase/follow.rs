use media_domain::pagination::PageRequest;

use crate::domain::repository::FollowRepository;
use crate::domain::types::{FollowCreate, FollowRejection, UserFollow};
use crate::error::MediaApiError;

// ── CreateFollow ─────────────────────────────────────────────────────────────

pub struct CreateFollowUseCase<R: FollowRepository> {
    pub repo: R,
}

impl<R: FollowRepository> CreateFollowUseCase<R> {
    /// `follower_id` is the acting user; `followed_id` comes from the request.
    pub async fn execute(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<FollowCreate, MediaApiError> {
        if follower_id == followed_id {
            return Ok(FollowCreate::Rejected(FollowRejection::SelfFollow));
        }
        if self.repo.find(follower_id, followed_id).await?.is_some() {
            return Ok(FollowCreate::Rejected(FollowRejection::AlreadyExists));
        }
        // The pre-check does not lock; a concurrent insert surfaces as `None` here.
        match self.repo.create(follower_id, followed_id).await? {
            Some(follow) => Ok(FollowCreate::Created(follow)),
            None => Ok(FollowCreate::Rejected(FollowRejection::AlreadyExists)),
        }
    }
}

// ── DeleteFollow ─────────────────────────────────────────────────────────────

pub struct DeleteFollowUseCase<R: FollowRepository> {
    pub repo: R,
}

impl<R: FollowRepository> DeleteFollowUseCase<R> {
    pub async fn execute(&self, follower_id: i32, followed_id: i32) -> Result<(), MediaApiError> {
        if !self.repo.delete(follower_id, followed_id).await? {
            return Err(MediaApiError::FollowNotFound);
        }
        Ok(())
    }
}

// ── GetFollow ────────────────────────────────────────────────────────────────

pub struct GetFollowUseCase<R: FollowRepository> {
    pub repo: R,
}

impl<R: FollowRepository> GetFollowUseCase<R> {
    pub async fn execute(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<UserFollow, MediaApiError> {
        self.repo
            .find(follower_id, followed_id)
            .await?
            .ok_or(MediaApiError::FollowNotFound)
    }
}

// ── CountFollows ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub enum FollowCount {
    /// Users following the given user.
    Followers(i32),
    /// Users the given user follows.
    Following(i32),
}

pub struct CountFollowsUseCase<R: FollowRepository> {
    pub repo: R,
}

impl<R: FollowRepository> CountFollowsUseCase<R> {
    pub async fn execute(&self, count: FollowCount) -> Result<u64, MediaApiError> {
        match count {
            FollowCount::Followers(followed_id) => self.repo.count_followers(followed_id).await,
            FollowCount::Following(follower_id) => self.repo.count_following(follower_id).await,
        }
    }
}

// ── GetFollows ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub enum FollowScope {
    All,
    FollowersOf(i32),
    FollowingOf(i32),
}

pub struct GetFollowsUseCase<R: FollowRepository> {
    pub repo: R,
}

impl<R: FollowRepository> GetFollowsUseCase<R> {
    pub async fn execute(
        &self,
        scope: FollowScope,
        page: PageRequest,
    ) -> Result<Vec<UserFollow>, MediaApiError> {
        match scope {
            FollowScope::All => self.repo.list(page).await,
            FollowScope::FollowersOf(user_id) => self.repo.list_followers(user_id, page).await,
            FollowScope::FollowingOf(user_id) => self.repo.list_following(user_id, page).await,
        }
    }
}
