#![allow(async_fn_in_trait)]

use media_domain::pagination::PageRequest;

use crate::domain::types::{
    Comment, Like, MediaItem, MediaTag, NewMediaItem, Rating, RatingToggle, Tag, UserFollow,
};
use crate::error::MediaApiError;

// `owner: None` lifts the ownership filter (Admin override); `Some(user_id)` restricts
// the statement to rows that user owns.

/// Repository for media item metadata.
pub trait MediaRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<MediaItem>, MediaApiError>;

    async fn list_by_user(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Vec<MediaItem>, MediaApiError>;

    async fn list_by_app(
        &self,
        app_id: &str,
        page: PageRequest,
    ) -> Result<Vec<MediaItem>, MediaApiError>;

    async fn find_by_id(&self, media_id: i32) -> Result<Option<MediaItem>, MediaApiError>;

    async fn exists(&self, media_id: i32) -> Result<bool, MediaApiError>;

    async fn create(&self, item: &NewMediaItem) -> Result<MediaItem, MediaApiError>;

    /// Delete a media item. Returns `true` if a row was deleted.
    async fn delete(&self, media_id: i32, owner: Option<i32>) -> Result<bool, MediaApiError>;
}

/// Repository for comments.
pub trait CommentRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Comment>, MediaApiError>;

    async fn list_by_media(
        &self,
        media_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Comment>, MediaApiError>;

    async fn list_by_user(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Comment>, MediaApiError>;

    async fn count_by_media(&self, media_id: i32) -> Result<u64, MediaApiError>;

    async fn find_by_id(&self, comment_id: i32) -> Result<Option<Comment>, MediaApiError>;

    async fn create(
        &self,
        media_id: i32,
        user_id: i32,
        comment_text: &str,
    ) -> Result<Comment, MediaApiError>;

    /// Replace the comment text. Returns `true` if a row was updated.
    async fn update_text(
        &self,
        comment_id: i32,
        owner: Option<i32>,
        comment_text: &str,
    ) -> Result<bool, MediaApiError>;

    /// Delete a comment. Returns `true` if a row was deleted.
    async fn delete(&self, comment_id: i32, owner: Option<i32>) -> Result<bool, MediaApiError>;
}

/// Repository for likes.
pub trait LikeRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Like>, MediaApiError>;

    async fn list_by_media(
        &self,
        media_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Like>, MediaApiError>;

    async fn list_by_user(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Like>, MediaApiError>;

    async fn count_by_media(&self, media_id: i32) -> Result<u64, MediaApiError>;

    async fn find(&self, media_id: i32, user_id: i32) -> Result<Option<Like>, MediaApiError>;

    /// Insert a like. Returns `None` if the (media, user) pair already has one.
    async fn create(&self, media_id: i32, user_id: i32) -> Result<Option<Like>, MediaApiError>;

    /// Delete a like. Returns `true` if a row was deleted.
    async fn delete(&self, media_id: i32, user_id: i32) -> Result<bool, MediaApiError>;
}

/// Repository for ratings, including the atomic toggle.
pub trait RatingRepository: Send + Sync {
    /// Replace or clear the caller's rating in one transaction.
    ///
    /// `rating_value` is already validated to 0–5; 0 clears.
    async fn toggle(
        &self,
        media_id: i32,
        user_id: i32,
        rating_value: u8,
    ) -> Result<RatingToggle, MediaApiError>;

    /// Delete a rating by id. Returns `true` if a row was deleted.
    async fn delete(&self, rating_id: i32, owner: Option<i32>) -> Result<bool, MediaApiError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<Rating>, MediaApiError>;

    async fn list_by_media(
        &self,
        media_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Rating>, MediaApiError>;

    async fn list_by_user(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Rating>, MediaApiError>;

    async fn find(&self, media_id: i32, user_id: i32) -> Result<Option<Rating>, MediaApiError>;

    /// Mean rating value, `None` when the media item has no ratings.
    async fn average(&self, media_id: i32) -> Result<Option<f64>, MediaApiError>;
}

/// Repository for follow edges.
pub trait FollowRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<UserFollow>, MediaApiError>;

    async fn list_followers(
        &self,
        followed_id: i32,
        page: PageRequest,
    ) -> Result<Vec<UserFollow>, MediaApiError>;

    async fn list_following(
        &self,
        follower_id: i32,
        page: PageRequest,
    ) -> Result<Vec<UserFollow>, MediaApiError>;

    async fn find(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<Option<UserFollow>, MediaApiError>;

    /// Insert an edge. Returns `None` if the unique index rejected a duplicate.
    async fn create(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<Option<UserFollow>, MediaApiError>;

    /// Delete an edge. Returns `true` if a row was deleted.
    async fn delete(&self, follower_id: i32, followed_id: i32) -> Result<bool, MediaApiError>;

    async fn count_followers(&self, followed_id: i32) -> Result<u64, MediaApiError>;

    async fn count_following(&self, follower_id: i32) -> Result<u64, MediaApiError>;
}

/// Repository for tags and their media associations.
pub trait TagRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Tag>, MediaApiError>;

    async fn list_by_media(&self, media_id: i32) -> Result<Vec<MediaTag>, MediaApiError>;

    /// Return the tag with this name, inserting it first if needed.
    async fn find_or_create(&self, tag_name: &str) -> Result<Tag, MediaApiError>;

    /// Attach a tag to a media item. Returns `false` if it was already attached.
    async fn attach(&self, media_id: i32, tag_id: i32) -> Result<bool, MediaApiError>;

    /// Detach a tag from a media item. Returns `true` if a row was deleted.
    async fn detach(&self, media_id: i32, tag_id: i32) -> Result<bool, MediaApiError>;
}
