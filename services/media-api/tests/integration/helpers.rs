use std::sync::{Arc, Mutex};

use chrono::Utc;

use media_api::domain::repository::{FollowRepository, MediaRepository, RatingRepository};
use media_api::domain::types::{
    MediaItem, NewMediaItem, RATING_CLEAR, Rating, RatingToggle, UserFollow,
};
use media_api::error::MediaApiError;
use media_domain::pagination::PageRequest;

fn paged<T: Clone>(rows: impl Iterator<Item = T>, page: PageRequest) -> Vec<T> {
    rows.skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect()
}

// ── InMemoryMedia ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryMedia {
    pub items: Arc<Mutex<Vec<MediaItem>>>,
}

impl InMemoryMedia {
    pub fn with_ids(ids: &[i32]) -> Self {
        let items = ids.iter().map(|&media_id| test_media_item(media_id, 1)).collect();
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }
}

pub fn test_media_item(media_id: i32, user_id: i32) -> MediaItem {
    MediaItem {
        media_id,
        user_id,
        filename: format!("media-{media_id}.jpg"),
        thumbnail: None,
        filesize: 1024,
        media_type: "image/jpeg".to_owned(),
        title: format!("Media {media_id}"),
        description: None,
        ingredients: None,
        app_id: "test-app".to_owned(),
        created_at: Utc::now(),
    }
}

impl MediaRepository for InMemoryMedia {
    async fn list(&self, page: PageRequest) -> Result<Vec<MediaItem>, MediaApiError> {
        let items = self.items.lock().unwrap();
        Ok(paged(items.iter().cloned(), page))
    }

    async fn list_by_user(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Vec<MediaItem>, MediaApiError> {
        let items = self.items.lock().unwrap();
        Ok(paged(
            items.iter().filter(|m| m.user_id == user_id).cloned(),
            page,
        ))
    }

    async fn list_by_app(
        &self,
        app_id: &str,
        page: PageRequest,
    ) -> Result<Vec<MediaItem>, MediaApiError> {
        let items = self.items.lock().unwrap();
        Ok(paged(
            items.iter().filter(|m| m.app_id == app_id).cloned(),
            page,
        ))
    }

    async fn find_by_id(&self, media_id: i32) -> Result<Option<MediaItem>, MediaApiError> {
        let items = self.items.lock().unwrap();
        Ok(items.iter().find(|m| m.media_id == media_id).cloned())
    }

    async fn exists(&self, media_id: i32) -> Result<bool, MediaApiError> {
        let items = self.items.lock().unwrap();
        Ok(items.iter().any(|m| m.media_id == media_id))
    }

    async fn create(&self, item: &NewMediaItem) -> Result<MediaItem, MediaApiError> {
        let mut items = self.items.lock().unwrap();
        let media_id = items.iter().map(|m| m.media_id).max().unwrap_or(0) + 1;
        let created = MediaItem {
            media_id,
            user_id: item.user_id,
            filename: item.filename.clone(),
            thumbnail: item.thumbnail.clone(),
            filesize: item.filesize,
            media_type: item.media_type.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            ingredients: item.ingredients.clone(),
            app_id: item.app_id.clone(),
            created_at: Utc::now(),
        };
        items.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, media_id: i32, owner: Option<i32>) -> Result<bool, MediaApiError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|m| !(m.media_id == media_id && owner.is_none_or(|o| o == m.user_id)));
        Ok(items.len() < before)
    }
}

// ── InMemoryRatings ──────────────────────────────────────────────────────────

/// Holds the lock across the whole toggle, standing in for the row lock.
#[derive(Clone, Default)]
pub struct InMemoryRatings {
    pub rows: Arc<Mutex<Vec<Rating>>>,
    next_id: Arc<Mutex<i32>>,
}

impl InMemoryRatings {
    pub fn rows_for(&self, media_id: i32, user_id: i32) -> Vec<Rating> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.media_id == media_id && r.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl RatingRepository for InMemoryRatings {
    async fn toggle(
        &self,
        media_id: i32,
        user_id: i32,
        rating_value: u8,
    ) -> Result<RatingToggle, MediaApiError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.media_id == media_id && r.user_id == user_id));
        let removed = rows.len() < before;

        if rating_value == RATING_CLEAR {
            return Ok(if removed {
                RatingToggle::Deleted
            } else {
                RatingToggle::Unchanged
            });
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        rows.push(Rating {
            rating_id: *next_id,
            media_id,
            user_id,
            rating_value,
            created_at: Utc::now(),
        });
        Ok(RatingToggle::Created)
    }

    async fn delete(&self, rating_id: i32, owner: Option<i32>) -> Result<bool, MediaApiError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.rating_id == rating_id && owner.is_none_or(|o| o == r.user_id)));
        Ok(rows.len() < before)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Rating>, MediaApiError> {
        let rows = self.rows.lock().unwrap();
        Ok(paged(rows.iter().cloned(), page))
    }

    async fn list_by_media(
        &self,
        media_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Rating>, MediaApiError> {
        let rows = self.rows.lock().unwrap();
        Ok(paged(
            rows.iter().filter(|r| r.media_id == media_id).cloned(),
            page,
        ))
    }

    async fn list_by_user(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Rating>, MediaApiError> {
        let rows = self.rows.lock().unwrap();
        Ok(paged(
            rows.iter().filter(|r| r.user_id == user_id).cloned(),
            page,
        ))
    }

    async fn find(&self, media_id: i32, user_id: i32) -> Result<Option<Rating>, MediaApiError> {
        Ok(self.rows_for(media_id, user_id).into_iter().next())
    }

    async fn average(&self, media_id: i32) -> Result<Option<f64>, MediaApiError> {
        let rows = self.rows.lock().unwrap();
        let values: Vec<f64> = rows
            .iter()
            .filter(|r| r.media_id == media_id)
            .map(|r| f64::from(r.rating_value))
            .collect();
        if values.is_empty() {
            return Ok(None);
        }
        Ok(Some(values.iter().sum::<f64>() / values.len() as f64))
    }
}

// ── InMemoryFollows ──────────────────────────────────────────────────────────

/// Enforces the pair uniqueness the way the unique index does.
#[derive(Clone, Default)]
pub struct InMemoryFollows {
    pub edges: Arc<Mutex<Vec<UserFollow>>>,
}

impl FollowRepository for InMemoryFollows {
    async fn list(&self, page: PageRequest) -> Result<Vec<UserFollow>, MediaApiError> {
        let edges = self.edges.lock().unwrap();
        Ok(paged(edges.iter().cloned(), page))
    }

    async fn list_followers(
        &self,
        followed_id: i32,
        page: PageRequest,
    ) -> Result<Vec<UserFollow>, MediaApiError> {
        let edges = self.edges.lock().unwrap();
        Ok(paged(
            edges.iter().filter(|e| e.followed_id == followed_id).cloned(),
            page,
        ))
    }

    async fn list_following(
        &self,
        follower_id: i32,
        page: PageRequest,
    ) -> Result<Vec<UserFollow>, MediaApiError> {
        let edges = self.edges.lock().unwrap();
        Ok(paged(
            edges.iter().filter(|e| e.follower_id == follower_id).cloned(),
            page,
        ))
    }

    async fn find(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<Option<UserFollow>, MediaApiError> {
        let edges = self.edges.lock().unwrap();
        Ok(edges
            .iter()
            .find(|e| e.follower_id == follower_id && e.followed_id == followed_id)
            .cloned())
    }

    async fn create(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<Option<UserFollow>, MediaApiError> {
        let mut edges = self.edges.lock().unwrap();
        if edges
            .iter()
            .any(|e| e.follower_id == follower_id && e.followed_id == followed_id)
        {
            return Ok(None);
        }
        let edge = UserFollow {
            userfollow_id: edges.len() as i32 + 1,
            follower_id,
            followed_id,
            created_at: Utc::now(),
        };
        edges.push(edge.clone());
        Ok(Some(edge))
    }

    async fn delete(&self, follower_id: i32, followed_id: i32) -> Result<bool, MediaApiError> {
        let mut edges = self.edges.lock().unwrap();
        let before = edges.len();
        edges.retain(|e| !(e.follower_id == follower_id && e.followed_id == followed_id));
        Ok(edges.len() < before)
    }

    async fn count_followers(&self, followed_id: i32) -> Result<u64, MediaApiError> {
        let edges = self.edges.lock().unwrap();
        Ok(edges.iter().filter(|e| e.followed_id == followed_id).count() as u64)
    }

    async fn count_following(&self, follower_id: i32) -> Result<u64, MediaApiError> {
        let edges = self.edges.lock().unwrap();
        Ok(edges.iter().filter(|e| e.follower_id == follower_id).count() as u64)
    }
}
