use chrono::{DateTime, Utc};

/// Metadata row for an uploaded media file.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub media_id: i32,
    pub user_id: i32,
    pub filename: String,
    pub thumbnail: Option<String>,
    pub filesize: i64,
    pub media_type: String,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    /// Client application the item was posted from.
    pub app_id: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when registering a media item. Ids and timestamps are generated.
#[derive(Debug, Clone)]
pub struct NewMediaItem {
    pub user_id: i32,
    pub filename: String,
    pub thumbnail: Option<String>,
    pub filesize: i64,
    pub media_type: String,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub app_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: i32,
    pub media_id: i32,
    pub user_id: i32,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Like {
    pub like_id: i32,
    pub media_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

/// A stored rating. `rating_value` is always 1–5; 0 only exists as a toggle input.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub rating_id: i32,
    pub media_id: i32,
    pub user_id: i32,
    pub rating_value: u8,
    pub created_at: DateTime<Utc>,
}

/// Outcome of one atomic rating toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingToggle {
    /// A row with the requested value now exists (any prior row was replaced).
    Created,
    /// The caller's prior rating was removed.
    Deleted,
    /// Clear requested but nothing was stored.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserFollow {
    pub userfollow_id: i32,
    pub follower_id: i32,
    pub followed_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a follow request.
#[derive(Debug, Clone, PartialEq)]
pub enum FollowCreate {
    Created(UserFollow),
    Rejected(FollowRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowRejection {
    SelfFollow,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub tag_id: i32,
    pub tag_name: String,
}

/// A tag as attached to one media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTag {
    pub media_id: i32,
    pub tag_id: i32,
    pub tag_name: String,
}

/// Clear sentinel accepted by the rating toggle.
pub const RATING_CLEAR: u8 = 0;
pub const RATING_MAX: u8 = 5;

/// Accept 0 (clear) through 5. Anything else is rejected.
pub fn parse_rating_value(value: i64) -> Option<u8> {
    u8::try_from(value).ok().filter(|v| *v <= RATING_MAX)
}

pub const COMMENT_MAX_LEN: usize = 1000;

/// Trim and validate comment text: non-empty, at most 1000 characters.
pub fn normalize_comment_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.chars().count() > COMMENT_MAX_LEN {
        return None;
    }
    Some(trimmed.to_owned())
}

pub const TAG_NAME_MAX_LEN: usize = 50;

/// Trim and validate a tag name: non-empty, at most 50 characters.
pub fn normalize_tag_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > TAG_NAME_MAX_LEN {
        return None;
    }
    Some(trimmed.to_owned())
}
