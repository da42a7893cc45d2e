use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::types::FollowRejection;

/// Media API domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum MediaApiError {
    #[error("media not found")]
    MediaNotFound,
    #[error("rating not found")]
    RatingNotFound,
    #[error("no ratings found")]
    NoRatingsFound,
    #[error("like not found")]
    LikeNotFound,
    #[error("comment not found")]
    CommentNotFound,
    #[error("follow not found")]
    FollowNotFound,
    #[error("tag not found")]
    TagNotFound,
    #[error("like already exists")]
    LikeAlreadyExists,
    #[error("follow already exists")]
    FollowAlreadyExists,
    #[error("tag already attached to media")]
    TagAlreadyExists,
    #[error("cannot follow yourself")]
    SelfFollow,
    #[error("rating value must be between 0 and 5")]
    InvalidRatingValue,
    #[error("invalid comment text")]
    InvalidCommentText,
    #[error("invalid tag name")]
    InvalidTagName,
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl MediaApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MediaNotFound => "MEDIA_NOT_FOUND",
            Self::RatingNotFound => "RATING_NOT_FOUND",
            Self::NoRatingsFound => "NO_RATINGS_FOUND",
            Self::LikeNotFound => "LIKE_NOT_FOUND",
            Self::CommentNotFound => "COMMENT_NOT_FOUND",
            Self::FollowNotFound => "FOLLOW_NOT_FOUND",
            Self::TagNotFound => "TAG_NOT_FOUND",
            Self::LikeAlreadyExists => "LIKE_ALREADY_EXISTS",
            Self::FollowAlreadyExists => "FOLLOW_ALREADY_EXISTS",
            Self::TagAlreadyExists => "TAG_ALREADY_EXISTS",
            Self::SelfFollow => "SELF_FOLLOW",
            Self::InvalidRatingValue => "INVALID_RATING_VALUE",
            Self::InvalidCommentText => "INVALID_COMMENT_TEXT",
            Self::InvalidTagName => "INVALID_TAG_NAME",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<FollowRejection> for MediaApiError {
    fn from(rejection: FollowRejection) -> Self {
        match rejection {
            FollowRejection::SelfFollow => Self::SelfFollow,
            FollowRejection::AlreadyExists => Self::FollowAlreadyExists,
        }
    }
}

impl IntoResponse for MediaApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MediaNotFound
            | Self::RatingNotFound
            | Self::NoRatingsFound
            | Self::LikeNotFound
            | Self::CommentNotFound
            | Self::FollowNotFound
            | Self::TagNotFound => StatusCode::NOT_FOUND,
            Self::LikeAlreadyExists
            | Self::FollowAlreadyExists
            | Self::TagAlreadyExists
            | Self::SelfFollow => StatusCode::CONFLICT,
            Self::InvalidRatingValue
            | Self::InvalidCommentText
            | Self::InvalidTagName
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
