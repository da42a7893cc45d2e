use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use media_auth_types::identity::IdentityHeaders;

use crate::domain::types::{Rating, RatingToggle};
use crate::error::MediaApiError;
use crate::handlers::{MessageResponse, message, parse_page};
use crate::state::AppState;
use crate::usecase::rating::{
    DeleteRatingUseCase, GetAverageRatingUseCase, GetRatingUseCase, GetRatingsUseCase,
    RatingScope, SetRatingUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct RatingResponse {
    pub rating_id: i32,
    pub media_id: i32,
    pub user_id: i32,
    pub rating_value: u8,
    #[serde(serialize_with = "media_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            rating_id: rating.rating_id,
            media_id: rating.media_id,
            user_id: rating.user_id,
            rating_value: rating.rating_value,
            created_at: rating.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct AverageResponse {
    pub average: f64,
}

// ── Request body ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SetRatingBody {
    pub media_id: i32,
    pub rating_value: i64,
}

async fn list(
    state: &AppState,
    scope: RatingScope,
    raw_query: Option<String>,
) -> Result<Json<Vec<RatingResponse>>, MediaApiError> {
    let page = parse_page(raw_query)?;
    let usecase = GetRatingsUseCase {
        repo: state.rating_repo(),
    };
    let ratings = usecase.execute(scope, page).await?;
    Ok(Json(ratings.into_iter().map(Into::into).collect()))
}

// ── GET /ratings ─────────────────────────────────────────────────────────────

pub async fn get_ratings(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<RatingResponse>>, MediaApiError> {
    list(&state, RatingScope::All, raw_query).await
}

// ── GET /ratings/bymedia/{id} ────────────────────────────────────────────────

pub async fn get_ratings_by_media(
    State(state): State<AppState>,
    Path(media_id): Path<i32>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<RatingResponse>>, MediaApiError> {
    list(&state, RatingScope::Media(media_id), raw_query).await
}

// ── GET /ratings/byuser ──────────────────────────────────────────────────────

pub async fn get_my_ratings(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<RatingResponse>>, MediaApiError> {
    list(&state, RatingScope::User(identity.user_id), raw_query).await
}

// ── GET /ratings/bymedia/{id}/me ─────────────────────────────────────────────

pub async fn get_my_rating(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(media_id): Path<i32>,
) -> Result<Json<RatingResponse>, MediaApiError> {
    let usecase = GetRatingUseCase {
        repo: state.rating_repo(),
    };
    let rating = usecase.execute(media_id, identity.user_id).await?;
    Ok(Json(rating.into()))
}

// ── GET /ratings/average/{id} ────────────────────────────────────────────────

pub async fn get_average_rating(
    State(state): State<AppState>,
    Path(media_id): Path<i32>,
) -> Result<Json<AverageResponse>, MediaApiError> {
    let usecase = GetAverageRatingUseCase {
        repo: state.rating_repo(),
    };
    let average = usecase.execute(media_id).await?;
    Ok(Json(AverageResponse { average }))
}

// ── POST /ratings ────────────────────────────────────────────────────────────

pub async fn set_rating(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<SetRatingBody>,
) -> Result<(StatusCode, Json<MessageResponse>), MediaApiError> {
    let usecase = SetRatingUseCase {
        repo: state.rating_repo(),
        media: state.media_repo(),
    };
    let outcome = usecase
        .execute(body.media_id, identity.user_id, body.rating_value)
        .await?;
    Ok(match outcome {
        RatingToggle::Created => (StatusCode::CREATED, message("Rating added")),
        RatingToggle::Deleted | RatingToggle::Unchanged => {
            (StatusCode::OK, message("Rating deleted"))
        }
    })
}

// ── DELETE /ratings/{rating_id} ──────────────────────────────────────────────

pub async fn delete_rating(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(rating_id): Path<i32>,
) -> Result<Json<MessageResponse>, MediaApiError> {
    let usecase = DeleteRatingUseCase {
        repo: state.rating_repo(),
    };
    usecase
        .execute(rating_id, identity.user_id, identity.user_level)
        .await?;
    Ok(message("Rating deleted"))
}
