use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use media_auth_types::identity::IdentityHeaders;

use crate::domain::types::{FollowCreate, UserFollow};
use crate::error::MediaApiError;
use crate::handlers::{CountResponse, MessageResponse, message, parse_page};
use crate::state::AppState;
use crate::usecase::follow::{
    CountFollowsUseCase, CreateFollowUseCase, DeleteFollowUseCase, FollowCount, FollowScope,
    GetFollowUseCase, GetFollowsUseCase,
};

#[derive(Serialize)]
pub struct FollowResponse {
    pub userfollow_id: i32,
    pub follower_id: i32,
    pub followed_id: i32,
    #[serde(serialize_with = "media_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserFollow> for FollowResponse {
    fn from(follow: UserFollow) -> Self {
        Self {
            userfollow_id: follow.userfollow_id,
            follower_id: follow.follower_id,
            followed_id: follow.followed_id,
            created_at: follow.created_at,
        }
    }
}

/// The follower is always the caller; only the followed user comes from the body.
#[derive(Deserialize)]
pub struct CreateFollowBody {
    pub followed_id: i32,
}

async fn list(
    state: &AppState,
    scope: FollowScope,
    raw_query: Option<String>,
) -> Result<Json<Vec<FollowResponse>>, MediaApiError> {
    let page = parse_page(raw_query)?;
    let usecase = GetFollowsUseCase {
        repo: state.follow_repo(),
    };
    let follows = usecase.execute(scope, page).await?;
    Ok(Json(follows.into_iter().map(Into::into).collect()))
}

// ── GET /follows ─────────────────────────────────────────────────────────────

pub async fn get_follows(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<FollowResponse>>, MediaApiError> {
    list(&state, FollowScope::All, raw_query).await
}

// ── GET /follows/followers/{user_id} ─────────────────────────────────────────

pub async fn get_followers(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<FollowResponse>>, MediaApiError> {
    list(&state, FollowScope::FollowersOf(user_id), raw_query).await
}

// ── GET /follows/following/{user_id} ─────────────────────────────────────────

pub async fn get_following(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<FollowResponse>>, MediaApiError> {
    list(&state, FollowScope::FollowingOf(user_id), raw_query).await
}

// ── GET /follows/{follower_id}/{followed_id} ─────────────────────────────────

pub async fn get_follow(
    State(state): State<AppState>,
    Path((follower_id, followed_id)): Path<(i32, i32)>,
) -> Result<Json<FollowResponse>, MediaApiError> {
    let usecase = GetFollowUseCase {
        repo: state.follow_repo(),
    };
    let follow = usecase.execute(follower_id, followed_id).await?;
    Ok(Json(follow.into()))
}

// ── GET /follows/count/user/{followed_id} ────────────────────────────────────

pub async fn get_follower_count(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(followed_id): Path<i32>,
) -> Result<Json<CountResponse>, MediaApiError> {
    let usecase = CountFollowsUseCase {
        repo: state.follow_repo(),
    };
    let count = usecase.execute(FollowCount::Followers(followed_id)).await?;
    Ok(Json(CountResponse { count }))
}

// ── GET /follows/count/following/{follower_id} ───────────────────────────────

pub async fn get_following_count(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(follower_id): Path<i32>,
) -> Result<Json<CountResponse>, MediaApiError> {
    let usecase = CountFollowsUseCase {
        repo: state.follow_repo(),
    };
    let count = usecase.execute(FollowCount::Following(follower_id)).await?;
    Ok(Json(CountResponse { count }))
}

// ── POST /follows ────────────────────────────────────────────────────────────

pub async fn create_follow(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateFollowBody>,
) -> Result<(StatusCode, Json<MessageResponse>), MediaApiError> {
    let usecase = CreateFollowUseCase {
        repo: state.follow_repo(),
    };
    match usecase.execute(identity.user_id, body.followed_id).await? {
        FollowCreate::Created(_) => Ok((StatusCode::CREATED, message("Follow created"))),
        FollowCreate::Rejected(rejection) => Err(rejection.into()),
    }
}

// ── DELETE /follows/{followed_id} ────────────────────────────────────────────

pub async fn delete_follow(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(followed_id): Path<i32>,
) -> Result<Json<MessageResponse>, MediaApiError> {
    let usecase = DeleteFollowUseCase {
        repo: state.follow_repo(),
    };
    usecase.execute(identity.user_id, followed_id).await?;
    Ok(message("Follow deleted"))
}
