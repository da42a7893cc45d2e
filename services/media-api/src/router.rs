use axum::{
    Router,
    routing::{delete, get},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use media_core::error::not_found;
use media_core::health::healthz;
use media_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    comment::{
        delete_comment, get_comment, get_comment_count, get_comments, get_comments_by_media,
        get_my_comments, post_comment, update_comment,
    },
    follow::{
        create_follow, delete_follow, get_follow, get_follower_count, get_followers,
        get_following, get_following_count, get_follows,
    },
    health::readyz,
    like::{delete_like, get_like_count, get_likes, get_likes_by_media, get_my_likes, post_like},
    media::{
        delete_media, get_media, get_media_by_app, get_media_by_user, get_media_list, post_media,
    },
    rating::{
        delete_rating, get_average_rating, get_my_rating, get_my_ratings, get_ratings,
        get_ratings_by_media, set_rating,
    },
    tag::{delete_media_tag, get_tags, get_tags_by_media, post_tag},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Media
        .route("/media", get(get_media_list).post(post_media))
        .route("/media/byuser/{user_id}", get(get_media_by_user))
        .route("/media/app/{app_id}", get(get_media_by_app))
        .route("/media/{id}", get(get_media).delete(delete_media))
        // Ratings
        .route("/ratings", get(get_ratings).post(set_rating))
        .route("/ratings/byuser", get(get_my_ratings))
        .route("/ratings/bymedia/{id}", get(get_ratings_by_media))
        .route("/ratings/bymedia/{id}/me", get(get_my_rating))
        .route("/ratings/average/{id}", get(get_average_rating))
        .route("/ratings/{rating_id}", delete(delete_rating))
        // Likes
        .route("/likes", get(get_likes).post(post_like))
        .route("/likes/byuser", get(get_my_likes))
        .route("/likes/bymedia/{media_id}", get(get_likes_by_media))
        .route("/likes/count/{media_id}", get(get_like_count))
        .route("/likes/{media_id}", delete(delete_like))
        // Comments
        .route("/comments", get(get_comments).post(post_comment))
        .route("/comments/byuser", get(get_my_comments))
        .route("/comments/bymedia/{id}", get(get_comments_by_media))
        .route("/comments/count/{id}", get(get_comment_count))
        .route(
            "/comments/{id}",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
        // Follows
        .route("/follows", get(get_follows).post(create_follow))
        .route("/follows/count/user/{followed_id}", get(get_follower_count))
        .route(
            "/follows/count/following/{follower_id}",
            get(get_following_count),
        )
        .route("/follows/followers/{user_id}", get(get_followers))
        .route("/follows/following/{user_id}", get(get_following))
        // Both share the first segment, so the parameter name must match.
        // DELETE takes the followed user; GET takes the follower first.
        .route("/follows/{id}", delete(delete_follow))
        .route("/follows/{id}/{followed_id}", get(get_follow))
        // Tags
        .route("/tags", get(get_tags).post(post_tag))
        .route("/tags/bymedia/{id}", get(get_tags_by_media))
        .route("/tags/bymedia/{id}/{tag_id}", delete(delete_media_tag))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
