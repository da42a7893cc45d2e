use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, Value};
use serde_json::{Value as Json, json};

use media_api::router::build_router;
use media_api_schema::media_items;
use media_api::state::AppState;
use media_testing::auth::MockAuth;

fn server(db: MockDatabase) -> TestServer {
    let state = AppState::new(db.into_connection());
    TestServer::new(build_router(state)).unwrap()
}

fn empty_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

fn media_row(media_id: i32, user_id: i32, app_id: &str) -> media_items::Model {
    media_items::Model {
        media_id,
        user_id,
        filename: format!("media-{media_id}.jpg"),
        thumbnail: None,
        filesize: 1024,
        media_type: "image/jpeg".to_owned(),
        title: format!("Media {media_id}"),
        description: None,
        ingredients: Some("flour, water".to_owned()),
        app_id: app_id.to_owned(),
        created_at: Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).unwrap(),
    }
}

fn with_identity(
    mut request: axum_test::TestRequest,
    auth: MockAuth,
) -> axum_test::TestRequest {
    for (name, value) in auth.header_pairs() {
        request = request.add_header(name, value);
    }
    request
}

#[tokio::test]
async fn should_answer_liveness_and_readiness() {
    let server = server(empty_db());

    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_render_json_not_found_for_unknown_path() {
    let server = server(empty_db());

    let response = server.get("/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Json>()["kind"], "NOT_FOUND");
}

#[tokio::test]
async fn should_reject_mutation_without_identity() {
    let server = server(empty_db());

    let response = server
        .post("/ratings")
        .json(&json!({ "media_id": 7, "rating_value": 3 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Json>()["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_reject_out_of_range_rating_value() {
    let server = server(empty_db());

    let request = server
        .post("/ratings")
        .json(&json!({ "media_id": 7, "rating_value": 9 }));
    let response = with_identity(request, MockAuth::user(42)).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Json>();
    assert_eq!(body["kind"], "INVALID_RATING_VALUE");
    assert_eq!(body["message"], "rating value must be between 0 and 5");
}

#[tokio::test]
async fn should_reject_self_follow_with_conflict() {
    let server = server(empty_db());

    let request = server.post("/follows").json(&json!({ "followed_id": 42 }));
    let response = with_identity(request, MockAuth::user(42)).await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(response.json::<Json>()["kind"], "SELF_FOLLOW");
}

#[tokio::test]
async fn should_return_average_rating() {
    let db = empty_db().append_query_results([vec![BTreeMap::from([(
        "average",
        Value::Double(Some(4.0)),
    )])]]);
    let server = server(db);

    let response = server.get("/ratings/average/7").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Json>(), json!({ "average": 4.0 }));
}

#[tokio::test]
async fn should_return_not_found_when_media_has_no_ratings() {
    let db = empty_db().append_query_results([vec![BTreeMap::from([(
        "average",
        Value::Double(None),
    )])]]);
    let server = server(db);

    let response = server.get("/ratings/average/7").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Json>()["kind"], "NO_RATINGS_FOUND");
}

#[tokio::test]
async fn should_reject_malformed_pagination() {
    let server = server(empty_db());

    let response = server.get("/comments").add_query_param("page", "abc").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Json>()["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_require_identity_for_follow_counts() {
    let server = server(empty_db());

    for path in ["/follows/count/user/7", "/follows/count/following/7"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn should_count_followers_for_authenticated_caller() {
    let db = empty_db().append_query_results([vec![BTreeMap::from([(
        "num_items",
        Value::BigInt(Some(3)),
    )])]]);
    let server = server(db);

    let response = with_identity(server.get("/follows/count/user/7"), MockAuth::user(42)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Json>(), json!({ "count": 3 }));
}

#[tokio::test]
async fn should_list_media_of_one_app() {
    let db = empty_db().append_query_results([vec![media_row(7, 1, "recipes")]]);
    let server = server(db);

    let response = server.get("/media/app/recipes").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Json>();
    assert_eq!(body[0]["media_id"], 7);
    assert_eq!(body[0]["app_id"], "recipes");
    assert_eq!(body[0]["ingredients"], "flour, water");
}

#[tokio::test]
async fn should_reject_blank_tag_name() {
    let server = server(empty_db());

    let request = server
        .post("/tags")
        .json(&json!({ "media_id": 7, "tag_name": "  " }));
    let response = with_identity(request, MockAuth::user(42)).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Json>()["kind"], "INVALID_TAG_NAME");
}

#[tokio::test]
async fn should_hide_media_from_non_owner_removing_tag() {
    let db = empty_db().append_query_results([vec![media_row(7, 1, "photos")]]);
    let server = server(db);

    let response = with_identity(server.delete("/tags/bymedia/7/3"), MockAuth::user(42)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Json>()["kind"], "MEDIA_NOT_FOUND");
}
