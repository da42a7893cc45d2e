//! Runs against a real PostgreSQL database. Set `TEST_DATABASE_URL` to a
//! disposable database and run with `--ignored`; the schema is dropped and
//! recreated once per test binary.

use sea_orm::{ColumnTrait, Database, EntityTrait, PaginatorTrait, QueryFilter};
use sea_orm_migration::MigratorTrait;
use tokio::sync::OnceCell;

use media_api::domain::repository::{
    FollowRepository, LikeRepository, MediaRepository, RatingRepository,
};
use media_api::domain::types::{MediaItem, NewMediaItem, RatingToggle};
use media_api::state::AppState;
use media_api_migration::Migrator;
use media_api_schema::ratings;

static SCHEMA: OnceCell<()> = OnceCell::const_new();

async fn connect() -> AppState {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL");
    let db = Database::connect(&url).await.unwrap();
    SCHEMA
        .get_or_init(|| async { Migrator::fresh(&db).await.unwrap() })
        .await;
    AppState::new(db)
}

async fn seed_media(state: &AppState, title: &str) -> MediaItem {
    state
        .media_repo()
        .create(&NewMediaItem {
            user_id: 1,
            filename: format!("{title}.jpg"),
            thumbnail: None,
            filesize: 1,
            media_type: "image/jpeg".to_owned(),
            title: title.to_owned(),
            description: None,
            ingredients: None,
            app_id: "pg-tests".to_owned(),
        })
        .await
        .unwrap()
}

async fn rating_rows(state: &AppState, media_id: i32, user_id: i32) -> Vec<ratings::Model> {
    ratings::Entity::find()
        .filter(ratings::Column::MediaId.eq(media_id))
        .filter(ratings::Column::UserId.eq(user_id))
        .all(state.gateway.conn())
        .await
        .unwrap()
}

/// Starts both toggles on separate worker threads so they really overlap.
async fn race(state: &AppState, media_id: i32, user_id: i32) -> [RatingToggle; 2] {
    let first = state.rating_repo();
    let second = state.rating_repo();
    let a = tokio::spawn(async move { first.toggle(media_id, user_id, 2).await });
    let b = tokio::spawn(async move { second.toggle(media_id, user_id, 5).await });
    [
        a.await.unwrap().expect("first toggle"),
        b.await.unwrap().expect("second toggle"),
    ]
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires TEST_DATABASE_URL"]
async fn should_serialize_first_ratings_for_one_pair() {
    let state = connect().await;
    let media = seed_media(&state, "first-insert-race").await;

    for round in 0..25 {
        let outcomes = race(&state, media.media_id, 42).await;
        assert_eq!(
            outcomes,
            [RatingToggle::Created, RatingToggle::Created],
            "round {round}"
        );

        let rows = rating_rows(&state, media.media_id, 42).await;
        assert_eq!(rows.len(), 1, "round {round}: {rows:?}");

        let cleared = state
            .rating_repo()
            .toggle(media.media_id, 42, 0)
            .await
            .unwrap();
        assert_eq!(cleared, RatingToggle::Deleted);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires TEST_DATABASE_URL"]
async fn should_replace_existing_rating_under_contention() {
    let state = connect().await;
    let media = seed_media(&state, "replace-race").await;
    state
        .rating_repo()
        .toggle(media.media_id, 43, 3)
        .await
        .unwrap();

    for round in 0..25 {
        let outcomes = race(&state, media.media_id, 43).await;
        assert_eq!(
            outcomes,
            [RatingToggle::Created, RatingToggle::Created],
            "round {round}"
        );

        let rows = rating_rows(&state, media.media_id, 43).await;
        assert_eq!(rows.len(), 1, "round {round}: {rows:?}");
        assert!(matches!(rows[0].rating_value, 2 | 5), "round {round}");
    }

    let total = ratings::Entity::find()
        .filter(ratings::Column::MediaId.eq(media.media_id))
        .count(state.gateway.conn())
        .await
        .unwrap();
    assert_eq!(total, 1);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn should_turn_duplicate_like_into_none() {
    let state = connect().await;
    let media = seed_media(&state, "duplicate-like").await;
    let likes = state.like_repo();

    let first = likes.create(media.media_id, 42).await.unwrap();
    assert!(first.is_some());
    let second = likes.create(media.media_id, 42).await.unwrap();
    assert!(second.is_none());
    assert_eq!(likes.count_by_media(media.media_id).await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn should_turn_duplicate_follow_into_none() {
    let state = connect().await;
    let follows = state.follow_repo();

    let first = follows.create(901, 902).await.unwrap();
    assert!(first.is_some());
    let second = follows.create(901, 902).await.unwrap();
    assert!(second.is_none());
    assert_eq!(follows.count_followers(902).await.unwrap(), 1);
}
