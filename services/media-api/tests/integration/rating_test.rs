use media_api::domain::types::RatingToggle;
use media_api::error::MediaApiError;
use media_api::usecase::rating::{
    DeleteRatingUseCase, GetAverageRatingUseCase, GetRatingsUseCase, RatingScope,
    SetRatingUseCase,
};
use media_domain::pagination::PageRequest;
use media_domain::user::UserLevel;

use crate::helpers::{InMemoryMedia, InMemoryRatings};

fn set_rating(ratings: &InMemoryRatings) -> SetRatingUseCase<InMemoryRatings, InMemoryMedia> {
    SetRatingUseCase {
        repo: ratings.clone(),
        media: InMemoryMedia::with_ids(&[7, 8]),
    }
}

// ── SetRatingUseCase ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_leave_exactly_one_row_with_latest_value() {
    let ratings = InMemoryRatings::default();
    let uc = set_rating(&ratings);

    for value in 1..=5 {
        let outcome = uc.execute(7, 42, value).await.unwrap();
        assert_eq!(outcome, RatingToggle::Created);

        let rows = ratings.rows_for(7, 42);
        assert_eq!(rows.len(), 1);
        assert_eq!(i64::from(rows[0].rating_value), value);
    }
}

#[tokio::test]
async fn should_remove_row_on_clear_after_any_prior_rating() {
    let ratings = InMemoryRatings::default();
    let uc = set_rating(&ratings);

    uc.execute(7, 42, 4).await.unwrap();
    let outcome = uc.execute(7, 42, 0).await.unwrap();

    assert_eq!(outcome, RatingToggle::Deleted);
    assert!(ratings.rows_for(7, 42).is_empty());
}

#[tokio::test]
async fn should_report_second_clear_as_unchanged() {
    let ratings = InMemoryRatings::default();
    let uc = set_rating(&ratings);

    uc.execute(7, 42, 2).await.unwrap();
    assert_eq!(uc.execute(7, 42, 0).await.unwrap(), RatingToggle::Deleted);
    assert_eq!(uc.execute(7, 42, 0).await.unwrap(), RatingToggle::Unchanged);
    assert!(ratings.rows_for(7, 42).is_empty());
}

#[tokio::test]
async fn should_keep_ratings_of_other_users_and_media() {
    let ratings = InMemoryRatings::default();
    let uc = set_rating(&ratings);

    uc.execute(7, 42, 5).await.unwrap();
    uc.execute(7, 43, 1).await.unwrap();
    uc.execute(8, 42, 3).await.unwrap();
    uc.execute(7, 42, 0).await.unwrap();

    assert!(ratings.rows_for(7, 42).is_empty());
    assert_eq!(ratings.rows_for(7, 43).len(), 1);
    assert_eq!(ratings.rows_for(8, 42).len(), 1);
}

#[tokio::test]
async fn should_not_leave_two_rows_after_simultaneous_toggles() {
    let ratings = InMemoryRatings::default();
    let first = set_rating(&ratings);
    let second = set_rating(&ratings);

    let (a, b) = tokio::join!(first.execute(7, 42, 2), second.execute(7, 42, 5));
    a.unwrap();
    b.unwrap();

    let rows = ratings.rows_for(7, 42);
    assert_eq!(rows.len(), 1);
    assert!(matches!(rows[0].rating_value, 2 | 5));
}

#[tokio::test]
async fn should_reject_rating_for_unknown_media() {
    let ratings = InMemoryRatings::default();
    let uc = set_rating(&ratings);

    let result = uc.execute(99, 42, 3).await;
    assert!(
        matches!(result, Err(MediaApiError::MediaNotFound)),
        "expected MediaNotFound, got {result:?}"
    );
}

// ── GetAverageRatingUseCase ──────────────────────────────────────────────────

#[tokio::test]
async fn should_average_three_and_five_to_four() {
    let ratings = InMemoryRatings::default();
    let uc = set_rating(&ratings);
    uc.execute(7, 1, 3).await.unwrap();
    uc.execute(7, 2, 5).await.unwrap();

    let average = GetAverageRatingUseCase {
        repo: ratings.clone(),
    };
    assert_eq!(average.execute(7).await.unwrap(), 4.0);
}

#[tokio::test]
async fn should_report_absent_average_instead_of_zero() {
    let average = GetAverageRatingUseCase {
        repo: InMemoryRatings::default(),
    };
    let result = average.execute(7).await;
    assert!(
        matches!(result, Err(MediaApiError::NoRatingsFound)),
        "expected NoRatingsFound, got {result:?}"
    );
}

// ── DeleteRatingUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_hide_foreign_rating_from_user_but_not_admin() {
    let ratings = InMemoryRatings::default();
    set_rating(&ratings).execute(7, 42, 4).await.unwrap();
    let rating_id = ratings.rows_for(7, 42)[0].rating_id;

    let uc = DeleteRatingUseCase {
        repo: ratings.clone(),
    };

    let result = uc.execute(rating_id, 99, UserLevel::User).await;
    assert!(matches!(result, Err(MediaApiError::RatingNotFound)));
    assert_eq!(ratings.rows_for(7, 42).len(), 1);

    uc.execute(rating_id, 99, UserLevel::Admin).await.unwrap();
    assert!(ratings.rows_for(7, 42).is_empty());
}

#[tokio::test]
async fn should_let_owner_delete_own_rating() {
    let ratings = InMemoryRatings::default();
    set_rating(&ratings).execute(7, 42, 4).await.unwrap();
    let rating_id = ratings.rows_for(7, 42)[0].rating_id;

    let uc = DeleteRatingUseCase {
        repo: ratings.clone(),
    };
    uc.execute(rating_id, 42, UserLevel::User).await.unwrap();
    assert!(ratings.rows_for(7, 42).is_empty());
}

// ── GetRatingsUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_empty_list_for_unrated_media() {
    let uc = GetRatingsUseCase {
        repo: InMemoryRatings::default(),
    };
    let rows = uc
        .execute(RatingScope::Media(7), PageRequest::default())
        .await
        .unwrap();
    assert!(rows.is_empty());
}
