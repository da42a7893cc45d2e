use media_api::domain::types::{FollowCreate, FollowRejection};
use media_api::error::MediaApiError;
use media_api::usecase::follow::{
    CountFollowsUseCase, CreateFollowUseCase, DeleteFollowUseCase, FollowCount, FollowScope,
    GetFollowUseCase, GetFollowsUseCase,
};
use media_domain::pagination::PageRequest;

use crate::helpers::InMemoryFollows;

// ── CreateFollowUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_always_reject_self_follow() {
    let follows = InMemoryFollows::default();
    let uc = CreateFollowUseCase {
        repo: follows.clone(),
    };

    for user_id in [1, 2, 500] {
        let outcome = uc.execute(user_id, user_id).await.unwrap();
        assert_eq!(outcome, FollowCreate::Rejected(FollowRejection::SelfFollow));
    }
    assert!(follows.edges.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_second_follow_of_same_pair() {
    let uc = CreateFollowUseCase {
        repo: InMemoryFollows::default(),
    };

    assert!(matches!(
        uc.execute(1, 2).await.unwrap(),
        FollowCreate::Created(_)
    ));
    assert_eq!(
        uc.execute(1, 2).await.unwrap(),
        FollowCreate::Rejected(FollowRejection::AlreadyExists)
    );
}

#[tokio::test]
async fn should_treat_reverse_edge_as_distinct() {
    let uc = CreateFollowUseCase {
        repo: InMemoryFollows::default(),
    };

    assert!(matches!(
        uc.execute(1, 2).await.unwrap(),
        FollowCreate::Created(_)
    ));
    assert!(matches!(
        uc.execute(2, 1).await.unwrap(),
        FollowCreate::Created(_)
    ));
}

#[tokio::test]
async fn should_map_rejections_to_conflict_errors() {
    let self_follow: MediaApiError = FollowRejection::SelfFollow.into();
    let duplicate: MediaApiError = FollowRejection::AlreadyExists.into();
    assert_eq!(self_follow.kind(), "SELF_FOLLOW");
    assert_eq!(duplicate.kind(), "FOLLOW_ALREADY_EXISTS");
}

// ── Delete / Get / Count ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_existing_edge_then_report_not_found() {
    let follows = InMemoryFollows::default();
    CreateFollowUseCase {
        repo: follows.clone(),
    }
    .execute(1, 2)
    .await
    .unwrap();

    let uc = DeleteFollowUseCase {
        repo: follows.clone(),
    };
    uc.execute(1, 2).await.unwrap();
    let result = uc.execute(1, 2).await;
    assert!(matches!(result, Err(MediaApiError::FollowNotFound)));

    let get = GetFollowUseCase { repo: follows };
    assert!(matches!(
        get.execute(1, 2).await,
        Err(MediaApiError::FollowNotFound)
    ));
}

#[tokio::test]
async fn should_count_followers_and_following() {
    let follows = InMemoryFollows::default();
    let create = CreateFollowUseCase {
        repo: follows.clone(),
    };
    create.execute(1, 3).await.unwrap();
    create.execute(2, 3).await.unwrap();
    create.execute(3, 1).await.unwrap();

    let count = CountFollowsUseCase {
        repo: follows.clone(),
    };
    assert_eq!(count.execute(FollowCount::Followers(3)).await.unwrap(), 2);
    assert_eq!(count.execute(FollowCount::Following(3)).await.unwrap(), 1);
    assert_eq!(count.execute(FollowCount::Followers(9)).await.unwrap(), 0);

    let list = GetFollowsUseCase { repo: follows };
    let followers = list
        .execute(FollowScope::FollowersOf(3), PageRequest::default())
        .await
        .unwrap();
    let mut follower_ids: Vec<i32> = followers.iter().map(|f| f.follower_id).collect();
    follower_ids.sort();
    assert_eq!(follower_ids, vec![1, 2]);
}
