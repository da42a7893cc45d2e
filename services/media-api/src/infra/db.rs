use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DbErr, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, Value,
    sea_query::{Expr, OnConflict},
};

use media_api_schema::{
    comments, likes, media_item_tags, media_items, ratings, tags, user_follows,
};
use media_domain::pagination::PageRequest;

use crate::domain::repository::{
    CommentRepository, FollowRepository, LikeRepository, MediaRepository, RatingRepository,
    TagRepository,
};
use crate::domain::types::{
    Comment, Like, MediaItem, MediaTag, NewMediaItem, RATING_CLEAR, RATING_MAX, Rating,
    RatingToggle, Tag, UserFollow,
};
use crate::error::MediaApiError;
use crate::infra::gateway::{StorageGateway, Transaction};

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// ── Media repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMediaRepository {
    pub gateway: StorageGateway,
}

impl MediaRepository for DbMediaRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<MediaItem>, MediaApiError> {
        let models = media_items::Entity::find()
            .order_by_desc(media_items::Column::CreatedAt)
            .order_by_desc(media_items::Column::MediaId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list media items")?;
        Ok(models.into_iter().map(media_item_from_model).collect())
    }

    async fn list_by_user(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Vec<MediaItem>, MediaApiError> {
        let models = media_items::Entity::find()
            .filter(media_items::Column::UserId.eq(user_id))
            .order_by_desc(media_items::Column::CreatedAt)
            .order_by_desc(media_items::Column::MediaId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list media items by user")?;
        Ok(models.into_iter().map(media_item_from_model).collect())
    }

    async fn list_by_app(
        &self,
        app_id: &str,
        page: PageRequest,
    ) -> Result<Vec<MediaItem>, MediaApiError> {
        let models = media_items::Entity::find()
            .filter(media_items::Column::AppId.eq(app_id))
            .order_by_desc(media_items::Column::CreatedAt)
            .order_by_desc(media_items::Column::MediaId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list media items by app")?;
        Ok(models.into_iter().map(media_item_from_model).collect())
    }

    async fn find_by_id(&self, media_id: i32) -> Result<Option<MediaItem>, MediaApiError> {
        let model = media_items::Entity::find_by_id(media_id)
            .one(self.gateway.conn())
            .await
            .context("find media item by id")?;
        Ok(model.map(media_item_from_model))
    }

    async fn exists(&self, media_id: i32) -> Result<bool, MediaApiError> {
        let count = media_items::Entity::find_by_id(media_id)
            .count(self.gateway.conn())
            .await
            .context("check media item exists")?;
        Ok(count > 0)
    }

    async fn create(&self, item: &NewMediaItem) -> Result<MediaItem, MediaApiError> {
        let model = media_items::ActiveModel {
            user_id: Set(item.user_id),
            filename: Set(item.filename.clone()),
            thumbnail: Set(item.thumbnail.clone()),
            filesize: Set(item.filesize),
            media_type: Set(item.media_type.clone()),
            title: Set(item.title.clone()),
            description: Set(item.description.clone()),
            ingredients: Set(item.ingredients.clone()),
            app_id: Set(item.app_id.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.gateway.conn())
        .await
        .context("insert media item")?;
        Ok(media_item_from_model(model))
    }

    async fn delete(&self, media_id: i32, owner: Option<i32>) -> Result<bool, MediaApiError> {
        let mut query =
            media_items::Entity::delete_many().filter(media_items::Column::MediaId.eq(media_id));
        if let Some(user_id) = owner {
            query = query.filter(media_items::Column::UserId.eq(user_id));
        }
        let result = query
            .exec(self.gateway.conn())
            .await
            .context("delete media item")?;
        Ok(result.rows_affected > 0)
    }
}

fn media_item_from_model(model: media_items::Model) -> MediaItem {
    MediaItem {
        media_id: model.media_id,
        user_id: model.user_id,
        filename: model.filename,
        thumbnail: model.thumbnail,
        filesize: model.filesize,
        media_type: model.media_type,
        title: model.title,
        description: model.description,
        ingredients: model.ingredients,
        app_id: model.app_id,
        created_at: model.created_at,
    }
}

// ── Comment repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCommentRepository {
    pub gateway: StorageGateway,
}

impl CommentRepository for DbCommentRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Comment>, MediaApiError> {
        let models = comments::Entity::find()
            .order_by_desc(comments::Column::CreatedAt)
            .order_by_desc(comments::Column::CommentId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list comments")?;
        Ok(models.into_iter().map(comment_from_model).collect())
    }

    async fn list_by_media(
        &self,
        media_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Comment>, MediaApiError> {
        let models = comments::Entity::find()
            .filter(comments::Column::MediaId.eq(media_id))
            .order_by_asc(comments::Column::CreatedAt)
            .order_by_asc(comments::Column::CommentId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list comments by media")?;
        Ok(models.into_iter().map(comment_from_model).collect())
    }

    async fn list_by_user(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Comment>, MediaApiError> {
        let models = comments::Entity::find()
            .filter(comments::Column::UserId.eq(user_id))
            .order_by_desc(comments::Column::CreatedAt)
            .order_by_desc(comments::Column::CommentId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list comments by user")?;
        Ok(models.into_iter().map(comment_from_model).collect())
    }

    async fn count_by_media(&self, media_id: i32) -> Result<u64, MediaApiError> {
        let count = comments::Entity::find()
            .filter(comments::Column::MediaId.eq(media_id))
            .count(self.gateway.conn())
            .await
            .context("count comments by media")?;
        Ok(count)
    }

    async fn find_by_id(&self, comment_id: i32) -> Result<Option<Comment>, MediaApiError> {
        let model = comments::Entity::find_by_id(comment_id)
            .one(self.gateway.conn())
            .await
            .context("find comment by id")?;
        Ok(model.map(comment_from_model))
    }

    async fn create(
        &self,
        media_id: i32,
        user_id: i32,
        comment_text: &str,
    ) -> Result<Comment, MediaApiError> {
        let model = comments::ActiveModel {
            media_id: Set(media_id),
            user_id: Set(user_id),
            comment_text: Set(comment_text.to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.gateway.conn())
        .await
        .context("insert comment")?;
        Ok(comment_from_model(model))
    }

    async fn update_text(
        &self,
        comment_id: i32,
        owner: Option<i32>,
        comment_text: &str,
    ) -> Result<bool, MediaApiError> {
        let mut query = comments::Entity::update_many()
            .col_expr(
                comments::Column::CommentText,
                Expr::value(comment_text.to_owned()),
            )
            .filter(comments::Column::CommentId.eq(comment_id));
        if let Some(user_id) = owner {
            query = query.filter(comments::Column::UserId.eq(user_id));
        }
        let result = query
            .exec(self.gateway.conn())
            .await
            .context("update comment text")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, comment_id: i32, owner: Option<i32>) -> Result<bool, MediaApiError> {
        let mut query =
            comments::Entity::delete_many().filter(comments::Column::CommentId.eq(comment_id));
        if let Some(user_id) = owner {
            query = query.filter(comments::Column::UserId.eq(user_id));
        }
        let result = query
            .exec(self.gateway.conn())
            .await
            .context("delete comment")?;
        Ok(result.rows_affected > 0)
    }
}

fn comment_from_model(model: comments::Model) -> Comment {
    Comment {
        comment_id: model.comment_id,
        media_id: model.media_id,
        user_id: model.user_id,
        comment_text: model.comment_text,
        created_at: model.created_at,
    }
}

// ── Like repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLikeRepository {
    pub gateway: StorageGateway,
}

impl LikeRepository for DbLikeRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Like>, MediaApiError> {
        let models = likes::Entity::find()
            .order_by_desc(likes::Column::CreatedAt)
            .order_by_desc(likes::Column::LikeId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list likes")?;
        Ok(models.into_iter().map(like_from_model).collect())
    }

    async fn list_by_media(
        &self,
        media_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Like>, MediaApiError> {
        let models = likes::Entity::find()
            .filter(likes::Column::MediaId.eq(media_id))
            .order_by_desc(likes::Column::CreatedAt)
            .order_by_desc(likes::Column::LikeId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list likes by media")?;
        Ok(models.into_iter().map(like_from_model).collect())
    }

    async fn list_by_user(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Like>, MediaApiError> {
        let models = likes::Entity::find()
            .filter(likes::Column::UserId.eq(user_id))
            .order_by_desc(likes::Column::CreatedAt)
            .order_by_desc(likes::Column::LikeId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list likes by user")?;
        Ok(models.into_iter().map(like_from_model).collect())
    }

    async fn count_by_media(&self, media_id: i32) -> Result<u64, MediaApiError> {
        let count = likes::Entity::find()
            .filter(likes::Column::MediaId.eq(media_id))
            .count(self.gateway.conn())
            .await
            .context("count likes by media")?;
        Ok(count)
    }

    async fn find(&self, media_id: i32, user_id: i32) -> Result<Option<Like>, MediaApiError> {
        let model = likes::Entity::find()
            .filter(likes::Column::MediaId.eq(media_id))
            .filter(likes::Column::UserId.eq(user_id))
            .one(self.gateway.conn())
            .await
            .context("find like")?;
        Ok(model.map(like_from_model))
    }

    async fn create(&self, media_id: i32, user_id: i32) -> Result<Option<Like>, MediaApiError> {
        let result = likes::ActiveModel {
            media_id: Set(media_id),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.gateway.conn())
        .await;
        match result {
            Ok(model) => Ok(Some(like_from_model(model))),
            Err(err) if is_unique_violation(&err) => {
                tracing::info!(media_id, user_id, "duplicate like rejected by unique index");
                Ok(None)
            }
            Err(err) => Err(anyhow::Error::new(err).context("insert like").into()),
        }
    }

    async fn delete(&self, media_id: i32, user_id: i32) -> Result<bool, MediaApiError> {
        let result = likes::Entity::delete_many()
            .filter(likes::Column::MediaId.eq(media_id))
            .filter(likes::Column::UserId.eq(user_id))
            .exec(self.gateway.conn())
            .await
            .context("delete like")?;
        Ok(result.rows_affected > 0)
    }
}

fn like_from_model(model: likes::Model) -> Like {
    Like {
        like_id: model.like_id,
        media_id: model.media_id,
        user_id: model.user_id,
        created_at: model.created_at,
    }
}

// ── Rating repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRatingRepository {
    pub gateway: StorageGateway,
}

impl RatingRepository for DbRatingRepository {
    async fn toggle(
        &self,
        media_id: i32,
        user_id: i32,
        rating_value: u8,
    ) -> Result<RatingToggle, MediaApiError> {
        let txn = self
            .gateway
            .begin("toggle rating")
            .await
            .context("begin rating toggle")?;

        match toggle_rating(&txn, media_id, user_id, rating_value).await {
            Ok(outcome) => {
                txn.commit().await.context("commit rating toggle")?;
                Ok(outcome)
            }
            Err(err) => {
                tracing::error!(
                    media_id,
                    user_id,
                    rating_value,
                    error = %format!("{err:#}"),
                    "rating toggle failed, rolling back"
                );
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(error = %rollback_err, "rating toggle rollback failed");
                }
                Err(err.into())
            }
        }
    }

    async fn delete(&self, rating_id: i32, owner: Option<i32>) -> Result<bool, MediaApiError> {
        let mut query =
            ratings::Entity::delete_many().filter(ratings::Column::RatingId.eq(rating_id));
        if let Some(user_id) = owner {
            query = query.filter(ratings::Column::UserId.eq(user_id));
        }
        let result = query
            .exec(self.gateway.conn())
            .await
            .context("delete rating")?;
        Ok(result.rows_affected > 0)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Rating>, MediaApiError> {
        let models = ratings::Entity::find()
            .order_by_desc(ratings::Column::CreatedAt)
            .order_by_desc(ratings::Column::RatingId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list ratings")?;
        Ok(ratings_from_models(models)?)
    }

    async fn list_by_media(
        &self,
        media_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Rating>, MediaApiError> {
        let models = ratings::Entity::find()
            .filter(ratings::Column::MediaId.eq(media_id))
            .order_by_desc(ratings::Column::CreatedAt)
            .order_by_desc(ratings::Column::RatingId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list ratings by media")?;
        Ok(ratings_from_models(models)?)
    }

    async fn list_by_user(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Rating>, MediaApiError> {
        let models = ratings::Entity::find()
            .filter(ratings::Column::UserId.eq(user_id))
            .order_by_desc(ratings::Column::CreatedAt)
            .order_by_desc(ratings::Column::RatingId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list ratings by user")?;
        Ok(ratings_from_models(models)?)
    }

    async fn find(&self, media_id: i32, user_id: i32) -> Result<Option<Rating>, MediaApiError> {
        let model = ratings::Entity::find()
            .filter(ratings::Column::MediaId.eq(media_id))
            .filter(ratings::Column::UserId.eq(user_id))
            .one(self.gateway.conn())
            .await
            .context("find rating")?;
        Ok(model.map(rating_from_model).transpose()?)
    }

    async fn average(&self, media_id: i32) -> Result<Option<f64>, MediaApiError> {
        #[derive(Debug, FromQueryResult)]
        struct AverageRow {
            average: Option<f64>,
        }

        // AVG over integers is NUMERIC in Postgres; cast so it decodes as f64.
        let rows = self
            .gateway
            .query(
                "SELECT AVG(rating_value)::float8 AS average FROM ratings WHERE media_id = $1",
                [Value::from(media_id)],
            )
            .await
            .context("average rating by media")?;
        let average = match rows.first() {
            Some(row) => {
                AverageRow::from_query_result(row, "")
                    .context("decode average rating")?
                    .average
            }
            None => None,
        };
        Ok(average)
    }
}

/// Steps of the toggle. Runs on `txn`; the caller commits or rolls back.
async fn toggle_rating(
    txn: &Transaction,
    media_id: i32,
    user_id: i32,
    rating_value: u8,
) -> anyhow::Result<RatingToggle> {
    let conn = txn.conn();

    // Toggles on one (media, user) pair run one at a time from here to commit,
    // whether or not a row exists yet.
    txn.advisory_lock(media_id, user_id)
        .await
        .context("lock rating pair")?;

    let existing = ratings::Entity::find()
        .filter(ratings::Column::MediaId.eq(media_id))
        .filter(ratings::Column::UserId.eq(user_id))
        .lock_exclusive()
        .one(conn)
        .await
        .context("lock existing rating")?;

    let removed = match existing {
        Some(row) => {
            ratings::Entity::delete_by_id(row.rating_id)
                .exec(conn)
                .await
                .context("delete previous rating")?;
            true
        }
        None => false,
    };

    if rating_value == RATING_CLEAR {
        return Ok(if removed {
            RatingToggle::Deleted
        } else {
            RatingToggle::Unchanged
        });
    }

    let inserted = ratings::Entity::insert(ratings::ActiveModel {
        media_id: Set(media_id),
        user_id: Set(user_id),
        rating_value: Set(i16::from(rating_value)),
        created_at: Set(Utc::now()),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::columns([ratings::Column::MediaId, ratings::Column::UserId])
            .do_nothing()
            .to_owned(),
    )
    .exec_without_returning(conn)
    .await
    .context("insert rating")?;
    if inserted == 0 {
        anyhow::bail!("rating insert affected no rows");
    }

    ratings::Entity::find()
        .filter(ratings::Column::MediaId.eq(media_id))
        .filter(ratings::Column::UserId.eq(user_id))
        .one(conn)
        .await
        .context("re-read inserted rating")?
        .context("inserted rating missing on re-read")?;

    Ok(RatingToggle::Created)
}

fn rating_from_model(model: ratings::Model) -> anyhow::Result<Rating> {
    let rating_value = u8::try_from(model.rating_value)
        .ok()
        .filter(|v| (1..=RATING_MAX).contains(v))
        .with_context(|| {
            format!(
                "rating {} has out-of-range value {}",
                model.rating_id, model.rating_value
            )
        })?;
    Ok(Rating {
        rating_id: model.rating_id,
        media_id: model.media_id,
        user_id: model.user_id,
        rating_value,
        created_at: model.created_at,
    })
}

fn ratings_from_models(models: Vec<ratings::Model>) -> anyhow::Result<Vec<Rating>> {
    models.into_iter().map(rating_from_model).collect()
}

// ── Follow repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFollowRepository {
    pub gateway: StorageGateway,
}

impl FollowRepository for DbFollowRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<UserFollow>, MediaApiError> {
        let models = user_follows::Entity::find()
            .order_by_desc(user_follows::Column::CreatedAt)
            .order_by_desc(user_follows::Column::UserfollowId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list user follows")?;
        Ok(models.into_iter().map(follow_from_model).collect())
    }

    async fn list_followers(
        &self,
        followed_id: i32,
        page: PageRequest,
    ) -> Result<Vec<UserFollow>, MediaApiError> {
        let models = user_follows::Entity::find()
            .filter(user_follows::Column::FollowedId.eq(followed_id))
            .order_by_desc(user_follows::Column::CreatedAt)
            .order_by_desc(user_follows::Column::UserfollowId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list followers")?;
        Ok(models.into_iter().map(follow_from_model).collect())
    }

    async fn list_following(
        &self,
        follower_id: i32,
        page: PageRequest,
    ) -> Result<Vec<UserFollow>, MediaApiError> {
        let models = user_follows::Entity::find()
            .filter(user_follows::Column::FollowerId.eq(follower_id))
            .order_by_desc(user_follows::Column::CreatedAt)
            .order_by_desc(user_follows::Column::UserfollowId)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list following")?;
        Ok(models.into_iter().map(follow_from_model).collect())
    }

    async fn find(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<Option<UserFollow>, MediaApiError> {
        let model = user_follows::Entity::find()
            .filter(user_follows::Column::FollowerId.eq(follower_id))
            .filter(user_follows::Column::FollowedId.eq(followed_id))
            .one(self.gateway.conn())
            .await
            .context("find user follow")?;
        Ok(model.map(follow_from_model))
    }

    async fn create(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<Option<UserFollow>, MediaApiError> {
        let result = user_follows::ActiveModel {
            follower_id: Set(follower_id),
            followed_id: Set(followed_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.gateway.conn())
        .await;
        match result {
            Ok(model) => Ok(Some(follow_from_model(model))),
            Err(err) if is_unique_violation(&err) => {
                tracing::info!(
                    follower_id,
                    followed_id,
                    "duplicate follow rejected by unique index"
                );
                Ok(None)
            }
            Err(err) => Err(anyhow::Error::new(err).context("insert user follow").into()),
        }
    }

    async fn delete(&self, follower_id: i32, followed_id: i32) -> Result<bool, MediaApiError> {
        let affected = self
            .gateway
            .execute(
                "DELETE FROM user_follows WHERE follower_id = $1 AND followed_id = $2",
                [Value::from(follower_id), Value::from(followed_id)],
            )
            .await
            .context("delete user follow")?;
        Ok(affected > 0)
    }

    async fn count_followers(&self, followed_id: i32) -> Result<u64, MediaApiError> {
        let count = user_follows::Entity::find()
            .filter(user_follows::Column::FollowedId.eq(followed_id))
            .count(self.gateway.conn())
            .await
            .context("count followers")?;
        Ok(count)
    }

    async fn count_following(&self, follower_id: i32) -> Result<u64, MediaApiError> {
        let count = user_follows::Entity::find()
            .filter(user_follows::Column::FollowerId.eq(follower_id))
            .count(self.gateway.conn())
            .await
            .context("count following")?;
        Ok(count)
    }
}

fn follow_from_model(model: user_follows::Model) -> UserFollow {
    UserFollow {
        userfollow_id: model.userfollow_id,
        follower_id: model.follower_id,
        followed_id: model.followed_id,
        created_at: model.created_at,
    }
}

// ── Tag repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTagRepository {
    pub gateway: StorageGateway,
}

impl TagRepository for DbTagRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Tag>, MediaApiError> {
        let models = tags::Entity::find()
            .order_by_asc(tags::Column::TagName)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.gateway.conn())
            .await
            .context("list tags")?;
        Ok(models.into_iter().map(tag_from_model).collect())
    }

    async fn list_by_media(&self, media_id: i32) -> Result<Vec<MediaTag>, MediaApiError> {
        #[derive(Debug, FromQueryResult)]
        struct MediaTagRow {
            media_id: i32,
            tag_id: i32,
            tag_name: String,
        }

        let rows = self
            .gateway
            .query(
                "SELECT mt.media_id, t.tag_id, t.tag_name \
                 FROM media_item_tags mt JOIN tags t ON t.tag_id = mt.tag_id \
                 WHERE mt.media_id = $1 ORDER BY t.tag_name",
                [Value::from(media_id)],
            )
            .await
            .context("list tags by media")?;
        let tags = rows
            .iter()
            .map(|row| {
                MediaTagRow::from_query_result(row, "").map(|row| MediaTag {
                    media_id: row.media_id,
                    tag_id: row.tag_id,
                    tag_name: row.tag_name,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .context("decode media tag")?;
        Ok(tags)
    }

    async fn find_or_create(&self, tag_name: &str) -> Result<Tag, MediaApiError> {
        let conn = self.gateway.conn();
        tags::Entity::insert(tags::ActiveModel {
            tag_name: Set(tag_name.to_owned()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(tags::Column::TagName)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
        .context("insert tag")?;

        let model = tags::Entity::find()
            .filter(tags::Column::TagName.eq(tag_name))
            .one(conn)
            .await
            .context("find tag by name")?
            .context("tag missing after insert")?;
        Ok(tag_from_model(model))
    }

    async fn attach(&self, media_id: i32, tag_id: i32) -> Result<bool, MediaApiError> {
        let inserted = media_item_tags::Entity::insert(media_item_tags::ActiveModel {
            media_id: Set(media_id),
            tag_id: Set(tag_id),
        })
        .on_conflict(
            OnConflict::columns([
                media_item_tags::Column::MediaId,
                media_item_tags::Column::TagId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.gateway.conn())
        .await
        .context("attach tag to media")?;
        Ok(inserted > 0)
    }

    async fn detach(&self, media_id: i32, tag_id: i32) -> Result<bool, MediaApiError> {
        let result = media_item_tags::Entity::delete_many()
            .filter(media_item_tags::Column::MediaId.eq(media_id))
            .filter(media_item_tags::Column::TagId.eq(tag_id))
            .exec(self.gateway.conn())
            .await
            .context("detach tag from media")?;
        Ok(result.rows_affected > 0)
    }
}

fn tag_from_model(model: tags::Model) -> Tag {
    Tag {
        tag_id: model.tag_id,
        tag_name: model.tag_name,
    }
}
