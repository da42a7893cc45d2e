use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(MediaItems::Table)
                    .col(MediaItems::AppId)
                    .name("idx_media_items_app_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Comments::Table)
                    .col(Comments::MediaId)
                    .name("idx_comments_media_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Ratings::Table)
                    .col(Ratings::UserId)
                    .name("idx_ratings_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(UserFollows::Table)
                    .col(UserFollows::FollowedId)
                    .name("idx_user_follows_followed_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_user_follows_followed_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_ratings_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_comments_media_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_media_items_app_id").to_owned())
            .await
    }
}

#[derive(Iden)]
enum MediaItems {
    Table,
    AppId,
}

#[derive(Iden)]
enum Comments {
    Table,
    MediaId,
}

#[derive(Iden)]
enum Ratings {
    Table,
    UserId,
}

#[derive(Iden)]
enum UserFollows {
    Table,
    FollowedId,
}
