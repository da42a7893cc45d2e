use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFollows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserFollows::UserfollowId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserFollows::FollowerId).integer().not_null())
                    .col(
                        ColumnDef::new(UserFollows::FollowedId)
                            .integer()
                            .not_null()
                            .check(
                                Expr::col(UserFollows::FollowerId)
                                    .ne(Expr::col(UserFollows::FollowedId)),
                            ),
                    )
                    .col(
                        ColumnDef::new(UserFollows::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(UserFollows::Table)
                    .col(UserFollows::FollowerId)
                    .col(UserFollows::FollowedId)
                    .unique()
                    .name("idx_user_follows_pair")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFollows::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserFollows {
    Table,
    UserfollowId,
    FollowerId,
    FollowedId,
    CreatedAt,
}
