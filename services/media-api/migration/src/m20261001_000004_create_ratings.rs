use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ratings::RatingId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ratings::MediaId).integer().not_null())
                    .col(ColumnDef::new(Ratings::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Ratings::RatingValue)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(Ratings::RatingValue).between(1, 5)),
                    )
                    .col(
                        ColumnDef::new(Ratings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Ratings::Table, Ratings::MediaId)
                            .to(MediaItems::Table, MediaItems::MediaId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        // Target of the toggle's ON CONFLICT clause.
        manager
            .create_index(
                Index::create()
                    .table(Ratings::Table)
                    .col(Ratings::MediaId)
                    .col(Ratings::UserId)
                    .unique()
                    .name("idx_ratings_media_user")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Ratings {
    Table,
    RatingId,
    MediaId,
    UserId,
    RatingValue,
    CreatedAt,
}

#[derive(Iden)]
enum MediaItems {
    Table,
    MediaId,
}
