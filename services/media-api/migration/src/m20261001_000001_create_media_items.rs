use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MediaItems::MediaId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MediaItems::UserId).integer().not_null())
                    .col(ColumnDef::new(MediaItems::Filename).string().not_null())
                    .col(ColumnDef::new(MediaItems::Thumbnail).string().null())
                    .col(ColumnDef::new(MediaItems::Filesize).big_integer().not_null())
                    .col(ColumnDef::new(MediaItems::MediaType).string().not_null())
                    .col(ColumnDef::new(MediaItems::Title).string().not_null())
                    .col(ColumnDef::new(MediaItems::Description).text().null())
                    .col(ColumnDef::new(MediaItems::Ingredients).text().null())
                    .col(ColumnDef::new(MediaItems::AppId).string().not_null())
                    .col(
                        ColumnDef::new(MediaItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MediaItems {
    Table,
    MediaId,
    UserId,
    Filename,
    Thumbnail,
    Filesize,
    MediaType,
    Title,
    Description,
    Ingredients,
    AppId,
    CreatedAt,
}
