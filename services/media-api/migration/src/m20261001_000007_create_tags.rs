use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tags::TagId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Tags::TagName)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_table(
                Table::create()
                    .table(MediaItemTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MediaItemTags::MediaId).integer().not_null())
                    .col(ColumnDef::new(MediaItemTags::TagId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(MediaItemTags::MediaId)
                            .col(MediaItemTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MediaItemTags::Table, MediaItemTags::MediaId)
                            .to(MediaItems::Table, MediaItems::MediaId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MediaItemTags::Table, MediaItemTags::TagId)
                            .to(Tags::Table, Tags::TagId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(MediaItemTags::Table)
                    .col(MediaItemTags::TagId)
                    .name("idx_media_item_tags_tag_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaItemTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Tags {
    Table,
    TagId,
    TagName,
}

#[derive(Iden)]
enum MediaItemTags {
    Table,
    MediaId,
    TagId,
}

#[derive(Iden)]
enum MediaItems {
    Table,
    MediaId,
}
