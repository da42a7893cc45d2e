use sea_orm::entity::prelude::*;

/// Metadata for an uploaded media file. The file itself lives with the upload service.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub media_id: i32,
    pub user_id: i32,
    pub filename: String,
    pub thumbnail: Option<String>,
    pub filesize: i64,
    pub media_type: String,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub app_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
    #[sea_orm(has_many = "super::likes::Entity")]
    Likes,
    #[sea_orm(has_many = "super::media_item_tags::Entity")]
    MediaItemTags,
    #[sea_orm(has_many = "super::ratings::Entity")]
    Ratings,
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::likes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl Related<super::media_item_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaItemTags.def()
    }
}

impl Related<super::ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
