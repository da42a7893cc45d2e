use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub tag_id: i32,
    #[sea_orm(unique)]
    pub tag_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::media_item_tags::Entity")]
    MediaItemTags,
}

impl Related<super::media_item_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaItemTags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
