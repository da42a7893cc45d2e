//! sea-orm entities for the media API tables.

pub mod comments;
pub mod likes;
pub mod media_item_tags;
pub mod media_items;
pub mod ratings;
pub mod tags;
pub mod user_follows;
