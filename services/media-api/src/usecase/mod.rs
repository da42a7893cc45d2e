pub mod comment;
pub mod follow;
pub mod like;
pub mod media;
pub mod rating;
pub mod tag;
