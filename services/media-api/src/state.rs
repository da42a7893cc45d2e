use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbCommentRepository, DbFollowRepository, DbLikeRepository, DbMediaRepository,
    DbRatingRepository, DbTagRepository,
};
use crate::infra::gateway::StorageGateway;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub gateway: StorageGateway,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            gateway: StorageGateway::new(db),
        }
    }

    pub fn media_repo(&self) -> DbMediaRepository {
        DbMediaRepository {
            gateway: self.gateway.clone(),
        }
    }

    pub fn comment_repo(&self) -> DbCommentRepository {
        DbCommentRepository {
            gateway: self.gateway.clone(),
        }
    }

    pub fn like_repo(&self) -> DbLikeRepository {
        DbLikeRepository {
            gateway: self.gateway.clone(),
        }
    }

    pub fn rating_repo(&self) -> DbRatingRepository {
        DbRatingRepository {
            gateway: self.gateway.clone(),
        }
    }

    pub fn follow_repo(&self) -> DbFollowRepository {
        DbFollowRepository {
            gateway: self.gateway.clone(),
        }
    }

    pub fn tag_repo(&self) -> DbTagRepository {
        DbTagRepository {
            gateway: self.gateway.clone(),
        }
    }
}
