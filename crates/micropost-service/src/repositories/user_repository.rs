use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::users::User;

/// User lookups. Registration and deletion live outside this service.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error>;
    async fn list_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, sqlx::Error>;
}

pub struct PgUserRepository {
    db: Arc<PgPool>,
}

impl PgUserRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        PgUserRepository { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, username, bio, image_uri FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db.as_ref())
            .await
    }

    async fn list_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, bio, image_uri FROM users WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(self.db.as_ref())
        .await
    }
}
