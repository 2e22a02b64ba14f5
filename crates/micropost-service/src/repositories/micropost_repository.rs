use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::microposts::Micropost;

/// Read-side storage for microposts. The service never creates or deletes
/// posts; that belongs to the posting flow.
#[async_trait]
pub trait MicropostRepository: Send + Sync {
    /// Posts owned by any of the given users, newest first.
    async fn list_by_owner_ids(&self, owner_ids: &[i64]) -> Result<Vec<Micropost>, sqlx::Error>;
    /// Posts whose id is in the given set, newest first.
    async fn list_by_ids(&self, ids: &[i64]) -> Result<Vec<Micropost>, sqlx::Error>;
    async fn count_by_owner(&self, owner_id: i64) -> Result<i64, sqlx::Error>;
}

pub struct PgMicropostRepository {
    db: Arc<PgPool>,
}

impl PgMicropostRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        PgMicropostRepository { db }
    }
}

#[async_trait]
impl MicropostRepository for PgMicropostRepository {
    async fn list_by_owner_ids(&self, owner_ids: &[i64]) -> Result<Vec<Micropost>, sqlx::Error> {
        let query = r#"
        SELECT id, user_id, content, created_at
        FROM microposts
        WHERE user_id = ANY($1)
        ORDER BY created_at DESC, id DESC
        "#;
        sqlx::query_as::<_, Micropost>(query)
            .bind(owner_ids)
            .fetch_all(self.db.as_ref())
            .await
    }

    async fn list_by_ids(&self, ids: &[i64]) -> Result<Vec<Micropost>, sqlx::Error> {
        let query = r#"
        SELECT id, user_id, content, created_at
        FROM microposts
        WHERE id = ANY($1)
        ORDER BY created_at DESC, id DESC
        "#;
        sqlx::query_as::<_, Micropost>(query)
            .bind(ids)
            .fetch_all(self.db.as_ref())
            .await
    }

    async fn count_by_owner(&self, owner_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM microposts WHERE user_id = $1")
            .bind(owner_id)
            .fetch_one(self.db.as_ref())
            .await
    }
}
