use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

/// Join-table layout for a many-to-many edge between two entities.
///
/// Column names are compile-time constants, never user input; they are the
/// only values interpolated into the SQL below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeTable {
    pub table: &'static str,
    pub owner_column: &'static str,
    pub target_column: &'static str,
}

/// Follow edges: the owner follows the target user.
pub const USER_FOLLOW: EdgeTable = EdgeTable {
    table: "user_follow",
    owner_column: "user_id",
    target_column: "follow_id",
};

/// Favorite edges: the owner has favorited the target micropost.
pub const FAVORITES: EdgeTable = EdgeTable {
    table: "favorites",
    owner_column: "user_id",
    target_column: "micropost_id",
};

/// Storage primitives over one join table.
///
/// `insert` and `delete` report whether a row was actually written or
/// removed, so callers can treat an already-satisfied toggle as a no-op
/// instead of an error.
#[async_trait]
pub trait EdgeRepository: Send + Sync {
    async fn exists(&self, owner_id: i64, target_id: i64) -> Result<bool, sqlx::Error>;
    async fn insert(&self, owner_id: i64, target_id: i64) -> Result<bool, sqlx::Error>;
    async fn delete(&self, owner_id: i64, target_id: i64) -> Result<bool, sqlx::Error>;
    /// Target-side ids of every edge owned by `owner_id`.
    async fn pluck_targets(&self, owner_id: i64) -> Result<Vec<i64>, sqlx::Error>;
    /// Owner-side ids of every edge pointing at `target_id`.
    async fn pluck_owners(&self, target_id: i64) -> Result<Vec<i64>, sqlx::Error>;
    async fn count_for_owner(&self, owner_id: i64) -> Result<i64, sqlx::Error>;
    async fn count_for_target(&self, target_id: i64) -> Result<i64, sqlx::Error>;
}

pub struct PgEdgeRepository {
    db: Arc<PgPool>,
    edge: EdgeTable,
}

impl PgEdgeRepository {
    pub fn new(db: Arc<PgPool>, edge: EdgeTable) -> Self {
        PgEdgeRepository { db, edge }
    }
}

fn exists_sql(edge: &EdgeTable) -> String {
    format!(
        "SELECT EXISTS (SELECT 1 FROM {} WHERE {} = $1 AND {} = $2)",
        edge.table, edge.owner_column, edge.target_column
    )
}

// Duplicate inserts must lose against the table's unique pair constraint,
// not against a prior existence check, so a concurrent toggle on the same
// pair can never produce a second row or an error.
fn insert_sql(edge: &EdgeTable) -> String {
    format!(
        "INSERT INTO {} ({}, {}, created_at) VALUES ($1, $2, $3) ON CONFLICT DO NOTHING",
        edge.table, edge.owner_column, edge.target_column
    )
}

fn delete_sql(edge: &EdgeTable) -> String {
    format!(
        "DELETE FROM {} WHERE {} = $1 AND {} = $2",
        edge.table, edge.owner_column, edge.target_column
    )
}

fn pluck_targets_sql(edge: &EdgeTable) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1 ORDER BY created_at, {}",
        edge.target_column, edge.table, edge.owner_column, edge.target_column
    )
}

fn pluck_owners_sql(edge: &EdgeTable) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1 ORDER BY created_at, {}",
        edge.owner_column, edge.table, edge.target_column, edge.owner_column
    )
}

fn count_for_owner_sql(edge: &EdgeTable) -> String {
    format!(
        "SELECT COUNT(*) FROM {} WHERE {} = $1",
        edge.table, edge.owner_column
    )
}

fn count_for_target_sql(edge: &EdgeTable) -> String {
    format!(
        "SELECT COUNT(*) FROM {} WHERE {} = $1",
        edge.table, edge.target_column
    )
}

#[async_trait]
impl EdgeRepository for PgEdgeRepository {
    async fn exists(&self, owner_id: i64, target_id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(&exists_sql(&self.edge))
            .bind(owner_id)
            .bind(target_id)
            .fetch_one(self.db.as_ref())
            .await
    }

    async fn insert(&self, owner_id: i64, target_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(&insert_sql(&self.edge))
            .bind(owner_id)
            .bind(target_id)
            .bind(Utc::now())
            .execute(self.db.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, owner_id: i64, target_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(&delete_sql(&self.edge))
            .bind(owner_id)
            .bind(target_id)
            .execute(self.db.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn pluck_targets(&self, owner_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(&pluck_targets_sql(&self.edge))
            .bind(owner_id)
            .fetch_all(self.db.as_ref())
            .await
    }

    async fn pluck_owners(&self, target_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(&pluck_owners_sql(&self.edge))
            .bind(target_id)
            .fetch_all(self.db.as_ref())
            .await
    }

    async fn count_for_owner(&self, owner_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(&count_for_owner_sql(&self.edge))
            .bind(owner_id)
            .fetch_one(self.db.as_ref())
            .await
    }

    async fn count_for_target(&self, target_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(&count_for_target_sql(&self.edge))
            .bind(target_id)
            .fetch_one(self.db.as_ref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_edge_sql_targets_the_follow_table() {
        assert_eq!(
            insert_sql(&USER_FOLLOW),
            "INSERT INTO user_follow (user_id, follow_id, created_at) \
             VALUES ($1, $2, $3) ON CONFLICT DO NOTHING"
        );
        assert_eq!(
            exists_sql(&USER_FOLLOW),
            "SELECT EXISTS (SELECT 1 FROM user_follow WHERE user_id = $1 AND follow_id = $2)"
        );
        assert_eq!(
            delete_sql(&USER_FOLLOW),
            "DELETE FROM user_follow WHERE user_id = $1 AND follow_id = $2"
        );
    }

    #[test]
    fn favorite_edge_sql_targets_the_favorites_table() {
        assert_eq!(
            insert_sql(&FAVORITES),
            "INSERT INTO favorites (user_id, micropost_id, created_at) \
             VALUES ($1, $2, $3) ON CONFLICT DO NOTHING"
        );
        assert_eq!(
            pluck_targets_sql(&FAVORITES),
            "SELECT micropost_id FROM favorites WHERE user_id = $1 \
             ORDER BY created_at, micropost_id"
        );
        assert_eq!(
            count_for_target_sql(&FAVORITES),
            "SELECT COUNT(*) FROM favorites WHERE micropost_id = $1"
        );
    }

    #[test]
    fn pluck_owners_selects_the_reverse_direction() {
        assert_eq!(
            pluck_owners_sql(&USER_FOLLOW),
            "SELECT user_id FROM user_follow WHERE follow_id = $1 ORDER BY created_at, user_id"
        );
    }
}
