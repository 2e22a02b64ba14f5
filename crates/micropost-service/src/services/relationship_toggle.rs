use std::sync::Arc;

use crate::repositories::relationship_repository::EdgeRepository;

/// Business rule attached to one edge relation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgePolicy {
    /// Reject edges whose owner and target are the same id.
    pub forbid_self_edges: bool,
}

/// Idempotent attach/detach over one many-to-many join table.
///
/// Every transition that would be illegal (duplicate add, remove of a
/// missing edge, forbidden self-edge) comes back as `Ok(false)` with no
/// change; only storage failures are errors.
#[derive(Clone)]
pub struct RelationshipToggle {
    edges: Arc<dyn EdgeRepository>,
    policy: EdgePolicy,
}

impl RelationshipToggle {
    pub fn new(edges: Arc<dyn EdgeRepository>, policy: EdgePolicy) -> Self {
        RelationshipToggle { edges, policy }
    }

    fn rejects(&self, owner_id: i64, target_id: i64) -> bool {
        self.policy.forbid_self_edges && owner_id == target_id
    }

    pub async fn exists(&self, owner_id: i64, target_id: i64) -> Result<bool, sqlx::Error> {
        self.edges.exists(owner_id, target_id).await
    }

    /// Attach the edge. `Ok(true)` only when a new edge was written; the
    /// storage layer decides duplicates, so two concurrent adds of the same
    /// pair resolve to one `true` and one `false`.
    pub async fn add(&self, owner_id: i64, target_id: i64) -> Result<bool, sqlx::Error> {
        if self.rejects(owner_id, target_id) {
            return Ok(false);
        }
        self.edges.insert(owner_id, target_id).await
    }

    /// Detach the edge. `Ok(true)` only when an edge was actually removed.
    pub async fn remove(&self, owner_id: i64, target_id: i64) -> Result<bool, sqlx::Error> {
        if self.rejects(owner_id, target_id) {
            return Ok(false);
        }
        self.edges.delete(owner_id, target_id).await
    }

    pub async fn targets(&self, owner_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        self.edges.pluck_targets(owner_id).await
    }

    pub async fn owners(&self, target_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        self.edges.pluck_owners(target_id).await
    }

    pub async fn count_for_owner(&self, owner_id: i64) -> Result<i64, sqlx::Error> {
        self.edges.count_for_owner(owner_id).await
    }

    pub async fn count_for_target(&self, target_id: i64) -> Result<i64, sqlx::Error> {
        self.edges.count_for_target(target_id).await
    }
}
