//! In-memory implementations of the storage traits for unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    models::{microposts::Micropost, users::User},
    repositories::{
        micropost_repository::MicropostRepository,
        relationship_repository::EdgeRepository,
        user_repository::UserRepository,
    },
    services::user_service::UserService,
};

pub fn user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        bio: None,
        image_uri: None,
    }
}

pub fn micropost(id: i64, user_id: i64, content: &str) -> Micropost {
    Micropost {
        id,
        user_id,
        content: content.to_string(),
        created_at: Utc::now().into(),
    }
}

/// Edge rows as ordered `(owner_id, target_id)` pairs, unique per pair like
/// the real table's constraint.
#[derive(Default)]
pub struct InMemoryEdgeRepository {
    rows: Mutex<Vec<(i64, i64)>>,
}

impl InMemoryEdgeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<(i64, i64)> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl EdgeRepository for InMemoryEdgeRepository {
    async fn exists(&self, owner_id: i64, target_id: i64) -> Result<bool, sqlx::Error> {
        Ok(self.rows.lock().unwrap().contains(&(owner_id, target_id)))
    }

    async fn insert(&self, owner_id: i64, target_id: i64) -> Result<bool, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains(&(owner_id, target_id)) {
            return Ok(false);
        }
        rows.push((owner_id, target_id));
        Ok(true)
    }

    async fn delete(&self, owner_id: i64, target_id: i64) -> Result<bool, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter().position(|row| *row == (owner_id, target_id)) {
            Some(index) => {
                rows.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn pluck_targets(&self, owner_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(owner, _)| *owner == owner_id)
            .map(|(_, target)| *target)
            .collect())
    }

    async fn pluck_owners(&self, target_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, target)| *target == target_id)
            .map(|(owner, _)| *owner)
            .collect())
    }

    async fn count_for_owner(&self, owner_id: i64) -> Result<i64, sqlx::Error> {
        Ok(self.pluck_targets(owner_id).await?.len() as i64)
    }

    async fn count_for_target(&self, target_id: i64) -> Result<i64, sqlx::Error> {
        Ok(self.pluck_owners(target_id).await?.len() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryMicropostRepository {
    rows: Mutex<Vec<Micropost>>,
}

impl InMemoryMicropostRepository {
    pub fn push(&self, micropost: Micropost) {
        self.rows.lock().unwrap().push(micropost);
    }
}

#[async_trait]
impl MicropostRepository for InMemoryMicropostRepository {
    async fn list_by_owner_ids(&self, owner_ids: &[i64]) -> Result<Vec<Micropost>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|post| owner_ids.contains(&post.user_id))
            .cloned()
            .collect())
    }

    async fn list_by_ids(&self, ids: &[i64]) -> Result<Vec<Micropost>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|post| ids.contains(&post.id))
            .cloned()
            .collect())
    }

    async fn count_by_owner(&self, owner_id: i64) -> Result<i64, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|post| post.user_id == owner_id)
            .count() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn push(&self, user: User) {
        self.rows.lock().unwrap().push(user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn list_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect())
    }
}

/// One in-memory store per storage trait, wired into a [`UserService`].
pub struct InMemoryStores {
    pub follow_edges: Arc<InMemoryEdgeRepository>,
    pub favorite_edges: Arc<InMemoryEdgeRepository>,
    pub microposts: Arc<InMemoryMicropostRepository>,
    pub users: Arc<InMemoryUserRepository>,
}

impl InMemoryStores {
    pub fn new() -> Self {
        InMemoryStores {
            follow_edges: Arc::new(InMemoryEdgeRepository::new()),
            favorite_edges: Arc::new(InMemoryEdgeRepository::new()),
            microposts: Arc::new(InMemoryMicropostRepository::default()),
            users: Arc::new(InMemoryUserRepository::default()),
        }
    }

    pub fn into_service(self) -> UserService {
        UserService::new(
            self.follow_edges,
            self.favorite_edges,
            self.microposts,
            self.users,
        )
    }
}
