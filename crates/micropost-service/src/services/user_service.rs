use std::sync::Arc;

use futures::try_join;

use crate::{
    models::{
        microposts::Micropost,
        users::{RelationshipCounts, UserResponse},
    },
    repositories::{
        micropost_repository::MicropostRepository, relationship_repository::EdgeRepository,
        user_repository::UserRepository,
    },
};

use super::relationship_toggle::{EdgePolicy, RelationshipToggle};

/// A user's relations: who they follow, what they favorited, and the
/// queries derived from those edges.
///
/// The acting user id is always an explicit parameter; resolving it from a
/// session belongs to the web layer.
#[derive(Clone)]
pub struct UserService {
    follows: RelationshipToggle,
    favorites: RelationshipToggle,
    micropost_repository: Arc<dyn MicropostRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(
        follow_edges: Arc<dyn EdgeRepository>,
        favorite_edges: Arc<dyn EdgeRepository>,
        micropost_repository: Arc<dyn MicropostRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        UserService {
            // Following yourself is rejected; favoriting your own post is
            // allowed, matching the product behavior.
            follows: RelationshipToggle::new(
                follow_edges,
                EdgePolicy {
                    forbid_self_edges: true,
                },
            ),
            favorites: RelationshipToggle::new(
                favorite_edges,
                EdgePolicy {
                    forbid_self_edges: false,
                },
            ),
            micropost_repository,
            user_repository,
        }
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<UserResponse>, sqlx::Error> {
        let user = self.user_repository.find_by_id(id).await?;
        Ok(user.map(UserResponse::from))
    }

    /// `Ok(true)` when a new follow edge was created; duplicate and
    /// self-follow come back `Ok(false)`.
    pub async fn follow(&self, user_id: i64, target_user_id: i64) -> Result<bool, sqlx::Error> {
        self.follows.add(user_id, target_user_id).await
    }

    pub async fn unfollow(&self, user_id: i64, target_user_id: i64) -> Result<bool, sqlx::Error> {
        self.follows.remove(user_id, target_user_id).await
    }

    pub async fn is_following(
        &self,
        user_id: i64,
        target_user_id: i64,
    ) -> Result<bool, sqlx::Error> {
        self.follows.exists(user_id, target_user_id).await
    }

    pub async fn favorite(&self, user_id: i64, micropost_id: i64) -> Result<bool, sqlx::Error> {
        self.favorites.add(user_id, micropost_id).await
    }

    pub async fn unfavorite(&self, user_id: i64, micropost_id: i64) -> Result<bool, sqlx::Error> {
        self.favorites.remove(user_id, micropost_id).await
    }

    pub async fn is_favoriting(
        &self,
        user_id: i64,
        micropost_id: i64,
    ) -> Result<bool, sqlx::Error> {
        self.favorites.exists(user_id, micropost_id).await
    }

    pub async fn following_ids(&self, user_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        self.follows.targets(user_id).await
    }

    pub async fn follower_ids(&self, user_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        self.follows.owners(user_id).await
    }

    pub async fn following(&self, user_id: i64) -> Result<Vec<UserResponse>, sqlx::Error> {
        let ids = self.follows.targets(user_id).await?;
        let users = self.user_repository.list_by_ids(&ids).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn followers(&self, user_id: i64) -> Result<Vec<UserResponse>, sqlx::Error> {
        let ids = self.follows.owners(user_id).await?;
        let users = self.user_repository.list_by_ids(&ids).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// The user's own posts plus the posts of everyone they follow.
    pub async fn feed_microposts(&self, user_id: i64) -> Result<Vec<Micropost>, sqlx::Error> {
        let mut owner_ids = self.follows.targets(user_id).await?;
        owner_ids.push(user_id);
        self.micropost_repository.list_by_owner_ids(&owner_ids).await
    }

    /// Posts the user has favorited.
    pub async fn favorite_microposts(&self, user_id: i64) -> Result<Vec<Micropost>, sqlx::Error> {
        let micropost_ids = self.favorites.targets(user_id).await?;
        self.micropost_repository.list_by_ids(&micropost_ids).await
    }

    /// Batch prefetch of the four relation counts a profile page shows.
    pub async fn load_relationship_counts(
        &self,
        user_id: i64,
    ) -> Result<RelationshipCounts, sqlx::Error> {
        let (microposts, followings, followers, favorites) = try_join!(
            self.micropost_repository.count_by_owner(user_id),
            self.follows.count_for_owner(user_id),
            self.follows.count_for_target(user_id),
            self.favorites.count_for_owner(user_id),
        )?;

        Ok(RelationshipCounts {
            microposts,
            followings,
            followers,
            favorites,
        })
    }
}
