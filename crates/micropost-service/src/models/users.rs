use axum::{http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, FromRow, Serialize, Deserialize, Default)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub bio: Option<String>,
    pub image_uri: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            bio: user.bio,
            avatar_url: user.image_uri,
        }
    }
}

impl IntoResponse for UserResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

/// Counts of the records related to one user, fetched together so a profile
/// page needs a single round trip instead of four.
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipCounts {
    /// Microposts owned by the user.
    pub microposts: i64,
    /// Users this user follows.
    pub followings: i64,
    /// Users following this user.
    pub followers: i64,
    /// Microposts this user has favorited.
    pub favorites: i64,
}
