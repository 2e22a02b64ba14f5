use serde::Deserialize;
use utoipa::ToSchema;

/// Body of the follow/unfollow and favorite/unfavorite actions: the acting
/// user, resolved by the caller's auth layer and passed explicitly.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelationActionBody {
    pub user_id: i64,
}
