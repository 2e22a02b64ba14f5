use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Micropost {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<FixedOffset>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MicropostResponse {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<FixedOffset>,
}

impl From<Micropost> for MicropostResponse {
    fn from(micropost: Micropost) -> Self {
        MicropostResponse {
            id: micropost.id,
            user_id: micropost.user_id,
            content: micropost.content,
            created_at: micropost.created_at,
        }
    }
}
