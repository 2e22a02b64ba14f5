use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::debug;

use crate::{
    models::{
        microposts::MicropostResponse,
        users::{RelationshipCounts, UserResponse},
    },
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

use super::api_models::{request::RelationActionBody, response::ToggleResponse};

const TAG: &str = "users";

/// Follow a user
#[utoipa::path(
    post,
    tag = TAG,
    path = "/{id}/follow",
    operation_id = "followUser",
    responses(
        (status = 200, description = "Follow toggle applied", body = ToggleResponse),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = i64, Path, description = "User ID to follow")
    ),
    request_body = RelationActionBody
)]
pub(super) async fn follow_user(
    State(app_state): State<Arc<AppState>>,
    Path(followed_id): Path<i64>,
    Json(body): Json<RelationActionBody>,
) -> Result<impl IntoResponse, AppError> {
    let changed = app_state
        .user_service
        .follow(body.user_id, followed_id)
        .await?;
    if !changed {
        debug!("follow of {} by {} was a no-op", followed_id, body.user_id);
    }
    Ok((StatusCode::OK, Json(ToggleResponse { changed })))
}

/// Unfollow a user
#[utoipa::path(
    post,
    tag = TAG,
    path = "/{id}/unfollow",
    operation_id = "unfollowUser",
    responses(
        (status = 200, description = "Unfollow toggle applied", body = ToggleResponse),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = i64, Path, description = "User ID to unfollow")
    ),
    request_body = RelationActionBody
)]
pub(super) async fn unfollow_user(
    State(app_state): State<Arc<AppState>>,
    Path(followed_id): Path<i64>,
    Json(body): Json<RelationActionBody>,
) -> Result<impl IntoResponse, AppError> {
    let changed = app_state
        .user_service
        .unfollow(body.user_id, followed_id)
        .await?;
    Ok((StatusCode::OK, Json(ToggleResponse { changed })))
}

/// Get followers of a user
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}/followers",
    operation_id = "getFollowers",
    responses(
        (status = 200, description = "List of followers", body = Vec<UserResponse>),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = i64, Path, description = "User ID")
    )
)]
pub(super) async fn get_followers(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    require_user(&app_state, user_id).await?;
    let followers = app_state.user_service.followers(user_id).await?;
    Ok((StatusCode::OK, Json(followers)))
}

/// Get users a user is following
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}/following",
    operation_id = "getFollowing",
    responses(
        (status = 200, description = "List of followed users", body = Vec<UserResponse>),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = i64, Path, description = "User ID")
    )
)]
pub(super) async fn get_following(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    require_user(&app_state, user_id).await?;
    let following = app_state.user_service.following(user_id).await?;
    Ok((StatusCode::OK, Json(following)))
}

/// Get a user's feed: their own microposts plus those of everyone they follow
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}/feed",
    operation_id = "getFeed",
    responses(
        (status = 200, description = "Feed microposts", body = Vec<MicropostResponse>),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = i64, Path, description = "User ID")
    )
)]
pub(super) async fn get_feed(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    require_user(&app_state, user_id).await?;
    let feed = app_state.user_service.feed_microposts(user_id).await?;
    let feed: Vec<MicropostResponse> = feed.into_iter().map(MicropostResponse::from).collect();
    Ok((StatusCode::OK, Json(feed)))
}

/// Get the microposts a user has favorited
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}/favorites",
    operation_id = "getFavorites",
    responses(
        (status = 200, description = "Favorited microposts", body = Vec<MicropostResponse>),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = i64, Path, description = "User ID")
    )
)]
pub(super) async fn get_favorites(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    require_user(&app_state, user_id).await?;
    let favorites = app_state.user_service.favorite_microposts(user_id).await?;
    let favorites: Vec<MicropostResponse> =
        favorites.into_iter().map(MicropostResponse::from).collect();
    Ok((StatusCode::OK, Json(favorites)))
}

/// Get a user's relationship counts in one call
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}/counts",
    operation_id = "getRelationshipCounts",
    responses(
        (status = 200, description = "Relationship counts", body = RelationshipCounts),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = i64, Path, description = "User ID")
    )
)]
pub(super) async fn get_relationship_counts(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    require_user(&app_state, user_id).await?;
    let counts = app_state
        .user_service
        .load_relationship_counts(user_id)
        .await?;
    Ok((StatusCode::OK, Json(counts)))
}

async fn require_user(app_state: &AppState, user_id: i64) -> Result<UserResponse, AppError> {
    app_state
        .user_service
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
}
