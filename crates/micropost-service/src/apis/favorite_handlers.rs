use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::debug;

use crate::{utils::errors::{app_error::AppError, error_payload::ErrorPayload}, AppState};

use super::api_models::{request::RelationActionBody, response::ToggleResponse};

const TAG: &str = "favorites";

/// Favorite a micropost
#[utoipa::path(
    post,
    tag = TAG,
    path = "/{id}/favorite",
    operation_id = "favoriteMicropost",
    responses(
        (status = 200, description = "Favorite toggle applied", body = ToggleResponse),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = i64, Path, description = "Micropost ID to favorite")
    ),
    request_body = RelationActionBody
)]
pub(super) async fn favorite_micropost(
    State(app_state): State<Arc<AppState>>,
    Path(micropost_id): Path<i64>,
    Json(body): Json<RelationActionBody>,
) -> Result<impl IntoResponse, AppError> {
    let changed = app_state
        .user_service
        .favorite(body.user_id, micropost_id)
        .await?;
    if !changed {
        debug!(
            "favorite of {} by {} was a no-op",
            micropost_id, body.user_id
        );
    }
    Ok((StatusCode::OK, Json(ToggleResponse { changed })))
}

/// Unfavorite a micropost
#[utoipa::path(
    post,
    tag = TAG,
    path = "/{id}/unfavorite",
    operation_id = "unfavoriteMicropost",
    responses(
        (status = 200, description = "Unfavorite toggle applied", body = ToggleResponse),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = i64, Path, description = "Micropost ID to unfavorite")
    ),
    request_body = RelationActionBody
)]
pub(super) async fn unfavorite_micropost(
    State(app_state): State<Arc<AppState>>,
    Path(micropost_id): Path<i64>,
    Json(body): Json<RelationActionBody>,
) -> Result<impl IntoResponse, AppError> {
    let changed = app_state
        .user_service
        .unfavorite(body.user_id, micropost_id)
        .await?;
    Ok((StatusCode::OK, Json(ToggleResponse { changed })))
}
