use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::AppState;

pub mod api_models;
pub mod favorite_handlers;
pub mod user_handlers;

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "users", description = "Follow relations, feeds and counts"),
        (name = "favorites", description = "Micropost favorite toggles")
    )
)]
pub struct ApiDoc;

pub fn setup_routes() -> Router<Arc<AppState>> {
    let api_doc = ApiDoc::openapi();

    let user_router = OpenApiRouter::new()
        .routes(routes!(user_handlers::follow_user))
        .routes(routes!(user_handlers::unfollow_user))
        .routes(routes!(user_handlers::get_followers))
        .routes(routes!(user_handlers::get_following))
        .routes(routes!(user_handlers::get_feed))
        .routes(routes!(user_handlers::get_favorites))
        .routes(routes!(user_handlers::get_relationship_counts));

    let favorite_router = OpenApiRouter::new()
        .routes(routes!(favorite_handlers::favorite_micropost))
        .routes(routes!(favorite_handlers::unfavorite_micropost));

    let user_router = OpenApiRouter::with_openapi(api_doc.clone()).nest("/users", user_router);

    let favorite_router =
        OpenApiRouter::with_openapi(api_doc.clone()).nest("/microposts", favorite_router);

    let router = OpenApiRouter::new()
        .merge(user_router)
        .merge(favorite_router);

    let (api_router, api_openapi) = OpenApiRouter::new()
        .nest("/api/v1", router)
        .split_for_parts();

    Router::new()
        .merge(Scalar::with_url("/docs", api_openapi))
        .merge(api_router)
}
