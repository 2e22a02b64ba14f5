use std::sync::Arc;

use axum::Router;
use repositories::{
    micropost_repository::PgMicropostRepository,
    relationship_repository::{PgEdgeRepository, FAVORITES, USER_FOLLOW},
    user_repository::PgUserRepository,
};
use services::user_service::UserService;
use sqlx::postgres::PgPool;
use tower_http::cors::CorsLayer;

pub mod apis;
pub mod models;
pub mod repositories;
pub mod services;
pub mod settings;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

pub struct AppState {
    pub user_service: UserService,
}

pub async fn setup_database(database_url: &str) -> Result<Arc<PgPool>, sqlx::Error> {
    let pool = PgPool::connect(database_url).await?;
    Ok(Arc::new(pool))
}

pub fn setup_services(db: Arc<PgPool>) -> UserService {
    let follow_edges = Arc::new(PgEdgeRepository::new(db.clone(), USER_FOLLOW));
    let favorite_edges = Arc::new(PgEdgeRepository::new(db.clone(), FAVORITES));
    let micropost_repository = Arc::new(PgMicropostRepository::new(db.clone()));
    let user_repository = Arc::new(PgUserRepository::new(db));

    UserService::new(
        follow_edges,
        favorite_edges,
        micropost_repository,
        user_repository,
    )
}

pub async fn setup_router(settings: &settings::Settings) -> anyhow::Result<Router> {
    let db = setup_database(&settings.database_url).await?;
    let user_service = setup_services(db);
    let router = apis::setup_routes();

    Ok(router
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(AppState { user_service })))
}

pub fn init_tracing(settings: &settings::Settings) {
    let env = settings.environment.clone().unwrap_or("DEV".to_string());
    let level = match env.as_str() {
        "PROD" => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_ansi(env != "PROD")
        .init();
}
