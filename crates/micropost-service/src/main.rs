use dotenv::dotenv;
use micropost_service::settings;
use tokio::net::TcpListener;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let settings = settings::load_settings().expect("Failed to load settings");
    micropost_service::init_tracing(&settings);
    let port = settings.port.unwrap_or(3000);

    let app = micropost_service::setup_router(&settings).await?;
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    debug!("Server running on http://{}", listener.local_addr()?);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }

    Ok(())
}
