use jobboard::{config::Settings, create_app, db, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    let level = if settings.development { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let db = db::connect(&settings.database_url).await?;

    let listener = tokio::net::TcpListener::bind(&settings.listen_addr).await?;
    tracing::info!("Server running on http://{}", settings.listen_addr);

    let app = create_app(AppState {
        db,
        settings: Arc::new(settings),
    });
    // Connect info feeds the per-client rate limiter.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
