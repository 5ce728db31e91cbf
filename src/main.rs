use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use classgrid::api::router;
use classgrid::platform::{NoopPlatformClient, PlatformClient, PlatformConfig, PlatformHttpClient};
use classgrid::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "classgrid=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let platform: Arc<dyn PlatformClient> = match PlatformConfig::new_from_env() {
        Ok(config) => Arc::new(PlatformHttpClient::new(config)?),
        Err(e) => {
            warn!("platform backend not configured ({}), serving empty schedules", e);
            Arc::new(NoopPlatformClient)
        }
    };

    let state = AppState { platform };
    let app = router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
