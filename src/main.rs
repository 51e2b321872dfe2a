use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use arcade_assets::{api::create_router, ApplicationBuilder, Config};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting arcade assets service");

    let config = Config::from_env();
    config.validate()?;
    info!("Configuration loaded and validated");

    let listen_addr = config.listen_addr.clone();
    let state = ApplicationBuilder::new(config)
        .with_store()
        .await?
        .build()?;

    let app = create_router(state);

    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
