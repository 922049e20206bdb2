use farmstand::{catalog, render, resolve_public_dir, router, AppState};
use std::{env, net::SocketAddr};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = catalog::resolve_data_path();
    let template_dir = render::resolve_template_dir();
    let public_dir = resolve_public_dir();

    let catalog = catalog::load_catalog(&data_path).await;
    info!("loaded {} products from {}", catalog.len(), data_path.display());
    let templates = render::load_templates(&template_dir).await;

    let state = AppState::new(catalog, templates);
    let app = router(state, &public_dir);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(4000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
    }
}
