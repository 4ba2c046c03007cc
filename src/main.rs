mod config;
mod dataset;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::SiteConfig::from_env().expect("invalid configuration");

    // Non-fatal: clients fall back to builtin entries if the file is unusable.
    let dataset_file = config.dataset_file();
    match dataset::check_dataset_file(&dataset_file) {
        Ok(count) => tracing::info!(count, path = %dataset_file.display(), "dataset file loaded"),
        Err(e) => tracing::warn!(error = %e, "dataset file unusable; clients will use builtin entries"),
    }

    let app = routes::app(&config).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "kspedia listening");
    axum::serve(listener, app).await.expect("server failed");
}
