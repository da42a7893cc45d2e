use std::time::Duration;

use sea_orm::{ConnectOptions, Database};
use tracing::info;

use media_api::config::MediaApiConfig;
use media_api::router::build_router;
use media_api::state::AppState;

#[tokio::main]
async fn main() {
    media_core::tracing::init_tracing();

    let config = MediaApiConfig::from_env();

    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("failed to connect to database");

    let router = build_router(AppState::new(db));
    let http_addr = format!("0.0.0.0:{}", config.media_api_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!(
        max_connections = config.database_max_connections,
        "media api listening on {http_addr}"
    );
    axum::serve(listener, router).await.expect("server error");
}
