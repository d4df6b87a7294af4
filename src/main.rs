mod config;
mod db;
mod error;
mod metrics;
mod routes;
mod sentiment;
mod state;
mod templates;

use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = config::Config::from_env()?;
    let config = Arc::new(config);

    // Daily-rotated file log, 30 days retained.
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("app")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&config.log_dir)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "review_sentiment=info,tower_http=info".into()),
        )
        .with_writer(file_appender)
        .with_ansi(false)
        .init();

    tracing::info!("Application startup: initializing database");
    let pool = db::create_pool(&config.database_url).await?;
    db::create_schema(pool.as_ref()).await?;

    let metrics = metrics::MetricsSink::new(&config.metrics_dir);

    let state = Arc::new(state::AppState {
        pool,
        config: config.clone(),
        metrics,
    });

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Review sentiment service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
