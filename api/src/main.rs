use std::sync::Arc;

use clap::Parser;
use tastefusion_api::{
    application::http::server::http_server::{router, state, with_metrics},
    args::{Args, LogArgs},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    info!("TasteFusion API starting up...");

    let app_state = state(args.clone()).await?;
    let app = with_metrics(router(app_state)?, &args.server.root_path);

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("TasteFusion API shutting down...");
    Ok(())
}
