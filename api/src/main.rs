use std::sync::Arc;

use clap::Parser;
use supomeshi_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger(log: &LogArgs) {
    let env_filter =
        EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if log.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}{}", addr, args.server.root_path);

    axum::serve(listener, router).await?;
    Ok(())
}
