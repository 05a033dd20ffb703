use std::sync::Arc;

use clap::Parser;
use labellens_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone());
    let router = router(app_state)?;

    let addr = args.server.socket_addr()?;
    tracing::info!(
        "LabelLens API listening on {}{}",
        addr,
        args.server.root_path
    );

    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
