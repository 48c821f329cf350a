use clap::Parser;
use th_dashboard::{router, AppState, Args, Config};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from(Args::parse());
    info!(
        log = %config.log_path.display(),
        days = config.retain_days,
        fetch_humidity = config.humidity.is_some(),
        "serving dashboard"
    );

    let addr = config.addr;
    let http = reqwest::Client::builder().build()?;
    let app = router(AppState::new(config, http));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => {
            error!("failed to listen for shutdown signal: {err}");
            std::future::pending::<()>().await;
        }
    }
}
