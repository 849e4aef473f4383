use saving_challenge::{load_theme, resolve_data_path, router, AppState, KvStore, SavingLedger};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path()?;
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let store = KvStore::open(&data_path).await.inspect_err(|err| {
        error!("refusing to start with unreadable store {}: {err}", data_path.display());
    })?;
    let ledger = SavingLedger::load(&store).inspect_err(|err| {
        error!("refusing to start with corrupt ledger: {err}");
    })?;
    let theme = load_theme(&store);

    let summary = ledger.summary();
    info!(
        path = %data_path.display(),
        saved = summary.saved_amount,
        needed = summary.amount_needed,
        theme = theme.as_str(),
        "store loaded"
    );

    let app = router(AppState::new(ledger, theme, store));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
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
        error!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
