use std::sync::Arc;

use tracing::info;
use visit_counter::shared::infrastructure::record_slot::RecordSlot;
use visit_counter::shared::infrastructure::record_slot::file::JsonFileSlot;
use visit_counter::shell::config::AppConfig;
use visit_counter::shell::state::AppState;
use visit_counter::shell::{http, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    logging::init(config.log_format);

    let slot: Arc<dyn RecordSlot> = Arc::new(JsonFileSlot::new(&config.data_file));
    let app = http::router(AppState::new(slot));

    let addr = config.bind_addr();
    info!(%addr, data_file = %config.data_file.display(), "visit counter listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("visit counter stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
