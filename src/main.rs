use backon::{ConstantBuilder, Retryable};
use mimalloc::MiMalloc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &stockroom::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        port = cfg.port,
        allowed_origin = %cfg.allowed_origin.as_deref().unwrap_or("<any>"),
        loglevel = %cfg.loglevel
    );

    let pool = stockroom::db::connect(&cfg.database_url).await?;
    let store = stockroom::InventoryStore::new(pool);

    // Serial retry with a fixed backoff; each DDL statement is
    // idempotent, so a partially initialized schema from an earlier
    // crash is completed here.
    let init = || async { store.init_schema().await };
    let policy = ConstantBuilder::default()
        .with_delay(Duration::from_secs(2))
        .with_max_times(5);
    match init.retry(policy).await {
        Ok(()) => info!("schema initialized and verified"),
        Err(e) => {
            warn!(error = %e, "schema initialization failed, serving in degraded state");
        }
    }

    let state = stockroom::router::StockroomState::new(store);
    let app = stockroom::router::stockroom_router(state, cfg.allowed_origin.as_deref());

    let addr = format!("0.0.0.0:{}", cfg.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
