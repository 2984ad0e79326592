use std::sync::Arc;

use anyhow::{anyhow, Context};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use accounts_backend::app;
use accounts_backend::config::AppConfig;
use accounts_backend::logging::{init_logging, LoggingConfig};
use accounts_backend::middleware::security::SecurityPolicy;
use accounts_backend::state::AppState;
use accounts_backend::store::{AccountStore, MemoryAccountStore, PgAccountStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env(config.default_log_level()))
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    let store: Arc<dyn AccountStore> = match &config.database_uri {
        Some(database_uri) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(database_uri)
                .await
                .context("failed to connect to the database")?;
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("failed to run database migrations")?;
            tracing::info!("🗄️ Connected to PostgreSQL, accounts table ready");
            Arc::new(PgAccountStore::new(pool))
        }
        None => {
            tracing::warn!("⚠️ TESTING without DATABASE_URI: accounts are kept in memory only");
            Arc::new(MemoryAccountStore::new())
        }
    };

    if !config.force_https {
        tracing::warn!("HTTPS redirection is disabled");
    }

    let state = AppState::new(store, SecurityPolicy::new(config.force_https));
    let app = app::create_app(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("🚀 Account service running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
