//! Migrate command - applies the database schema and exits

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{
    connect_pool, run_content_migrations, PostgresConfig, PostgresMigrator,
};

/// Apply all pending schema migrations against the configured database
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    info!("Connecting to PostgreSQL at {}", config.database.url);
    let pg_config = PostgresConfig::new(&config.database.url)
        .with_max_connections(config.database.max_connections)
        .with_connect_timeout(config.database.connect_timeout_secs);
    let pool = connect_pool(&pg_config).await?;

    run_content_migrations(&pool).await?;

    let migrator = PostgresMigrator::new(pool);
    match migrator.current_version().await? {
        Some(version) => info!("Schema is at version {}", version),
        None => info!("No migrations recorded"),
    }

    Ok(())
}
