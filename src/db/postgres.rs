use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::Config;

fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout())
}

/// Creates a PostgreSQL connection pool
///
/// Establishes a pool of database connections for efficient reuse.
/// Connections are checked out per query and returned to the pool when
/// the query future completes, whether it succeeded or not.
pub async fn create_pool(config: &Config) -> anyhow::Result<PgPool> {
    let pool = pool_options(config).connect(&config.database_url).await?;

    Ok(pool)
}

/// Connects eagerly, falling back to a lazily connecting pool
///
/// An unreachable database at startup is logged but does not keep the
/// server from listening; queries then fail individually and the
/// recommendation fallback takes over. Only a malformed URL is fatal.
pub async fn connect_or_defer(config: &Config) -> anyhow::Result<PgPool> {
    match create_pool(config).await {
        Ok(pool) => {
            tracing::info!(
                max_connections = config.db_max_connections,
                "Database connection established"
            );
            Ok(pool)
        }
        Err(e) => {
            tracing::error!(error = %e, "Database connection failed, continuing with lazy pool");
            let pool = pool_options(config).connect_lazy(&config.database_url)?;
            Ok(pool)
        }
    }
}

/// Applies the migrations embedded from `./migrations`
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
