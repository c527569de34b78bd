use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

use crate::application::ports::RepositoryError;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Joins the server URL and database name, e.g.
/// `postgres://localhost:5432` + `kspd`.
pub fn database_url(server_url: &str, database_name: &str) -> String {
    format!("{}/{}", server_url.trim_end_matches('/'), database_name)
}

/// Builds the pool without opening a connection. Connectivity problems
/// surface on the first query, inside the job, where they are reported as a
/// failed run instead of aborting start-up.
#[instrument(skip(url))]
pub fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, RepositoryError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(url)
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

    info!("PostgreSQL connection pool configured");
    Ok(pool)
}
