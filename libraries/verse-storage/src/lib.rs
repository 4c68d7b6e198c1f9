//! Verse Storage
//!
//! PostgreSQL persistence for the song catalog.
//!
//! # Architecture
//!
//! - **Gateway**: [`connect`] builds connection options, opens the pool and
//!   reconciles the schema through the embedded migrations
//! - **Vertical Slicing**: the `songs` module owns its queries
//! - **Repository**: [`PgSongStore`] exposes the queries through
//!   [`verse_core::SongRepository`]
//!
//! # Example
//!
//! ```rust,no_run
//! use verse_core::{SongFilter, SongRepository};
//! use verse_storage::{connect, PgSongStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = verse_storage::connect_options("localhost", 5432, "verse", "secret", "verse");
//! let pool = connect(options, 5).await?;
//!
//! let store = PgSongStore::new(pool);
//! let songs = store.find(&SongFilter::default(), 0, 10).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod songs;

pub use context::PgSongStore;
pub use error::{Result, StorageError};
pub use sqlx::postgres::{PgConnectOptions, PgPool};

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPoolOptions, PgSslMode};
use std::time::Duration;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Build connection options from the individual connection values
///
/// TLS is disabled, matching a `sslmode=disable` DSN.
pub fn connect_options(
    host: &str,
    port: u16,
    user: &str,
    password: &str,
    database: &str,
) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(host)
        .port(port)
        .username(user)
        .password(password)
        .database(database)
        .ssl_mode(PgSslMode::Disable)
}

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the `songs` table exists with the expected columns.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `PostgreSQL` pool
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(options: PgConnectOptions, max_connections: u32) -> Result<PgPool> {
    tracing::debug!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or_default(),
        "Creating database pool"
    );

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await
        .map_err(StorageError::Connection)
}

/// Open the pool and bring the schema up to date
///
/// # Errors
///
/// Returns an error if the connection or the migrations fail
pub async fn connect(options: PgConnectOptions, max_connections: u32) -> Result<PgPool> {
    let pool = create_pool(options, max_connections).await?;
    run_migrations(&pool).await?;
    tracing::info!("Database migrated successfully");
    Ok(pool)
}
