//! # Application State
//!
//! Resources created once at startup. The only long-lived resource is the
//! SQLite-backed session store the auth provider shares with this server;
//! request handlers reach it through the session layer rather than through
//! axum `State`.

use crate::config::Config;
use anyhow::Result;
use sqlx::sqlite::SqlitePool;
use time::Duration;
use tokio::task::JoinHandle;
use tower_sessions::{ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

pub struct AppState {
    /// Session store on top of a SQLite pool.
    /// Clones of the store share the underlying pool.
    pub session_store: SqliteStore,
}

impl AppState {
    /// Connect to the database and create the session table if needed.
    ///
    /// # Errors
    /// Returns an error if the connection or the migration fails.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = SqlitePool::connect(&config.database_url).await?;

        let session_store = SqliteStore::new(db);
        session_store.migrate().await?;

        Ok(AppState { session_store })
    }

    /// Session layer for the router: expiry on inactivity, cookie security
    /// as configured.
    pub fn session_layer(&self, config: &Config) -> SessionManagerLayer<SqliteStore> {
        SessionManagerLayer::new(self.session_store.clone())
            .with_secure(config.session_secure)
            .with_expiry(Expiry::OnInactivity(Duration::hours(
                config.session_inactivity_hours,
            )))
    }

    /// Periodically delete expired sessions so the table doesn't grow without bound.
    pub fn spawn_session_cleanup(&self, config: &Config) -> JoinHandle<()> {
        let store = self.session_store.clone();
        let period = std::time::Duration::from_secs(config.session_cleanup_secs);

        tokio::spawn(async move {
            tracing::debug!(?period, "starting expired session cleanup");
            if let Err(e) = store.continuously_delete_expired(period).await {
                tracing::error!("Session cleanup failed: {:?}", e);
            }
        })
    }
}
