use super::database::Database;
use crate::shared::config::DatabaseSettings;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_error, log_info};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Something that can open the process's database handle.
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    type Handle: Send + Sync + 'static;

    async fn connect(&self, settings: &DatabaseSettings) -> AppResult<Self::Handle>;
}

/// Opens the Postgres pool on a blocking thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct PgConnector;

#[async_trait]
impl Connector for PgConnector {
    type Handle = Database;

    async fn connect(&self, settings: &DatabaseSettings) -> AppResult<Database> {
        let settings = settings.clone();
        tokio::task::spawn_blocking(move || Database::connect(&settings)).await?
    }
}

/// Owns the single database handle of the process.
///
/// The first `acquire` starts the connection attempt; callers arriving while it
/// is in flight wait on that same attempt, and every later caller gets the
/// resolved handle. At most one handle is ever live.
pub struct ConnectionManager<C: Connector = PgConnector> {
    connector: C,
    settings: DatabaseSettings,
    handle: OnceCell<Arc<C::Handle>>,
    attempts: AtomicU32,
}

impl ConnectionManager<PgConnector> {
    pub fn postgres(settings: DatabaseSettings) -> Self {
        Self::new(settings, PgConnector)
    }
}

impl<C: Connector> ConnectionManager<C> {
    pub fn new(settings: DatabaseSettings, connector: C) -> Self {
        Self {
            connector,
            settings,
            handle: OnceCell::new(),
            attempts: AtomicU32::new(0),
        }
    }

    /// Return the shared handle, establishing it on first use.
    ///
    /// A failed attempt leaves the manager empty and is reported to the caller
    /// as is; nothing here retries.
    pub async fn acquire(&self) -> AppResult<Arc<C::Handle>> {
        let handle = self
            .handle
            .get_or_try_init(|| async {
                let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
                log_info!(
                    "Opening database connection (attempt {}) to {}",
                    attempt,
                    self.settings.redacted_host()
                );

                match self.connector.connect(&self.settings).await {
                    Ok(handle) => {
                        log_info!("Database connection established");
                        Ok(Arc::new(handle))
                    }
                    Err(e) => {
                        log_error!("Database connection failed: {}", e);
                        Err(match e {
                            AppError::ConnectionUnavailable(_) => e,
                            other => AppError::ConnectionUnavailable(other.to_string()),
                        })
                    }
                }
            })
            .await?;

        Ok(Arc::clone(handle))
    }

    /// The resolved handle, without waiting.
    ///
    /// Work issued before the connection exists fails immediately instead of
    /// queueing behind it.
    pub fn current(&self) -> AppResult<Arc<C::Handle>> {
        self.handle.get().map(Arc::clone).ok_or_else(|| {
            AppError::ConnectionUnavailable("Database connection not established".to_string())
        })
    }

    pub fn is_connected(&self) -> bool {
        self.handle.initialized()
    }

    /// Number of times a connection was actually attempted.
    pub fn connection_attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn settings(&self) -> &DatabaseSettings {
        &self.settings
    }

    /// Drop the cached handle so the next `acquire` connects again.
    ///
    /// Other holders of the previous `Arc` keep it alive until they release it.
    pub fn reset(&mut self) -> Option<Arc<C::Handle>> {
        let previous = self.handle.take();
        if previous.is_some() {
            log_info!("Database connection released");
        }
        previous
    }
}
