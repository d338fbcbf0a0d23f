pub mod modules;
mod schema;
pub mod shared;

use modules::{
    bookings::{BookingRepository, BookingRepositoryImpl, BookingService},
    events::{EventListRepair, EventRepository, EventRepositoryImpl, EventService},
};
use shared::{AppConfig, AppResult, ConnectionManager, Database};
use std::sync::Arc;

/// Services wired against the process's single database handle.
pub struct AppState {
    pub connections: Arc<ConnectionManager>,
    pub events: Arc<EventService>,
    pub bookings: Arc<BookingService>,
    pub list_repair: Arc<EventListRepair>,
}

impl AppState {
    /// Connect, bring the schema up to date and build the services.
    ///
    /// Any failure here is fatal; nothing is served without a database.
    pub async fn initialize(config: AppConfig) -> AppResult<Self> {
        let connections = Arc::new(ConnectionManager::postgres(config.database));
        let database = connections.acquire().await?;

        let migrations_db = Arc::clone(&database);
        tokio::task::spawn_blocking(move || migrations_db.run_migrations()).await??;

        Ok(Self::with_database(connections, database))
    }

    pub fn with_database(connections: Arc<ConnectionManager>, database: Arc<Database>) -> Self {
        let event_repo: Arc<dyn EventRepository> =
            Arc::new(EventRepositoryImpl::new(Arc::clone(&database)));
        let booking_repo: Arc<dyn BookingRepository> =
            Arc::new(BookingRepositoryImpl::new(Arc::clone(&database)));

        let events = Arc::new(EventService::new(Arc::clone(&event_repo)));
        let bookings = Arc::new(BookingService::new(booking_repo, Arc::clone(&event_repo)));
        let list_repair = Arc::new(EventListRepair::new(event_repo));

        log::info!("Services initialized");

        Self {
            connections,
            events,
            bookings,
            list_repair,
        }
    }
}
