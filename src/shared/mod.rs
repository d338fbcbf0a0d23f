// Shared kernel used by the events and bookings modules

pub mod application; // Shared application layer patterns
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Database handle and connection manager
pub mod pipeline; // Ordered normalization/validation steps
pub mod utils; // Logging and field validators

// Re-exports for convenience
pub use config::{AppConfig, DatabaseSettings};
pub use errors::{AppError, AppResult};
pub use infrastructure::connection_manager::{ConnectionManager, Connector, PgConnector};
pub use infrastructure::database::Database;
