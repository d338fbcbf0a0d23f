/// Shared infrastructure concerns
///
/// The Postgres pool handle and the connection manager that hands it out.
pub mod connection_manager;
pub mod database;

// Re-exports for convenience
pub use connection_manager::{ConnectionManager, Connector, PgConnector};
pub use database::{Database, DbConnection, DbPool};
