/// Database test utilities with singleton pattern
///
/// Provides thread-safe access to the test database with proper isolation.
/// Tests using it are `#[ignore]`d and need `TEST_DATABASE_URL`.
use devevents_lib::shared::infrastructure::{Database, DbPool};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};

static DB: Lazy<Arc<Database>> = Lazy::new(|| {
    dotenvy::dotenv().ok();
    let test_db_url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must be set in .env for tests");

    let manager = ConnectionManager::<PgConnection>::new(test_db_url);
    let pool = r2d2::Pool::builder()
        .max_size(10)
        .build(manager)
        .expect("Failed to create test database pool");

    let db = Database::from_pool(pool);
    db.run_migrations().expect("Failed to migrate test database");
    Arc::new(db)
});

/// Shared, migrated test database
pub fn get_test_db() -> Arc<Database> {
    Arc::clone(&DB)
}

pub fn get_test_db_pool() -> DbPool {
    DB.pool().clone()
}

/// Clean all test tables - use at the start of each test
pub fn clean_test_db() {
    let pool = get_test_db_pool();
    let mut conn = pool.get().expect("Failed to get DB connection");

    diesel::sql_query("TRUNCATE TABLE bookings, events")
        .execute(&mut conn)
        .expect("Failed to clean tables");
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure tests run serially
/// Returns a guard that releases the lock when dropped
pub fn acquire_test_lock() -> std::sync::MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
