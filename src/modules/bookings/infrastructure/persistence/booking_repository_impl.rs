use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::bookings::domain::{Booking, BookingRepository};
use crate::modules::bookings::infrastructure::models::{BookingModel, NewBookingModel};
use crate::schema::bookings;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;

pub struct BookingRepositoryImpl {
    db: Arc<Database>,
}

impl BookingRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn insert(&self, booking: &Booking) -> AppResult<Booking> {
        let db = Arc::clone(&self.db);
        let booking = booking.clone();
        let start = std::time::Instant::now();

        let model = task::spawn_blocking(move || -> AppResult<BookingModel> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(bookings::table)
                .values(NewBookingModel::from(&booking))
                .returning(BookingModel::as_returning())
                .get_result(&mut conn)?;
            Ok(row)
        })
        .await??;

        LogContext::db_operation("insert", "bookings", Some(start.elapsed().as_millis() as u64));
        Ok(model.into_entity())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Booking>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<BookingModel>> {
            let mut conn = db.get_connection()?;
            let m = bookings::table
                .find(id)
                .select(BookingModel::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(BookingModel::into_entity))
    }

    async fn list_for_event(&self, event_id: &Uuid) -> AppResult<Vec<Booking>> {
        let db = Arc::clone(&self.db);
        let event_id = *event_id;

        let models = task::spawn_blocking(move || -> AppResult<Vec<BookingModel>> {
            let mut conn = db.get_connection()?;
            let rows = bookings::table
                .filter(bookings::event_id.eq(event_id))
                .order((bookings::created_at.asc(), bookings::id.asc()))
                .select(BookingModel::as_select())
                .load(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(BookingModel::into_entity).collect())
    }

    async fn count_for_event(&self, event_id: &Uuid) -> AppResult<u64> {
        let db = Arc::clone(&self.db);
        let event_id = *event_id;

        let count = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let count = bookings::table
                .filter(bookings::event_id.eq(event_id))
                .count()
                .get_result(&mut conn)?;
            Ok(count)
        })
        .await??;

        Ok(count.max(0) as u64)
    }
}
