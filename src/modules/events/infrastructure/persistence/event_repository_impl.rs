use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::log_debug;
use crate::modules::events::domain::{Event, EventRepository, Slug};
use crate::modules::events::infrastructure::models::{EventChangeset, EventModel, NewEventModel};
use crate::schema::events;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;

pub struct EventRepositoryImpl {
    db: Arc<Database>,
}

impl EventRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn insert(&self, event: &Event) -> AppResult<Event> {
        let db = Arc::clone(&self.db);
        let event = event.clone();
        let start = std::time::Instant::now();

        let model = task::spawn_blocking(move || -> AppResult<EventModel> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(events::table)
                .values(NewEventModel::from(&event))
                .returning(EventModel::as_returning())
                .get_result(&mut conn)?;
            Ok(row)
        })
        .await??;

        LogContext::db_operation("insert", "events", Some(start.elapsed().as_millis() as u64));
        Ok(model.into_entity())
    }

    async fn update(&self, event: &Event) -> AppResult<Event> {
        let db = Arc::clone(&self.db);
        let event = event.clone();
        let start = std::time::Instant::now();

        let model = task::spawn_blocking(move || -> AppResult<EventModel> {
            let mut conn = db.get_connection()?;
            let row = diesel::update(events::table.find(event.id))
                .set(EventChangeset::from(&event))
                .returning(EventModel::as_returning())
                .get_result(&mut conn)?;
            Ok(row)
        })
        .await??;

        LogContext::db_operation("update", "events", Some(start.elapsed().as_millis() as u64));
        Ok(model.into_entity())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Event>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<EventModel>> {
            let mut conn = db.get_connection()?;
            let m = events::table
                .find(id)
                .select(EventModel::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(EventModel::into_entity))
    }

    async fn find_by_slug(&self, slug: &Slug) -> AppResult<Option<Event>> {
        let db = Arc::clone(&self.db);
        let slug = slug.as_str().to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<EventModel>> {
            let mut conn = db.get_connection()?;
            let m = events::table
                .filter(events::slug.eq(&slug))
                .select(EventModel::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(EventModel::into_entity))
    }

    async fn exists(&self, id: &Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let found = diesel::select(diesel::dsl::exists(events::table.find(id)))
                .get_result::<bool>(&mut conn)?;
            Ok(found)
        })
        .await?
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<PaginatedResult<Event>> {
        let db = Arc::clone(&self.db);
        let params = *params;

        let (models, total) = task::spawn_blocking(move || -> AppResult<(Vec<EventModel>, i64)> {
            let mut conn = db.get_connection()?;
            let total: i64 = events::table.count().get_result(&mut conn)?;
            let rows = events::table
                .order((events::created_at.desc(), events::id.asc()))
                .limit(params.limit())
                .offset(params.offset())
                .select(EventModel::as_select())
                .load(&mut conn)?;
            Ok((rows, total))
        })
        .await??;

        log_debug!(
            "Loaded {} of {} events (page {})",
            models.len(),
            total,
            params.page
        );

        let items = models.into_iter().map(EventModel::into_entity).collect();
        Ok(PaginatedResult::new(items, total.max(0) as u64, &params))
    }
}
