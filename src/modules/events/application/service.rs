use super::super::domain::{
    entities::{Event, EventCandidate, EventPatch, NewEvent},
    repositories::EventRepository,
    services::{event_pipeline, EventPipeline},
    value_objects::Slug,
};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::TimedOperation;
use crate::{log_debug, log_info};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct EventService {
    event_repo: Arc<dyn EventRepository>,
    pipeline: EventPipeline,
}

impl EventService {
    pub fn new(event_repo: Arc<dyn EventRepository>) -> Self {
        Self {
            event_repo,
            pipeline: event_pipeline(),
        }
    }

    /// Normalize and store a new event.
    pub async fn create_event(&self, input: NewEvent) -> AppResult<Event> {
        let timer = TimedOperation::new("create_event");
        let (candidate, modified) = EventCandidate::from_new(input);

        let normalized = self.pipeline.run(candidate, &modified).await?;
        let event = normalized.into_event(Utc::now())?;
        let saved = self.event_repo.insert(&event).await?;

        log_info!("Created event '{}' ({})", saved.slug, saved.id);
        timer.finish();
        Ok(saved)
    }

    /// Apply a partial update. Only values that differ from the stored record
    /// count as modified, so slug, date and time are re-derived only when
    /// their source actually changed.
    pub async fn update_event(&self, id: &Uuid, patch: EventPatch) -> AppResult<Event> {
        let existing = self.get_event(id).await?;
        if patch.is_empty() {
            log_debug!("Re-saving event {} without changes", id);
        }

        let mut candidate = EventCandidate::from_event(&existing);
        let modified = candidate.apply_patch(patch);
        log_debug!("Updating event {}: {} field(s) modified", id, modified.len());

        let normalized = self.pipeline.run(candidate, &modified).await?;
        let event = normalized.into_event(Utc::now())?;
        let saved = self.event_repo.update(&event).await?;

        if saved.slug != existing.slug {
            log_info!("Event {} slug changed: '{}' -> '{}'", id, existing.slug, saved.slug);
        }
        Ok(saved)
    }

    pub async fn get_event(&self, id: &Uuid) -> AppResult<Event> {
        self.event_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))
    }

    /// Look up an event by a raw slug parameter. Malformed slugs are rejected
    /// before storage is consulted.
    pub async fn get_event_by_slug(&self, raw_slug: &str) -> AppResult<Event> {
        let slug = Slug::parse(raw_slug)?;
        self.event_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event with slug '{}' not found", slug)))
    }

    pub async fn list_events(&self, params: PaginationParams) -> AppResult<PaginatedResult<Event>> {
        let params = PaginationParams::new(params.page, params.page_size);
        self.event_repo.list(&params).await
    }
}
