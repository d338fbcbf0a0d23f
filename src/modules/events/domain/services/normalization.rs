//! Event write pipeline.
//!
//! Field requirements are checked on every write. Slug, date and time are
//! rewritten only when the write touched the field they derive from, so a
//! record re-saved without changes keeps its stored canonical values.

use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::events::domain::entities::{EventCandidate, EventField};
use crate::modules::events::domain::value_objects::{EventDate, EventMode, EventTime, Slug};
use crate::shared::errors::AppResult;
use crate::shared::pipeline::{ModifiedFields, Pipeline, PipelineStep};
use crate::shared::utils::Validator;

pub type EventPipeline = Pipeline<EventCandidate, EventField>;

/// Steps in execution order: requirements, slug, date, time.
pub fn event_pipeline() -> EventPipeline {
    Pipeline::new("event")
        .add_step(Arc::new(RequiredFieldsStep))
        .add_step(Arc::new(SlugStep))
        .add_step(Arc::new(DateStep))
        .add_step(Arc::new(TimeStep))
}

/// Trims required text, checks list lengths and the mode value.
pub struct RequiredFieldsStep;

#[async_trait]
impl PipelineStep<EventCandidate, EventField> for RequiredFieldsStep {
    async fn apply(
        &self,
        mut candidate: EventCandidate,
        _modified: &ModifiedFields<EventField>,
    ) -> AppResult<EventCandidate> {
        candidate.title = Validator::required_text("title", &candidate.title)?;
        candidate.description = Validator::required_text("description", &candidate.description)?;
        candidate.overview = Validator::required_text("overview", &candidate.overview)?;
        candidate.image = Validator::required_text("image", &candidate.image)?;
        candidate.venue = Validator::required_text("venue", &candidate.venue)?;
        candidate.location = Validator::required_text("location", &candidate.location)?;
        candidate.date = Validator::required_text("date", &candidate.date)?;
        candidate.time = Validator::required_text("time", &candidate.time)?;
        candidate.audience = Validator::required_text("audience", &candidate.audience)?;
        candidate.organizer = Validator::required_text("organizer", &candidate.organizer)?;

        let mode: EventMode = Validator::required_text("mode", &candidate.mode)?.parse()?;
        candidate.mode = mode.as_str().to_string();

        candidate.agenda = Validator::required_list("agenda", &candidate.agenda)?;
        candidate.tags = Validator::required_list("tags", &candidate.tags)?;

        Ok(candidate)
    }

    fn step_name(&self) -> &'static str {
        "required_fields"
    }
}

pub struct SlugStep;

#[async_trait]
impl PipelineStep<EventCandidate, EventField> for SlugStep {
    async fn apply(
        &self,
        mut candidate: EventCandidate,
        _modified: &ModifiedFields<EventField>,
    ) -> AppResult<EventCandidate> {
        candidate.slug = Some(Slug::derive(&candidate.title)?);
        Ok(candidate)
    }

    fn step_name(&self) -> &'static str {
        "slug"
    }

    fn should_run(&self, modified: &ModifiedFields<EventField>) -> bool {
        modified.contains(EventField::Title)
    }
}

pub struct DateStep;

#[async_trait]
impl PipelineStep<EventCandidate, EventField> for DateStep {
    async fn apply(
        &self,
        mut candidate: EventCandidate,
        _modified: &ModifiedFields<EventField>,
    ) -> AppResult<EventCandidate> {
        candidate.date = EventDate::normalize(&candidate.date)?.to_string();
        Ok(candidate)
    }

    fn step_name(&self) -> &'static str {
        "date"
    }

    fn should_run(&self, modified: &ModifiedFields<EventField>) -> bool {
        modified.contains(EventField::Date)
    }
}

pub struct TimeStep;

#[async_trait]
impl PipelineStep<EventCandidate, EventField> for TimeStep {
    async fn apply(
        &self,
        mut candidate: EventCandidate,
        _modified: &ModifiedFields<EventField>,
    ) -> AppResult<EventCandidate> {
        candidate.time = EventTime::normalize(&candidate.time)?.to_string();
        Ok(candidate)
    }

    fn step_name(&self) -> &'static str {
        "time"
    }

    fn should_run(&self, modified: &ModifiedFields<EventField>) -> bool {
        modified.contains(EventField::Time)
    }
}
