//! Booking write pipeline: email normalization, then the check that the
//! referenced event exists.

use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::bookings::domain::entities::{BookingCandidate, BookingField};
use crate::modules::bookings::domain::value_objects::Email;
use crate::modules::events::domain::repositories::EventRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::pipeline::{ModifiedFields, Pipeline, PipelineStep};

pub type BookingPipeline = Pipeline<BookingCandidate, BookingField>;

pub fn booking_pipeline(event_repo: Arc<dyn EventRepository>) -> BookingPipeline {
    Pipeline::new("booking")
        .add_step(Arc::new(EmailStep))
        .add_step(Arc::new(EventReferenceStep::new(event_repo)))
}

pub struct EmailStep;

#[async_trait]
impl PipelineStep<BookingCandidate, BookingField> for EmailStep {
    async fn apply(
        &self,
        mut candidate: BookingCandidate,
        _modified: &ModifiedFields<BookingField>,
    ) -> AppResult<BookingCandidate> {
        candidate.email = Email::parse(&candidate.email)?.as_str().to_string();
        Ok(candidate)
    }

    fn step_name(&self) -> &'static str {
        "email"
    }

    fn should_run(&self, modified: &ModifiedFields<BookingField>) -> bool {
        modified.contains(BookingField::Email)
    }
}

/// Rejects bookings for events that do not exist and captures the event's
/// current slug.
pub struct EventReferenceStep {
    event_repo: Arc<dyn EventRepository>,
}

impl EventReferenceStep {
    pub fn new(event_repo: Arc<dyn EventRepository>) -> Self {
        Self { event_repo }
    }
}

#[async_trait]
impl PipelineStep<BookingCandidate, BookingField> for EventReferenceStep {
    async fn apply(
        &self,
        mut candidate: BookingCandidate,
        _modified: &ModifiedFields<BookingField>,
    ) -> AppResult<BookingCandidate> {
        let event = self
            .event_repo
            .find_by_id(&candidate.event_id)
            .await?
            .ok_or_else(|| {
                AppError::DanglingReference(format!(
                    "Referenced event {} does not exist",
                    candidate.event_id
                ))
            })?;

        candidate.slug = Some(event.slug);
        Ok(candidate)
    }

    fn step_name(&self) -> &'static str {
        "event_reference"
    }

    fn should_run(&self, modified: &ModifiedFields<BookingField>) -> bool {
        modified.contains(BookingField::EventId)
    }
}
