use super::super::domain::{
    entities::{Booking, BookingCandidate, NewBooking},
    repositories::BookingRepository,
    services::{booking_pipeline, BookingPipeline},
};
use crate::log_info;
use crate::modules::events::domain::repositories::EventRepository;
use crate::shared::errors::AppResult;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct BookingService {
    booking_repo: Arc<dyn BookingRepository>,
    pipeline: BookingPipeline,
}

impl BookingService {
    pub fn new(
        booking_repo: Arc<dyn BookingRepository>,
        event_repo: Arc<dyn EventRepository>,
    ) -> Self {
        Self {
            booking_repo,
            pipeline: booking_pipeline(event_repo),
        }
    }

    /// Validate and store a booking. Nothing is written when the email is
    /// invalid or the event does not exist.
    pub async fn create_booking(&self, input: NewBooking) -> AppResult<Booking> {
        let (candidate, modified) = BookingCandidate::from_new(input);

        let checked = self.pipeline.run(candidate, &modified).await?;
        let booking = checked.into_booking(Utc::now())?;
        let saved = self.booking_repo.insert(&booking).await?;

        log_info!("Booked {} for event '{}'", saved.email, saved.slug);
        Ok(saved)
    }

    pub async fn bookings_for_event(&self, event_id: &Uuid) -> AppResult<Vec<Booking>> {
        self.booking_repo.list_for_event(event_id).await
    }

    pub async fn booking_count(&self, event_id: &Uuid) -> AppResult<u64> {
        self.booking_repo.count_for_event(event_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::bookings::domain::repositories::MockBookingRepository;
    use crate::modules::events::domain::repositories::MockEventRepository;
    use crate::modules::events::domain::value_objects::{
        EventDate, EventMode, EventTime, Slug,
    };
    use crate::modules::events::domain::Event;
    use crate::shared::errors::AppError;

    fn event(id: Uuid) -> Event {
        let now = Utc::now();
        Event {
            id,
            title: "KubeCon EU".into(),
            slug: Slug::derive("KubeCon EU").unwrap(),
            description: "d".into(),
            overview: "o".into(),
            image: "https://img.example.com/k.png".into(),
            venue: "v".into(),
            location: "l".into(),
            date: EventDate::from_canonical("2026-03-23").unwrap(),
            time: EventTime::from_canonical("08:30").unwrap(),
            mode: EventMode::Hybrid,
            audience: "a".into(),
            agenda: vec!["Keynotes".into()],
            organizer: "CNCF".into(),
            tags: vec!["kubernetes".into()],
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_booking_stores_normalized_booking() {
        let event_id = Uuid::new_v4();
        let mut events = MockEventRepository::new();
        events
            .expect_find_by_id()
            .returning(|id| Ok(Some(event(*id))));

        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_insert()
            .times(1)
            .returning(|b| Ok(b.clone()));

        let service = BookingService::new(Arc::new(bookings), Arc::new(events));
        let booking = service
            .create_booking(NewBooking {
                event_id,
                email: "Dev@Example.org".into(),
            })
            .await
            .unwrap();

        assert_eq!(booking.event_id, event_id);
        assert_eq!(booking.slug.as_str(), "kubecon-eu");
        assert_eq!(booking.email.as_str(), "dev@example.org");
    }

    #[tokio::test]
    async fn dangling_reference_persists_nothing() {
        let mut events = MockEventRepository::new();
        events.expect_find_by_id().returning(|_| Ok(None));

        let mut bookings = MockBookingRepository::new();
        bookings.expect_insert().never();

        let service = BookingService::new(Arc::new(bookings), Arc::new(events));
        let err = service
            .create_booking(NewBooking {
                event_id: Uuid::new_v4(),
                email: "dev@example.org".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DanglingReference(_)));
    }

    #[tokio::test]
    async fn count_delegates_to_repository() {
        let event_id = Uuid::new_v4();
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_count_for_event()
            .withf(move |id| *id == event_id)
            .returning(|_| Ok(3));

        let service = BookingService::new(Arc::new(bookings), Arc::new(MockEventRepository::new()));
        assert_eq!(service.booking_count(&event_id).await.unwrap(), 3);
    }
}
