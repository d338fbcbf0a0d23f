/// In-memory repositories for service-level tests
///
/// The event store rejects duplicate slugs the same way the unique index does.
use async_trait::async_trait;
use devevents_lib::modules::bookings::{Booking, BookingRepository};
use devevents_lib::modules::events::{Event, EventRepository, Slug};
use devevents_lib::shared::application::{PaginatedResult, PaginationParams};
use devevents_lib::shared::errors::{AppError, AppResult};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryEventRepository {
    events: Mutex<Vec<Event>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Store an event as is, bypassing every check
    pub fn seed(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    pub fn snapshot(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

fn slug_taken(events: &[Event], slug: &Slug, except: Uuid) -> bool {
    events.iter().any(|e| e.slug == *slug && e.id != except)
}

fn duplicate_slug(slug: &Slug) -> AppError {
    AppError::UniquenessViolation(format!(
        "duplicate key value violates unique constraint (idx_events_slug): {}",
        slug
    ))
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn insert(&self, event: &Event) -> AppResult<Event> {
        let mut events = self.events.lock().unwrap();
        if slug_taken(&events, &event.slug, event.id) {
            return Err(duplicate_slug(&event.slug));
        }
        events.push(event.clone());
        Ok(event.clone())
    }

    async fn update(&self, event: &Event) -> AppResult<Event> {
        let mut events = self.events.lock().unwrap();
        if slug_taken(&events, &event.slug, event.id) {
            return Err(duplicate_slug(&event.slug));
        }
        let stored = events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| AppError::NotFound("Record not found in database".to_string()))?;
        *stored = event.clone();
        Ok(event.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Event>> {
        let events = self.events.lock().unwrap();
        Ok(events.iter().find(|e| e.id == *id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> AppResult<Option<Event>> {
        let events = self.events.lock().unwrap();
        Ok(events.iter().find(|e| e.slug == *slug).cloned())
    }

    async fn exists(&self, id: &Uuid) -> AppResult<bool> {
        let events = self.events.lock().unwrap();
        Ok(events.iter().any(|e| e.id == *id))
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<PaginatedResult<Event>> {
        let mut events = self.events.lock().unwrap().clone();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

        let total = events.len() as u64;
        let items = events
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .collect();
        Ok(PaginatedResult::new(items, total, params))
    }
}

#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn insert(&self, booking: &Booking) -> AppResult<Booking> {
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(booking.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Booking>> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings.iter().find(|b| b.id == *id).cloned())
    }

    async fn list_for_event(&self, event_id: &Uuid) -> AppResult<Vec<Booking>> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings
            .iter()
            .filter(|b| b.event_id == *event_id)
            .cloned()
            .collect())
    }

    async fn count_for_event(&self, event_id: &Uuid) -> AppResult<u64> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings.iter().filter(|b| b.event_id == *event_id).count() as u64)
    }
}
