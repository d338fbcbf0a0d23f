/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use devevents_lib::modules::bookings::NewBooking;
use devevents_lib::modules::events::NewEvent;
use std::sync::atomic::{AtomicU32, Ordering};
use uuid::Uuid;

static SEQUENCE: AtomicU32 = AtomicU32::new(1);

pub struct EventFactory {
    title: String,
    description: String,
    overview: String,
    image: String,
    venue: String,
    location: String,
    date: String,
    time: String,
    mode: String,
    audience: String,
    agenda: Vec<String>,
    organizer: String,
    tags: Vec<String>,
}

impl Default for EventFactory {
    fn default() -> Self {
        // Distinct titles keep slugs from colliding across tests
        let n = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self {
            title: format!("Test Event {}", n),
            description: "A gathering of developers".to_string(),
            overview: "Talks, workshops and networking".to_string(),
            image: "https://res.cloudinary.com/demo/image/upload/event.png".to_string(),
            venue: "Main Hall".to_string(),
            location: "Berlin, Germany".to_string(),
            date: "2025-11-03".to_string(),
            time: "09:30".to_string(),
            mode: "offline".to_string(),
            audience: "Developers".to_string(),
            agenda: vec!["Registration".to_string(), "Keynote".to_string()],
            organizer: "Dev Community".to_string(),
            tags: vec!["conference".to_string()],
        }
    }
}

impl EventFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn time(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    pub fn mode(mut self, mode: &str) -> Self {
        self.mode = mode.to_string();
        self
    }

    pub fn venue(mut self, venue: &str) -> Self {
        self.venue = venue.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn agenda(mut self, agenda: &[&str]) -> Self {
        self.agenda = agenda.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn build(self) -> NewEvent {
        NewEvent {
            title: self.title,
            description: self.description,
            overview: self.overview,
            image: self.image,
            venue: self.venue,
            location: self.location,
            date: self.date,
            time: self.time,
            mode: self.mode,
            audience: self.audience,
            agenda: self.agenda,
            organizer: self.organizer,
            tags: self.tags,
        }
    }
}

pub fn booking_for(event_id: Uuid, email: &str) -> NewBooking {
    NewBooking {
        event_id,
        email: email.to_string(),
    }
}
