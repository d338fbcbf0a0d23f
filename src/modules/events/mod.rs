/// Events bounded context
///
/// - Domain: event aggregate, value objects, write pipeline, repository port
/// - Application: services, form parsing, list-field repair
/// - Infrastructure: Diesel-backed repository
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{EventForm, EventListRepair, EventService, RepairReport};
pub use domain::{
    Event, EventCandidate, EventDate, EventField, EventMode, EventPatch, EventRepository,
    EventTime, NewEvent, Slug,
};
pub use infrastructure::EventRepositoryImpl;
