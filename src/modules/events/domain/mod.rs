pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Event, EventCandidate, EventField, EventPatch, NewEvent};
pub use repositories::EventRepository;
pub use value_objects::{EventDate, EventMode, EventTime, Slug};
