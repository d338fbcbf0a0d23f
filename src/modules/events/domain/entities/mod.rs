pub mod event;

pub use event::{Event, EventCandidate, EventField, EventPatch, NewEvent};
