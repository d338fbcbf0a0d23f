pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Booking, BookingCandidate, BookingField, NewBooking};
pub use repositories::BookingRepository;
pub use value_objects::Email;
