/// Bookings bounded context
///
/// A booking holds a non-owning reference to an event, verified to exist when
/// the booking is written.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::BookingService;
pub use domain::{Booking, BookingRepository, Email, NewBooking};
pub use infrastructure::BookingRepositoryImpl;
