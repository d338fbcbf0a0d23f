pub mod booking;

pub use booking::{Booking, BookingCandidate, BookingField, NewBooking};
