pub mod bookings;
pub mod events;
