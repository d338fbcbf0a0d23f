pub mod booking_repository;

pub use booking_repository::BookingRepository;
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
