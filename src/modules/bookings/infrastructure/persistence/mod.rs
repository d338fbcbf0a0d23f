pub mod booking_repository_impl;

pub use booking_repository_impl::BookingRepositoryImpl;
