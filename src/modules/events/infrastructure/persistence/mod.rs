pub mod event_repository_impl;

pub use event_repository_impl::EventRepositoryImpl;
