pub mod event_repository;

pub use event_repository::EventRepository;
#[cfg(test)]
pub use event_repository::MockEventRepository;
