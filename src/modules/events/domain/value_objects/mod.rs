pub mod event_date;
pub mod event_mode;
pub mod event_time;
pub mod slug;

pub use event_date::EventDate;
pub use event_mode::EventMode;
pub use event_time::EventTime;
pub use slug::Slug;
