pub mod event_form;
pub mod list_repair;
pub mod service;

pub use event_form::EventForm;
pub use list_repair::{repair_list_field, EventListRepair, ListRepair, RepairReport};
pub use service::EventService;
