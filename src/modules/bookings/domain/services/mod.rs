pub mod integrity;

pub use integrity::{booking_pipeline, BookingPipeline};
