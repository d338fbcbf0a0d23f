pub mod normalization;

pub use normalization::{event_pipeline, EventPipeline};
