/// Conversion of submitted form fields into a typed event input
use std::collections::HashMap;

use crate::modules::events::domain::entities::NewEvent;
use crate::shared::errors::{AppError, AppResult};

const LIST_FIELDS_ERROR: &str = "Invalid or missing tags/agenda";

/// Untyped field map as received from a multipart form.
///
/// `tags` and `agenda` arrive as JSON-encoded string arrays. `image` holds the
/// URL produced by the upload step that runs before the form is parsed.
pub struct EventForm;

impl EventForm {
    pub fn from_fields(fields: &HashMap<String, String>) -> AppResult<NewEvent> {
        let image = fields
            .get("image")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::validation("Image file is required"))?
            .clone();

        let tags = json_list(fields.get("tags"))?;
        let agenda = json_list(fields.get("agenda"))?;

        Ok(NewEvent {
            title: scalar(fields, "title")?,
            description: scalar(fields, "description")?,
            overview: scalar(fields, "overview")?,
            image,
            venue: scalar(fields, "venue")?,
            location: scalar(fields, "location")?,
            date: scalar(fields, "date")?,
            time: scalar(fields, "time")?,
            mode: scalar(fields, "mode")?,
            audience: scalar(fields, "audience")?,
            agenda,
            organizer: scalar(fields, "organizer")?,
            tags,
        })
    }
}

// Presence only; trimming and emptiness are the pipeline's job
fn scalar(fields: &HashMap<String, String>, name: &str) -> AppResult<String> {
    fields
        .get(name)
        .cloned()
        .ok_or_else(|| AppError::validation(format!("Missing form field '{}'", name)))
}

fn json_list(raw: Option<&String>) -> AppResult<Vec<String>> {
    let raw = raw.ok_or_else(|| AppError::validation(LIST_FIELDS_ERROR))?;
    serde_json::from_str::<Vec<String>>(raw).map_err(|_| AppError::validation(LIST_FIELDS_ERROR))
}
