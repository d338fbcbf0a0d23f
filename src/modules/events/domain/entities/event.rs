/// Event aggregate and the candidate record the write pipeline works on
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::events::domain::value_objects::{EventDate, EventMode, EventTime, Slug};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::pipeline::ModifiedFields;

/// Client-writable fields of an event. `slug` is absent on purpose: it only
/// ever changes as a consequence of `Title`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Title,
    Description,
    Overview,
    Image,
    Venue,
    Location,
    Date,
    Time,
    Mode,
    Audience,
    Agenda,
    Organizer,
    Tags,
}

impl EventField {
    pub const ALL: [EventField; 13] = [
        EventField::Title,
        EventField::Description,
        EventField::Overview,
        EventField::Image,
        EventField::Venue,
        EventField::Location,
        EventField::Date,
        EventField::Time,
        EventField::Mode,
        EventField::Audience,
        EventField::Agenda,
        EventField::Organizer,
        EventField::Tags,
    ];
}

/// A persisted, fully normalized event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub slug: Slug,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: EventDate,
    pub time: EventTime,
    pub mode: EventMode,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an event. Values are taken as submitted; nothing here is
/// trusted until the pipeline has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
}

/// Partial update; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub image: Option<String>,
    pub venue: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub mode: Option<String>,
    pub audience: Option<String>,
    pub agenda: Option<Vec<String>>,
    pub organizer: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Event field set in flight between the caller and persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCandidate {
    pub id: Uuid,
    pub title: String,
    pub slug: Option<Slug>,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl EventCandidate {
    /// Candidate for a brand new event; every field counts as modified.
    pub fn from_new(input: NewEvent) -> (Self, ModifiedFields<EventField>) {
        let candidate = Self {
            id: Uuid::new_v4(),
            title: input.title,
            slug: None,
            description: input.description,
            overview: input.overview,
            image: input.image,
            venue: input.venue,
            location: input.location,
            date: input.date,
            time: input.time,
            mode: input.mode,
            audience: input.audience,
            agenda: input.agenda,
            organizer: input.organizer,
            tags: input.tags,
            created_at: None,
        };
        (candidate, ModifiedFields::of(EventField::ALL))
    }

    /// Candidate holding the stored, already canonical values.
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            slug: Some(event.slug.clone()),
            description: event.description.clone(),
            overview: event.overview.clone(),
            image: event.image.clone(),
            venue: event.venue.clone(),
            location: event.location.clone(),
            date: event.date.to_string(),
            time: event.time.to_string(),
            mode: event.mode.as_str().to_string(),
            audience: event.audience.clone(),
            agenda: event.agenda.clone(),
            organizer: event.organizer.clone(),
            tags: event.tags.clone(),
            created_at: Some(event.created_at),
        }
    }

    /// Overlay a patch and report which fields actually changed value.
    pub fn apply_patch(&mut self, patch: EventPatch) -> ModifiedFields<EventField> {
        let mut modified = ModifiedFields::none();

        overlay(&mut modified, EventField::Title, &mut self.title, patch.title);
        overlay(&mut modified, EventField::Description, &mut self.description, patch.description);
        overlay(&mut modified, EventField::Overview, &mut self.overview, patch.overview);
        overlay(&mut modified, EventField::Image, &mut self.image, patch.image);
        overlay(&mut modified, EventField::Venue, &mut self.venue, patch.venue);
        overlay(&mut modified, EventField::Location, &mut self.location, patch.location);
        overlay(&mut modified, EventField::Date, &mut self.date, patch.date);
        overlay(&mut modified, EventField::Time, &mut self.time, patch.time);
        overlay(&mut modified, EventField::Mode, &mut self.mode, patch.mode);
        overlay(&mut modified, EventField::Audience, &mut self.audience, patch.audience);
        overlay(&mut modified, EventField::Agenda, &mut self.agenda, patch.agenda);
        overlay(&mut modified, EventField::Organizer, &mut self.organizer, patch.organizer);
        overlay(&mut modified, EventField::Tags, &mut self.tags, patch.tags);

        modified
    }

    /// Turn a normalized candidate into an event.
    ///
    /// Only canonical forms are accepted here, so a candidate that skipped
    /// normalization cannot slip through.
    pub fn into_event(self, now: DateTime<Utc>) -> AppResult<Event> {
        let slug = self.slug.ok_or_else(|| {
            AppError::InternalError(format!("Event {} reached persistence without a slug", self.id))
        })?;

        Ok(Event {
            id: self.id,
            title: self.title,
            slug,
            description: self.description,
            overview: self.overview,
            image: self.image,
            venue: self.venue,
            location: self.location,
            date: EventDate::from_canonical(&self.date)?,
            time: EventTime::from_canonical(&self.time)?,
            mode: self.mode.parse()?,
            audience: self.audience,
            agenda: self.agenda,
            organizer: self.organizer,
            tags: self.tags,
            created_at: self.created_at.unwrap_or(now),
            updated_at: now,
        })
    }
}

fn overlay<V: PartialEq>(
    modified: &mut ModifiedFields<EventField>,
    field: EventField,
    current: &mut V,
    incoming: Option<V>,
) {
    if let Some(value) = incoming {
        let changed = *current != value;
        if changed {
            *current = value;
        }
        modified.mark_if(field, changed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_event() -> Event {
        let now = Utc::now();
        Event {
            id: Uuid::new_v4(),
            title: "RustConf".to_string(),
            slug: Slug::derive("RustConf").unwrap(),
            description: "Annual Rust conference".to_string(),
            overview: "Talks and workshops".to_string(),
            image: "https://img.example.com/rustconf.png".to_string(),
            venue: "Convention Center".to_string(),
            location: "Seattle, WA".to_string(),
            date: EventDate::from_canonical("2025-09-02").unwrap(),
            time: EventTime::from_canonical("09:00").unwrap(),
            mode: EventMode::Hybrid,
            audience: "Rust developers".to_string(),
            agenda: vec!["Keynote".to_string()],
            organizer: "Rust Foundation".to_string(),
            tags: vec!["rust".to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn new_candidate_marks_every_field() {
        let input = NewEvent {
            title: "t".into(),
            description: "d".into(),
            overview: "o".into(),
            image: "i".into(),
            venue: "v".into(),
            location: "l".into(),
            date: "2025-01-01".into(),
            time: "10:00".into(),
            mode: "online".into(),
            audience: "a".into(),
            agenda: vec!["x".into()],
            organizer: "org".into(),
            tags: vec!["tag".into()],
        };
        let (candidate, modified) = EventCandidate::from_new(input);

        assert_eq!(modified.len(), EventField::ALL.len());
        assert!(candidate.slug.is_none());
        assert!(candidate.created_at.is_none());
    }

    #[test]
    fn patch_marks_only_changed_values() {
        let event = stored_event();
        let mut candidate = EventCandidate::from_event(&event);

        let modified = candidate.apply_patch(EventPatch {
            title: Some("RustConf".into()),
            venue: Some("Hotel Ballroom".into()),
            tags: Some(vec!["rust".into(), "systems".into()]),
            ..Default::default()
        });

        assert!(!modified.contains(EventField::Title));
        assert!(modified.contains(EventField::Venue));
        assert!(modified.contains(EventField::Tags));
        assert_eq!(modified.len(), 2);
        assert_eq!(candidate.venue, "Hotel Ballroom");
    }

    #[test]
    fn stored_event_round_trips_through_candidate() {
        let event = stored_event();
        let rebuilt = EventCandidate::from_event(&event)
            .into_event(event.updated_at)
            .unwrap();
        assert_eq!(rebuilt, event);
    }

    #[test]
    fn into_event_rejects_non_canonical_values() {
        let mut candidate = EventCandidate::from_event(&stored_event());
        candidate.date = "Sep 2, 2025".into();
        assert!(matches!(
            candidate.into_event(Utc::now()),
            Err(AppError::InvalidDate(_))
        ));
    }

    #[test]
    fn patch_deserializes_from_camel_case() {
        let patch: EventPatch =
            serde_json::from_str(r#"{"title":"New","agenda":["Intro"]}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("New"));
        assert_eq!(patch.agenda, Some(vec!["Intro".to_string()]));
        assert!(patch.venue.is_none());
        assert!(EventPatch::default().is_empty());
    }
}
