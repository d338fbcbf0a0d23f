use crate::modules::events::domain::{Event, EventDate, EventMode, EventTime, Slug};
use crate::schema::events;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// ================== EVENT MODELS ==================

/// Row of the `events` table
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EventModel {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub mode: EventMode,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EventModel {
    pub fn into_entity(self) -> Event {
        Event {
            id: self.id,
            title: self.title,
            slug: Slug::from_stored(self.slug),
            description: self.description,
            overview: self.overview,
            image: self.image,
            venue: self.venue,
            location: self.location,
            date: EventDate::new(self.date),
            time: EventTime::from_stored(self.time),
            mode: self.mode,
            audience: self.audience,
            agenda: self.agenda,
            organizer: self.organizer,
            tags: self.tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = events)]
pub struct NewEventModel<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub slug: &'a str,
    pub description: &'a str,
    pub overview: &'a str,
    pub image: &'a str,
    pub venue: &'a str,
    pub location: &'a str,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub mode: EventMode,
    pub audience: &'a str,
    pub agenda: &'a [String],
    pub organizer: &'a str,
    pub tags: &'a [String],
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Event> for NewEventModel<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            id: event.id,
            title: &event.title,
            slug: event.slug.as_str(),
            description: &event.description,
            overview: &event.overview,
            image: &event.image,
            venue: &event.venue,
            location: &event.location,
            date: event.date.date(),
            time: event.time.time(),
            mode: event.mode,
            audience: &event.audience,
            agenda: &event.agenda,
            organizer: &event.organizer,
            tags: &event.tags,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// Every mutable column; identity and creation time are never rewritten
#[derive(AsChangeset, Debug)]
#[diesel(table_name = events)]
pub struct EventChangeset<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub description: &'a str,
    pub overview: &'a str,
    pub image: &'a str,
    pub venue: &'a str,
    pub location: &'a str,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub mode: EventMode,
    pub audience: &'a str,
    pub agenda: &'a [String],
    pub organizer: &'a str,
    pub tags: &'a [String],
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Event> for EventChangeset<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            title: &event.title,
            slug: event.slug.as_str(),
            description: &event.description,
            overview: &event.overview,
            image: &event.image,
            venue: &event.venue,
            location: &event.location,
            date: event.date.date(),
            time: event.time.time(),
            mode: event.mode,
            audience: &event.audience,
            agenda: &event.agenda,
            organizer: &event.organizer,
            tags: &event.tags,
            updated_at: event.updated_at,
        }
    }
}
