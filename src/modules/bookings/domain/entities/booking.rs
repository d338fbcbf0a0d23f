/// Booking aggregate: one email signed up for one event
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::bookings::domain::value_objects::Email;
use crate::modules::events::domain::value_objects::Slug;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::pipeline::ModifiedFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    EventId,
    Email,
}

impl BookingField {
    pub const ALL: [BookingField; 2] = [BookingField::EventId, BookingField::Email];
}

/// A persisted booking. `slug` is the event's slug at booking time and is not
/// kept in step with later title edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub event_id: Uuid,
    pub slug: Slug,
    pub email: Email,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub event_id: Uuid,
    pub email: String,
}

impl NewBooking {
    /// Parse a JSON request body such as `{"eventId": "...", "email": "..."}`.
    pub fn from_json(body: &str) -> AppResult<Self> {
        serde_json::from_str(body)
            .map_err(|e| AppError::validation(format!("Invalid booking request: {}", e)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingCandidate {
    pub id: Uuid,
    pub event_id: Uuid,
    pub slug: Option<Slug>,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl BookingCandidate {
    pub fn from_new(input: NewBooking) -> (Self, ModifiedFields<BookingField>) {
        let candidate = Self {
            id: Uuid::new_v4(),
            event_id: input.event_id,
            slug: None,
            email: input.email,
            created_at: None,
        };
        (candidate, ModifiedFields::of(BookingField::ALL))
    }

    pub fn into_booking(self, now: DateTime<Utc>) -> AppResult<Booking> {
        let slug = self.slug.ok_or_else(|| {
            AppError::InternalError(format!(
                "Booking {} reached persistence without an event slug",
                self.id
            ))
        })?;

        Ok(Booking {
            id: self.id,
            event_id: self.event_id,
            slug,
            email: Email::parse(&self.email)?,
            created_at: self.created_at.unwrap_or(now),
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_booking_reads_camel_case_body() {
        let id = Uuid::new_v4();
        let body = format!(r#"{{"eventId":"{}","email":"a@b.co"}}"#, id);
        let booking = NewBooking::from_json(&body).unwrap();
        assert_eq!(booking.event_id, id);
        assert_eq!(booking.email, "a@b.co");
    }

    #[test]
    fn malformed_body_is_a_validation_error() {
        assert!(matches!(
            NewBooking::from_json(r#"{"email":"a@b.co"}"#),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            NewBooking::from_json(r#"{"eventId":"nope","email":"a@b.co"}"#),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn candidate_without_slug_cannot_be_persisted() {
        let (candidate, modified) = BookingCandidate::from_new(NewBooking {
            event_id: Uuid::new_v4(),
            email: "a@b.co".into(),
        });
        assert_eq!(modified.len(), 2);
        assert!(matches!(
            candidate.into_booking(Utc::now()),
            Err(AppError::InternalError(_))
        ));
    }
}
