use crate::modules::bookings::domain::{Booking, Email};
use crate::modules::events::domain::Slug;
use crate::schema::bookings;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Row of the `bookings` table
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BookingModel {
    pub id: Uuid,
    pub event_id: Uuid,
    pub slug: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingModel {
    pub fn into_entity(self) -> Booking {
        Booking {
            id: self.id,
            event_id: self.event_id,
            slug: Slug::from_stored(self.slug),
            email: Email::from_stored(self.email),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = bookings)]
pub struct NewBookingModel<'a> {
    pub id: Uuid,
    pub event_id: Uuid,
    pub slug: &'a str,
    pub email: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Booking> for NewBookingModel<'a> {
    fn from(booking: &'a Booking) -> Self {
        Self {
            id: booking.id,
            event_id: booking.event_id,
            slug: booking.slug.as_str(),
            email: booking.email.as_str(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}
