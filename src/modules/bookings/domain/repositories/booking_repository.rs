use crate::modules::bookings::domain::entities::Booking;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert(&self, booking: &Booking) -> AppResult<Booking>;

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Booking>>;

    /// Oldest first
    async fn list_for_event(&self, event_id: &Uuid) -> AppResult<Vec<Booking>>;

    async fn count_for_event(&self, event_id: &Uuid) -> AppResult<u64>;
}
