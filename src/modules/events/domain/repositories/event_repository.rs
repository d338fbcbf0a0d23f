use crate::modules::events::domain::entities::Event;
use crate::modules::events::domain::value_objects::Slug;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persist a new event. A taken slug fails with `UniquenessViolation`.
    async fn insert(&self, event: &Event) -> AppResult<Event>;

    /// Overwrite every stored column of an existing event
    async fn update(&self, event: &Event) -> AppResult<Event>;

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Event>>;

    async fn find_by_slug(&self, slug: &Slug) -> AppResult<Option<Event>>;

    async fn exists(&self, id: &Uuid) -> AppResult<bool>;

    /// Newest first by creation time
    async fn list(&self, params: &PaginationParams) -> AppResult<PaginatedResult<Event>>;
}
