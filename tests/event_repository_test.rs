/// Event and booking repository tests - database operations
///
/// These need a reachable Postgres at `TEST_DATABASE_URL`:
/// `cargo test -- --ignored`
mod utils;

use devevents_lib::modules::bookings::{BookingRepositoryImpl, BookingService};
use devevents_lib::modules::events::{
    EventPatch, EventRepository, EventRepositoryImpl, EventService,
};
use devevents_lib::shared::application::PaginationParams;
use devevents_lib::shared::errors::AppError;
use std::sync::Arc;
use utils::db;
use utils::factories::{booking_for, EventFactory};
use uuid::Uuid;

fn services() -> (EventService, BookingService, Arc<EventRepositoryImpl>) {
    let database = db::get_test_db();
    let event_repo = Arc::new(EventRepositoryImpl::new(Arc::clone(&database)));
    let booking_repo = Arc::new(BookingRepositoryImpl::new(database));
    (
        EventService::new(event_repo.clone()),
        BookingService::new(booking_repo, event_repo.clone()),
        event_repo,
    )
}

#[tokio::test]
#[ignore]
async fn insert_and_find_round_trip() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let (events, _, repo) = services();

    let created = events
        .create_event(
            EventFactory::new()
                .title("Postgres Conf")
                .time("7:15 PM")
                .tags(&["postgres", "sql"])
                .build(),
        )
        .await
        .unwrap();

    let by_id = repo.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(by_id.slug.as_str(), "postgres-conf");
    assert_eq!(by_id.time.to_string(), "19:15");
    assert_eq!(by_id.tags, vec!["postgres", "sql"]);
    assert!(repo.exists(&created.id).await.unwrap());
    assert!(!repo.exists(&Uuid::new_v4()).await.unwrap());

    let by_slug = events.get_event_by_slug("postgres-conf").await.unwrap();
    assert_eq!(by_slug.id, created.id);
}

#[tokio::test]
#[ignore]
async fn unique_index_rejects_duplicate_slug() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let (events, _, _) = services();

    events
        .create_event(EventFactory::new().title("Dup Conf").build())
        .await
        .unwrap();
    let err = events
        .create_event(EventFactory::new().title("DUP conf!").build())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::UniquenessViolation(_)));
}

#[tokio::test]
#[ignore]
async fn racing_creates_leave_one_winner() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let (events, _, repo) = services();
    let events = Arc::new(events);

    let attempts = (0..4).map(|_| {
        let events = Arc::clone(&events);
        tokio::spawn(async move {
            events
                .create_event(EventFactory::new().title("Race Conf").build())
                .await
        })
    });
    let results = futures::future::join_all(attempts).await;

    let (ok, failed): (Vec<_>, Vec<_>) = results
        .into_iter()
        .map(|r| r.unwrap())
        .partition(|r| r.is_ok());
    assert_eq!(ok.len(), 1);
    assert!(failed
        .iter()
        .all(|r| matches!(r, Err(AppError::UniquenessViolation(_)))));

    let page = repo.list(&PaginationParams::default()).await.unwrap();
    assert_eq!(page.total_count, 1);
}

#[tokio::test]
#[ignore]
async fn update_rewrites_columns_and_keeps_created_at() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let (events, _, repo) = services();

    let created = events
        .create_event(EventFactory::new().title("Old Name").build())
        .await
        .unwrap();
    events
        .update_event(
            &created.id,
            EventPatch {
                title: Some("New Name".into()),
                date: Some("2026-01-15".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let stored = repo.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(stored.slug.as_str(), "new-name");
    assert_eq!(stored.date.to_string(), "2026-01-15");
    assert_eq!(
        stored.created_at.timestamp_micros(),
        created.created_at.timestamp_micros()
    );
    assert!(stored.updated_at >= stored.created_at);
}

#[tokio::test]
#[ignore]
async fn bookings_are_indexed_by_event() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let (events, bookings, _) = services();

    let event = events.create_event(EventFactory::new().build()).await.unwrap();
    bookings
        .create_booking(booking_for(event.id, "first@example.com"))
        .await
        .unwrap();
    bookings
        .create_booking(booking_for(event.id, "second@example.com"))
        .await
        .unwrap();

    let err = bookings
        .create_booking(booking_for(Uuid::new_v4(), "lost@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DanglingReference(_)));

    let stored = bookings.bookings_for_event(&event.id).await.unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].email.as_str(), "first@example.com");
    assert_eq!(bookings.booking_count(&event.id).await.unwrap(), 2);
}

#[tokio::test]
#[ignore]
async fn long_text_fields_are_stored_in_full() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let (events, bookings, repo) = services();

    let title = "Rust ".repeat(60);
    let venue = "Hall ".repeat(60);
    let created = events
        .create_event(EventFactory::new().title(&title).venue(&venue).build())
        .await
        .unwrap();

    let stored = repo.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(stored.title, title.trim());
    assert_eq!(stored.venue, venue.trim());
    assert!(stored.slug.as_str().len() > 255);

    let email = format!("{}@example.com", "a".repeat(320));
    let booking = bookings
        .create_booking(booking_for(created.id, &email))
        .await
        .unwrap();
    assert_eq!(booking.email.as_str(), email);
}
