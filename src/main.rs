use anyhow::{bail, Context};
use devevents_lib::shared::application::PaginationParams;
use devevents_lib::shared::utils::init_logger;
use devevents_lib::shared::AppConfig;
use devevents_lib::AppState;

const USAGE: &str = "usage: devevents [migrate | list [page] | show <slug> | repair-lists]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("migrate");
    if !matches!(command, "migrate" | "list" | "show" | "repair-lists") {
        bail!("unknown command '{}'\n{}", command, USAGE);
    }

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let state = AppState::initialize(config)
        .await
        .context("failed to initialize database")?;

    match command {
        "list" => {
            let page = match args.get(1) {
                Some(raw) => raw.parse().with_context(|| format!("invalid page '{}'", raw))?,
                None => 1,
            };
            let events = state
                .events
                .list_events(PaginationParams::new(page, 20))
                .await?;
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        "show" => {
            let Some(slug) = args.get(1) else {
                bail!("show needs a slug\n{}", USAGE);
            };
            let event = state.events.get_event_by_slug(slug).await?;
            let bookings = state.bookings.booking_count(&event.id).await?;
            println!("{}", serde_json::to_string_pretty(&event)?);
            log::info!("{} booking(s) for '{}'", bookings, event.slug);
        }
        "repair-lists" => {
            let report = state.list_repair.run().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            let status = state.connections.current()?.pool_status();
            log::info!(
                "Database '{}' is ready ({} of {} pooled connections idle)",
                state.connections.settings().database_name,
                status.idle_connections,
                status.max_size
            );
        }
    }

    Ok(())
}
