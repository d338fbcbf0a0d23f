//! Repair of `tags`/`agenda` values stored as one JSON-encoded string instead
//! of a real list, e.g. `["[\"rust\",\"wasm\"]"]`.

use std::sync::Arc;

use serde::Serialize;

use crate::modules::events::domain::entities::Event;
use crate::modules::events::domain::repositories::EventRepository;
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_info, log_warn};

const SCAN_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRepair {
    /// Already a proper list
    Unchanged,
    Repaired(Vec<String>),
    /// Looked encoded but did not decode to a usable list
    Unparseable(String),
}

/// Decode a list that holds exactly one string starting with `[`.
pub fn repair_list_field(values: &[String]) -> ListRepair {
    let encoded = match values {
        [single] if single.trim_start().starts_with('[') => single,
        _ => return ListRepair::Unchanged,
    };

    match serde_json::from_str::<Vec<String>>(encoded) {
        Ok(decoded) if decoded.is_empty() => {
            ListRepair::Unparseable("decoded list is empty".to_string())
        }
        Ok(decoded) if decoded.iter().any(|item| item.trim().is_empty()) => {
            ListRepair::Unparseable("decoded list has empty items".to_string())
        }
        Ok(decoded) => ListRepair::Repaired(decoded),
        Err(e) => ListRepair::Unparseable(e.to_string()),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RepairReport {
    pub scanned: usize,
    pub repaired: usize,
    pub failed: usize,
}

/// Walks every stored event and rewrites mis-encoded list fields.
pub struct EventListRepair {
    event_repo: Arc<dyn EventRepository>,
}

impl EventListRepair {
    pub fn new(event_repo: Arc<dyn EventRepository>) -> Self {
        Self { event_repo }
    }

    pub async fn run(&self) -> AppResult<RepairReport> {
        let timer = TimedOperation::new("event_list_repair");
        let mut report = RepairReport::default();
        let mut page = 1;

        loop {
            let params = PaginationParams::new(page, SCAN_PAGE_SIZE);
            let batch = self.event_repo.list(&params).await?;

            for event in batch.items {
                report.scanned += 1;
                match self.repair_event(event).await {
                    Outcome::Repaired => report.repaired += 1,
                    Outcome::Untouched => {}
                    Outcome::Failed => report.failed += 1,
                }
            }

            if page >= batch.total_pages {
                break;
            }
            page += 1;
        }

        log_info!(
            "List repair complete: {} scanned, {} repaired, {} failed",
            report.scanned,
            report.repaired,
            report.failed
        );
        timer.finish();
        Ok(report)
    }

    // Failures are logged here and only counted by the caller
    async fn repair_event(&self, mut event: Event) -> Outcome {
        let mut changed = false;
        let mut failed = false;

        for (field, values) in [("tags", &mut event.tags), ("agenda", &mut event.agenda)] {
            match repair_list_field(values) {
                ListRepair::Unchanged => {}
                ListRepair::Repaired(decoded) => {
                    *values = decoded;
                    changed = true;
                }
                ListRepair::Unparseable(reason) => {
                    log_warn!("Failed to parse {} for event {}: {}", field, event.id, reason);
                    failed = true;
                }
            }
        }

        if changed {
            if let Err(e) = self.event_repo.update(&event).await {
                LogContext::error_with_context(&e, &format!("Failed to repair event {}", event.id));
                return Outcome::Failed;
            }
            log_info!("Repaired list fields of event '{}'", event.title);
        }

        match (failed, changed) {
            (true, _) => Outcome::Failed,
            (false, true) => Outcome::Repaired,
            (false, false) => Outcome::Untouched,
        }
    }
}

enum Outcome {
    Untouched,
    Repaired,
    Failed,
}
