// Loads a JSON snapshot of listings into the local database:
//
// [ { "item": { ...listing... }, "history": [ { ...event... }, ... ] }, ... ]

use crate::db::listings::{insert_event, upsert_listing, StoredEvent};
use crate::db::Database;
use crate::domain::events::RawEvent;
use crate::domain::listing::{ListingData, ListingSummary};
use crate::domain::subject::SubjectKind;
use crate::errors::ServerError;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct SnapshotEntry {
    item: ListingData,
    #[serde(default)]
    history: Vec<Value>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    pub listings: usize,
    pub events: usize,
    pub skipped_events: usize,
}

pub fn import_snapshot<R: Read>(
    db: &Database,
    subject: SubjectKind,
    reader: R,
) -> Result<ImportStats, ServerError> {
    let entries: Vec<SnapshotEntry> = serde_json::from_reader(reader)
        .map_err(|e| ServerError::BadRequest(format!("snapshot is not valid JSON: {e}")))?;

    let mut stats = ImportStats::default();

    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        for entry in entries {
            let listing = ListingSummary::from(entry.item);
            upsert_listing(&tx, subject, &listing)?;
            stats.listings += 1;

            for value in entry.history {
                let raw = match serde_json::from_value::<RawEvent>(value) {
                    Ok(raw) => raw,
                    Err(e) => {
                        warn!(shop_id = %listing.shop_id, error = %e, "skipping undecodable snapshot event");
                        stats.skipped_events += 1;
                        continue;
                    }
                };

                let stored = StoredEvent {
                    event_id: raw.event_id,
                    event_type: raw.event_type,
                    payload: raw.payload,
                    timestamp: raw.timestamp,
                };
                insert_event(&tx, subject, &listing, &stored)?;
                stats.events += 1;
            }
        }

        tx.commit().map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })?;

    info!(
        listings = stats.listings,
        events = stats.events,
        skipped = stats.skipped_events,
        "snapshot imported"
    );
    Ok(stats)
}
