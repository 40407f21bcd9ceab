use crate::db::listings::{get_history_envelopes, get_listing};
use crate::db::Database;
use crate::domain::events::ingest_history;
use crate::domain::listing::ListingDetail;
use crate::domain::subject::SubjectKind;
use crate::errors::ServerError;
use crate::source::HistorySource;

/// Reads listings from a local SQLite snapshot (see `import_snapshot`).
pub struct SqliteSource {
    db: Database,
}

impl SqliteSource {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl HistorySource for SqliteSource {
    fn listing(
        &self,
        subject: SubjectKind,
        shop_id: &str,
        shops_subject_id: &str,
    ) -> Result<ListingDetail, ServerError> {
        let summary =
            get_listing(&self.db, subject, shop_id, shops_subject_id)?.ok_or(ServerError::NotFound)?;

        let raw = get_history_envelopes(&self.db, subject, shop_id, shops_subject_id)?;

        Ok(ListingDetail {
            summary,
            history: Some(ingest_history(raw)),
        })
    }
}
