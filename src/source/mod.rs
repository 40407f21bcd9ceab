//! Where listing details and their event history come from.

mod api;
mod snapshot;
mod sqlite;

pub use api::ApiSource;
pub use snapshot::{import_snapshot, ImportStats};
pub use sqlite::SqliteSource;

use crate::domain::events::ProductEvent;
use crate::domain::listing::ListingDetail;
use crate::domain::subject::SubjectKind;
use crate::errors::ServerError;

pub trait HistorySource: Send + Sync {
    /// A listing and its history. `ServerError::NotFound` when the listing
    /// does not exist; an unavailable history is `history: None`, not an error.
    fn listing(
        &self,
        subject: SubjectKind,
        shop_id: &str,
        shops_subject_id: &str,
    ) -> Result<ListingDetail, ServerError>;

    /// Just the history, for the fragment routes that re-render the history
    /// card or the price chart. Defaults to loading the whole listing.
    fn history(
        &self,
        subject: SubjectKind,
        shop_id: &str,
        shops_subject_id: &str,
    ) -> Result<Option<Vec<ProductEvent>>, ServerError> {
        self.listing(subject, shop_id, shops_subject_id)
            .map(|detail| detail.history)
    }
}
