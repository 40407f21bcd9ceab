use crate::domain::events::{ingest_history, ProductEvent};
use crate::domain::listing::{ListingDetail, ListingEnvelope, ListingSummary};
use crate::domain::subject::SubjectKind;
use crate::errors::ServerError;
use crate::source::HistorySource;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("storefront-history/", env!("CARGO_PKG_VERSION"));

/// Reads listings from the storefront's listing API.
pub struct ApiSource {
    client: Client,
    base: Url,
}

impl ApiSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ServerError> {
        let base = Url::parse(base_url)
            .map_err(|e| ServerError::Config(format!("invalid API base url '{base_url}': {e}")))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ServerError::Upstream(e.to_string()))?;

        Ok(Self { client, base })
    }

    /// `{base}/api/v1/shops/{shop}/{products|items}/{id}[/history]`
    pub fn listing_url(
        &self,
        subject: SubjectKind,
        shop_id: &str,
        shops_subject_id: &str,
        history: bool,
    ) -> Result<Url, ServerError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ServerError::Config("API base url cannot be a base".to_string()))?;
            segments
                .pop_if_empty()
                .extend(["api", "v1", "shops", shop_id, subject.api_segment(), shops_subject_id]);
            if history {
                segments.push("history");
            }
        }
        Ok(url)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ServerError> {
        debug!(%url, "GET upstream");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| ServerError::Upstream(format!("request to {url} failed: {e}")))?;

        check_status(resp.status(), &url)?;
        resp.json::<T>()
            .map_err(|e| ServerError::Upstream(format!("decoding {url} failed: {e}")))
    }

    fn fetch_history(
        &self,
        subject: SubjectKind,
        shop_id: &str,
        shops_subject_id: &str,
    ) -> Result<Vec<ProductEvent>, ServerError> {
        let url = self.listing_url(subject, shop_id, shops_subject_id, true)?;
        let raw: Vec<Value> = self.get_json(url)?;
        Ok(ingest_history(raw))
    }
}

/// Upstream 404 is the listing not existing; any other non-success status
/// is an upstream failure.
fn check_status(status: StatusCode, url: &Url) -> Result<(), ServerError> {
    match status {
        StatusCode::NOT_FOUND => Err(ServerError::NotFound),
        status if !status.is_success() => {
            Err(ServerError::Upstream(format!("{url} answered {status}")))
        }
        _ => Ok(()),
    }
}

impl HistorySource for ApiSource {
    fn listing(
        &self,
        subject: SubjectKind,
        shop_id: &str,
        shops_subject_id: &str,
    ) -> Result<ListingDetail, ServerError> {
        let url = self.listing_url(subject, shop_id, shops_subject_id, false)?;
        let envelope: ListingEnvelope = self.get_json(url)?;

        let history = match self.fetch_history(subject, shop_id, shops_subject_id) {
            Ok(events) => Some(events),
            Err(e) => {
                warn!(shop_id, shops_subject_id, error = %e, "history unavailable");
                None
            }
        };

        Ok(ListingDetail {
            summary: ListingSummary::from(envelope.item),
            history,
        })
    }

    /// Only the history endpoint is asked. A missing listing is still
    /// `NotFound`; other failures degrade to `None`.
    fn history(
        &self,
        subject: SubjectKind,
        shop_id: &str,
        shops_subject_id: &str,
    ) -> Result<Option<Vec<ProductEvent>>, ServerError> {
        match self.fetch_history(subject, shop_id, shops_subject_id) {
            Ok(events) => Ok(Some(events)),
            Err(ServerError::NotFound) => Err(ServerError::NotFound),
            Err(e) => {
                warn!(shop_id, shops_subject_id, error = %e, "history unavailable");
                Ok(None)
            }
        }
    }
}
