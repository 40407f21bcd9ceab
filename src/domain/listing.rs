// src/domain/listing.rs

use crate::domain::events::ProductEvent;
use crate::domain::price::{Price, PriceData};
use crate::domain::state::ProductState;
use serde::Deserialize;

/// Listing header shown above the history.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSummary {
    pub subject_id: String,
    pub shop_id: String,
    pub shops_subject_id: String,
    pub shop_name: String,
    pub title: String,
    pub price: Option<Price>,
    pub state: ProductState,
    pub url: Option<url::Url>,
}

/// Everything the listing page needs. `history` is `None` while the history
/// is unavailable, and chronological (oldest first) otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDetail {
    pub summary: ListingSummary,
    pub history: Option<Vec<ProductEvent>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedText {
    pub text: String,
}

/// Listing body as served by the listing API under `item`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingData {
    #[serde(alias = "productId", alias = "itemId")]
    pub subject_id: String,
    pub shop_id: String,
    #[serde(alias = "shopsProductId", alias = "shopsItemId")]
    pub shops_subject_id: String,
    pub shop_name: String,
    pub title: LocalizedText,
    pub price: Option<PriceData>,
    pub state: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingEnvelope {
    pub item: ListingData,
}

impl From<ListingData> for ListingSummary {
    fn from(data: ListingData) -> Self {
        Self {
            subject_id: data.subject_id,
            shop_id: data.shop_id,
            shops_subject_id: data.shops_subject_id,
            shop_name: data.shop_name,
            title: data.title.text,
            price: data.price.map(Price::from),
            state: ProductState::parse(data.state.as_deref()),
            url: data.url.as_deref().and_then(|u| url::Url::parse(u).ok()),
        }
    }
}
