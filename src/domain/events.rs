// src/domain/events.rs
//
// Listing events arrive from the upstream feed with an untagged payload. The
// payload shape is classified exactly once here, at ingestion, and carried as
// `EventPayload` from then on.

use crate::domain::price::Price;
use crate::domain::state::ProductState;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

/// Upstream tag for a price change where the price went down.
pub const PRICE_DROPPED: &str = "PRICE_DROPPED";

/// The five payload shapes an event can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    Created {
        state: ProductState,
        price: Option<Price>,
    },
    StateChanged {
        old_state: ProductState,
        new_state: ProductState,
    },
    PriceChanged {
        old_price: Price,
        new_price: Price,
    },
    PriceDiscovered {
        new_price: Price,
    },
    PriceRemoved {
        old_price: Price,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Created,
    StateChanged,
    PriceChanged,
    PriceDiscovered,
    PriceRemoved,
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::Created { .. } => EventKind::Created,
            EventPayload::StateChanged { .. } => EventKind::StateChanged,
            EventPayload::PriceChanged { .. } => EventKind::PriceChanged,
            EventPayload::PriceDiscovered { .. } => EventKind::PriceDiscovered,
            EventPayload::PriceRemoved { .. } => EventKind::PriceRemoved,
        }
    }

    /// Payload used when the shape matches none of the known variants.
    pub fn unknown() -> Self {
        EventPayload::Created {
            state: ProductState::Unknown,
            price: None,
        }
    }
}

impl EventKind {
    pub fn is_price(&self) -> bool {
        matches!(
            self,
            EventKind::PriceChanged | EventKind::PriceDiscovered | EventKind::PriceRemoved
        )
    }
}

/// Direction of a price event, as shown on the price badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceEventKind {
    Discovered,
    Dropped,
    Increased,
    Removed,
}

impl PriceEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceEventKind::Discovered => "PRICE_DISCOVERED",
            PriceEventKind::Dropped => "PRICE_DROPPED",
            PriceEventKind::Increased => "PRICE_INCREASED",
            PriceEventKind::Removed => "PRICE_REMOVED",
        }
    }
}

fn object(payload: &Value) -> Option<&Map<String, Value>> {
    payload.as_object()
}

fn has(payload: &Value, key: &str) -> bool {
    object(payload).is_some_and(|m| m.contains_key(key))
}

/// `state` present, with neither `oldState` nor `newState`.
pub fn is_created_payload(payload: &Value) -> bool {
    has(payload, "state") && !has(payload, "oldState") && !has(payload, "newState")
}

/// Both `oldState` and `newState` present.
pub fn is_state_changed_payload(payload: &Value) -> bool {
    has(payload, "oldState") && has(payload, "newState")
}

/// Both `oldPrice` and `newPrice` present.
pub fn is_price_changed_payload(payload: &Value) -> bool {
    has(payload, "oldPrice") && has(payload, "newPrice")
}

/// `newPrice` present without `oldPrice`.
pub fn is_price_discovered_payload(payload: &Value) -> bool {
    has(payload, "newPrice") && !has(payload, "oldPrice")
}

/// `oldPrice` present without `newPrice`.
pub fn is_price_removed_payload(payload: &Value) -> bool {
    has(payload, "oldPrice") && !has(payload, "newPrice")
}

/// Classifies a raw payload. Total: shapes that match nothing become
/// `EventPayload::unknown()`. Checked in order Created, StateChanged,
/// PriceChanged, PriceDiscovered, PriceRemoved.
pub fn classify(payload: &Value) -> EventPayload {
    try_classify(payload).unwrap_or_else(EventPayload::unknown)
}

/// True when the payload matches one of the five shapes.
pub fn is_known_shape(payload: &Value) -> bool {
    is_created_payload(payload)
        || is_state_changed_payload(payload)
        || is_price_changed_payload(payload)
        || is_price_discovered_payload(payload)
        || is_price_removed_payload(payload)
}

fn try_classify(payload: &Value) -> Option<EventPayload> {
    let field = |key: &str| payload.get(key);
    let price = |key: &str| Price::from_value(field(key).unwrap_or(&Value::Null));

    if is_created_payload(payload) {
        return Some(EventPayload::Created {
            state: ProductState::from_value(field("state")),
            price: Price::from_optional(field("price")),
        });
    }

    if is_state_changed_payload(payload) {
        return Some(EventPayload::StateChanged {
            old_state: ProductState::from_value(field("oldState")),
            new_state: ProductState::from_value(field("newState")),
        });
    }

    if is_price_changed_payload(payload) {
        return Some(EventPayload::PriceChanged {
            old_price: price("oldPrice"),
            new_price: price("newPrice"),
        });
    }

    if is_price_discovered_payload(payload) {
        return Some(EventPayload::PriceDiscovered {
            new_price: price("newPrice"),
        });
    }

    if is_price_removed_payload(payload) {
        return Some(EventPayload::PriceRemoved {
            old_price: price("oldPrice"),
        });
    }

    None
}

/// Event envelope as served by the listing API. Accepts both the current
/// "product" field names and the older "item" ones.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub event_id: String,
    pub event_type: String,
    #[serde(alias = "productId", alias = "itemId")]
    pub subject_id: String,
    pub shop_id: String,
    #[serde(alias = "shopsProductId", alias = "shopsItemId")]
    pub shops_subject_id: String,
    #[serde(default)]
    pub payload: Value,
    pub timestamp: DateTime<Utc>,
}

/// One classified fact about a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEvent {
    pub event_id: String,
    pub event_type: String,
    pub subject_id: String,
    pub shop_id: String,
    pub shops_subject_id: String,
    pub timestamp: DateTime<Utc>,
    pub payload: EventPayload,
    /// False when the payload matched no known shape and `payload` is the
    /// fallback. Such events are kept but never displayed.
    pub recognized: bool,
}

impl ProductEvent {
    pub fn from_raw(raw: RawEvent) -> Self {
        let recognized = is_known_shape(&raw.payload);
        if !recognized {
            warn!(
                event_id = %raw.event_id,
                event_type = %raw.event_type,
                "unrecognised event payload shape, hiding it from the timeline"
            );
        }
        let payload = classify(&raw.payload);

        Self {
            event_id: raw.event_id,
            event_type: raw.event_type,
            subject_id: raw.subject_id,
            shop_id: raw.shop_id,
            shops_subject_id: raw.shops_subject_id,
            timestamp: raw.timestamp,
            payload,
            recognized,
        }
    }

    pub fn is_price_dropped(&self) -> bool {
        self.event_type == PRICE_DROPPED
    }

    /// Badge kind for price events; `None` for state events.
    pub fn price_event_kind(&self) -> Option<PriceEventKind> {
        match self.payload {
            EventPayload::PriceDiscovered { .. } => Some(PriceEventKind::Discovered),
            EventPayload::PriceRemoved { .. } => Some(PriceEventKind::Removed),
            EventPayload::PriceChanged { .. } if self.is_price_dropped() => {
                Some(PriceEventKind::Dropped)
            }
            EventPayload::PriceChanged { .. } => Some(PriceEventKind::Increased),
            _ => None,
        }
    }
}

/// Decodes a history array element by element. Elements whose envelope
/// cannot be read are skipped; order is preserved.
pub fn ingest_history(raw: Vec<Value>) -> Vec<ProductEvent> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<RawEvent>(value) {
            Ok(event) => Some(ProductEvent::from_raw(event)),
            Err(e) => {
                warn!(index, error = %e, "skipping undecodable history event");
                None
            }
        })
        .collect()
}
