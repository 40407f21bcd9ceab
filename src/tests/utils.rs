use crate::app::App;
use crate::db::{init_db, Database};
use crate::domain::events::{ingest_history, ProductEvent};
use crate::domain::listing::{ListingDetail, ListingSummary};
use crate::domain::state::ProductState;
use crate::domain::subject::SubjectKind;
use crate::errors::ServerError;
use crate::i18n::Locale;
use crate::router::handle;
use crate::source::{import_snapshot, HistorySource, SqliteSource};
use astra::Body;
use serde_json::{json, Value};
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns a fresh test database using the production schema
pub fn make_db(prefix: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{prefix}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

pub fn event(id: &str, event_type: &str, payload: Value, timestamp: &str) -> Value {
    json!({
        "eventId": id,
        "eventType": event_type,
        "productId": "p-1",
        "shopId": "shop-1",
        "shopsProductId": "sp-1",
        "payload": payload,
        "timestamp": timestamp,
    })
}

/// One listing with a created event, a price drop, a sale and an event of
/// unknown shape.
pub fn snapshot() -> Value {
    json!([
        {
            "item": {
                "productId": "p-1",
                "shopId": "shop-1",
                "shopsProductId": "sp-1",
                "shopName": "Kunsthandel Meier",
                "title": { "text": "Biedermeier Kommode", "language": "de" },
                "price": { "amount": 8999, "currency": "EUR" },
                "state": "SOLD",
                "url": "https://example.com/kommode",
            },
            "history": [
                event("e1", "PRODUCT_CREATED",
                    json!({ "state": "AVAILABLE", "price": { "amount": 9999, "currency": "EUR" } }),
                    "2024-01-01T10:00:00Z"),
                event("e2", "PRICE_DROPPED",
                    json!({
                        "oldPrice": { "amount": 9999, "currency": "EUR" },
                        "newPrice": { "amount": 8999, "currency": "EUR" },
                    }),
                    "2024-02-01T10:00:00Z"),
                event("e3", "STATE_CHANGED",
                    json!({ "oldState": "AVAILABLE", "newState": "SOLD" }),
                    "2024-03-01T10:00:00Z"),
                event("e4", "PRICE_DROPPED", json!({ "foo": 1 }), "2024-04-01T10:00:00Z"),
                { "eventId": "broken" },
            ],
        },
        {
            "item": {
                "productId": "p-2",
                "shopId": "shop-1",
                "shopsProductId": "sp-2",
                "shopName": "Kunsthandel Meier",
                "title": { "text": "Standuhr" },
                "state": "LISTED",
            },
            "history": [],
        },
    ])
}

/// App backed by a SQLite snapshot holding `snapshot()`.
pub fn seeded_app(prefix: &str) -> App {
    let db = make_db(prefix);
    let raw = serde_json::to_vec(&snapshot()).unwrap();
    import_snapshot(&db, SubjectKind::Product, raw.as_slice()).expect("import failed");
    App::new(Box::new(SqliteSource::new(db)), Locale::De)
}

/// Source whose history endpoint is down.
pub struct HistoryDownSource;

impl HistorySource for HistoryDownSource {
    fn listing(
        &self,
        _subject: SubjectKind,
        shop_id: &str,
        shops_subject_id: &str,
    ) -> Result<ListingDetail, ServerError> {
        Ok(ListingDetail {
            summary: ListingSummary {
                subject_id: "x".to_string(),
                shop_id: shop_id.to_string(),
                shops_subject_id: shops_subject_id.to_string(),
                shop_name: format!("Antik Schulz ({shop_id})"),
                title: format!("Zinnteller {shops_subject_id}"),
                price: None,
                state: ProductState::Available,
                url: None,
            },
            history: None,
        })
    }
}

/// Source whose listing API is down.
pub struct UpstreamDownSource;

impl HistorySource for UpstreamDownSource {
    fn listing(
        &self,
        _subject: SubjectKind,
        _shop_id: &str,
        _shops_subject_id: &str,
    ) -> Result<ListingDetail, ServerError> {
        Err(ServerError::Upstream("connection refused".to_string()))
    }
}

/// Source whose listing endpoint is down while its history still answers.
pub struct ListingDownSource;

impl HistorySource for ListingDownSource {
    fn listing(
        &self,
        _subject: SubjectKind,
        _shop_id: &str,
        _shops_subject_id: &str,
    ) -> Result<ListingDetail, ServerError> {
        Err(ServerError::Upstream("listing endpoint timed out".to_string()))
    }

    fn history(
        &self,
        _subject: SubjectKind,
        _shop_id: &str,
        _shops_subject_id: &str,
    ) -> Result<Option<Vec<ProductEvent>>, ServerError> {
        Ok(Some(ingest_history(vec![
            event("d1", "PRICE_DISCOVERED",
                json!({ "newPrice": { "amount": 4500, "currency": "EUR" } }),
                "2024-05-01T08:00:00Z"),
            event("s1", "STATE_CHANGED",
                json!({ "oldState": "AVAILABLE", "newState": "RESERVED" }),
                "2024-05-02T08:00:00Z"),
        ])))
    }
}

pub struct TestResponse {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

/// Runs a GET through the router, turning errors into responses the way
/// the server loop does.
pub fn get(app: &App, uri: &str) -> TestResponse {
    get_with_headers(app, uri, &[])
}

pub fn get_with_headers(app: &App, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
    let mut builder = http::Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let req = builder.body(Body::empty()).unwrap();

    let resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => crate::responses::error_to_response(err),
    };

    let status = resp.status().as_u16();
    let location = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();

    TestResponse {
        status,
        location,
        body,
    }
}
