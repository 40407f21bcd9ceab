use crate::db::connection::Database;
use crate::domain::listing::ListingSummary;
use crate::domain::price::{Currency, Price};
use crate::domain::state::ProductState;
use crate::domain::subject::SubjectKind;
use crate::errors::ServerError;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::{json, Value};

/// One stored event, payload kept exactly as received.
#[derive(Debug, Clone)]
pub struct StoredEvent {
    pub event_id: String,
    pub event_type: String,
    pub payload: Value,
    pub timestamp: DateTime<Utc>,
}

pub fn upsert_listing(
    conn: &Connection,
    subject: SubjectKind,
    listing: &ListingSummary,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        INSERT INTO listings (
            subject, shop_id, shops_subject_id, subject_id,
            shop_name, title, price_amount, price_currency, state, url
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
        ON CONFLICT(subject, shop_id, shops_subject_id) DO UPDATE SET
            subject_id = excluded.subject_id,
            shop_name = excluded.shop_name,
            title = excluded.title,
            price_amount = excluded.price_amount,
            price_currency = excluded.price_currency,
            state = excluded.state,
            url = excluded.url
        "#,
        params![
            subject.route_segment(),
            listing.shop_id,
            listing.shops_subject_id,
            listing.subject_id,
            listing.shop_name,
            listing.title,
            listing.price.map(|p| p.amount),
            listing.price.map(|p| p.currency.code()),
            listing.state.as_str(),
            listing.url.as_ref().map(|u| u.to_string()),
        ],
    )
    .map_err(|e| ServerError::DbError(format!("upsert listing failed: {e}")))?;

    Ok(())
}

/// Events are keyed by id; re-importing the same event is a no-op.
pub fn insert_event(
    conn: &Connection,
    subject: SubjectKind,
    listing: &ListingSummary,
    event: &StoredEvent,
) -> Result<(), ServerError> {
    let payload = serde_json::to_string(&event.payload)
        .map_err(|e| ServerError::DbError(format!("encode payload failed: {e}")))?;

    conn.execute(
        r#"
        INSERT OR IGNORE INTO listing_events (
            event_id, subject, shop_id, shops_subject_id, subject_id,
            event_type, payload, timestamp
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
        params![
            event.event_id,
            subject.route_segment(),
            listing.shop_id,
            listing.shops_subject_id,
            listing.subject_id,
            event.event_type,
            payload,
            event.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert event failed: {e}")))?;

    Ok(())
}

pub fn get_listing(
    db: &Database,
    subject: SubjectKind,
    shop_id: &str,
    shops_subject_id: &str,
) -> Result<Option<ListingSummary>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            r#"
            SELECT subject_id, shop_name, title, price_amount, price_currency, state, url
            FROM listings
            WHERE subject = ?1 AND shop_id = ?2 AND shops_subject_id = ?3
            "#,
            params![subject.route_segment(), shop_id, shops_subject_id],
            |row| {
                let amount: Option<i64> = row.get(3)?;
                let currency: Option<String> = row.get(4)?;
                let state: Option<String> = row.get(5)?;
                let url: Option<String> = row.get(6)?;

                Ok(ListingSummary {
                    subject_id: row.get(0)?,
                    shop_id: shop_id.to_string(),
                    shops_subject_id: shops_subject_id.to_string(),
                    shop_name: row.get(1)?,
                    title: row.get(2)?,
                    price: amount.map(|a| Price::new(a, Currency::parse(currency.as_deref()))),
                    state: ProductState::parse(state.as_deref()),
                    url: url.as_deref().and_then(|u| url::Url::parse(u).ok()),
                })
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select listing failed: {e}")))
    })
}

/// History rows as upstream-shaped JSON envelopes, oldest first, so they go
/// through the same ingestion as the API history.
pub fn get_history_envelopes(
    db: &Database,
    subject: SubjectKind,
    shop_id: &str,
    shops_subject_id: &str,
) -> Result<Vec<Value>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                SELECT event_id, event_type, subject_id, payload, timestamp
                FROM listing_events
                WHERE subject = ?1 AND shop_id = ?2 AND shops_subject_id = ?3
                ORDER BY timestamp ASC, rowid ASC
                "#,
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map(params![subject.route_segment(), shop_id, shops_subject_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            let (event_id, event_type, subject_id, payload, timestamp) =
                r.map_err(|e| ServerError::DbError(e.to_string()))?;

            // A payload that is not valid JSON is kept as a string; the
            // classifier treats it as an unknown shape.
            let payload = serde_json::from_str::<Value>(&payload).unwrap_or(Value::String(payload));

            out.push(json!({
                "eventId": event_id,
                "eventType": event_type,
                "productId": subject_id,
                "shopId": shop_id,
                "shopsProductId": shops_subject_id,
                "payload": payload,
                "timestamp": timestamp,
            }));
        }
        Ok(out)
    })
}
