//! The listing history card: filter buttons plus a newest-first timeline.

use crate::domain::events::{EventPayload, PriceEventKind, ProductEvent};
use crate::domain::price::Price;
use crate::domain::state::ProductState;
use crate::domain::subject::SubjectKind;
use crate::domain::timeline::{derive_timeline, HistoryFilter, TimelineView};
use crate::i18n::format::{format_date, format_price, format_time};
use crate::i18n::Translator;
use crate::templates::components::timeline::{timeline, timeline_item};
use crate::templates::components::{price_badge, status_badge, toggle_button};
use maud::{html, Markup};

pub const HISTORY_CARD_ID: &str = "history-card";

/// Renders the card for `history` (chronological, oldest first) under
/// `filter`. `listing_path` is the page the card lives on.
pub fn history_card(
    subject: SubjectKind,
    listing_path: &str,
    history: Option<&[ProductEvent]>,
    filter: HistoryFilter,
    t: &Translator,
) -> Markup {
    let title = t.subject_t(subject, "history.title", &[]);

    let body = match derive_timeline(history, filter) {
        TimelineView::NoHistory => html! {
            p class="text-sm text-muted-foreground history-empty" {
                (t.subject_t(subject, "history.noData", &[]))
            }
        },
        TimelineView::NoMatches => html! {
            (filter_buttons(subject, listing_path, filter, t))
            p class="text-sm text-muted-foreground history-no-matches" {
                (t.subject_t(subject, "history.noEvents", &[]))
            }
        },
        TimelineView::Entries(events) => html! {
            (filter_buttons(subject, listing_path, filter, t))
            div class="history-scroll" {
                (timeline(events.into_iter().map(|e| history_entry(subject, e, t))))
            }
        },
    };

    html! {
        section class="card history-card" id=(HISTORY_CARD_ID) {
            h2 { (title) }
            (body)
        }
    }
}

fn filter_buttons(
    subject: SubjectKind,
    listing_path: &str,
    active: HistoryFilter,
    t: &Translator,
) -> Markup {
    let lng = t.locale().tag();

    html! {
        div class="flex gap-2 flex-wrap history-filters" role="group" {
            @for option in HistoryFilter::ALL {
                (toggle_button(
                    &t.subject_t(subject, option.label_key(), &[]),
                    &format!("{listing_path}?filter={}&lng={lng}", option.as_str()),
                    &format!("{listing_path}/history?filter={}&lng={lng}", option.as_str()),
                    &format!("#{HISTORY_CARD_ID}"),
                    option == active,
                ))
            }
        }
    }
}

fn history_entry(subject: SubjectKind, event: &ProductEvent, t: &Translator) -> Markup {
    let locale = t.locale();
    let price = |p: &Price| format_price(p, locale);
    let state = |s: ProductState| t.t(s.i18n_key(), &[]);
    let text = |key: &str, params: &[(&str, &str)]| t.subject_t(subject, key, params);

    let (title, description) = match &event.payload {
        EventPayload::Created { state: created, price: initial } => {
            let mut description = text("history.events.created", &[]);
            if let Some(p) = initial {
                description.push_str(" • ");
                description.push_str(&price(p));
            }
            description.push('.');
            (status_badge(*created, t), description)
        }
        EventPayload::StateChanged { old_state, new_state } => {
            let (old, new) = (state(*old_state), state(*new_state));
            (
                status_badge(*new_state, t),
                text(
                    "history.events.statusChanged",
                    &[("oldState", old.as_str()), ("newState", new.as_str())],
                ),
            )
        }
        EventPayload::PriceDiscovered { new_price } => {
            let new = price(new_price);
            (
                price_badge(PriceEventKind::Discovered, t),
                text("history.events.priceDiscovered", &[("price", new.as_str())]),
            )
        }
        EventPayload::PriceChanged { old_price, new_price } => {
            let kind = event.price_event_kind().unwrap_or(PriceEventKind::Increased);
            let verb_key = if kind == PriceEventKind::Dropped {
                "history.events.priceFallen"
            } else {
                "history.events.priceIncreased"
            };
            let (old, new, verb) = (price(old_price), price(new_price), text(verb_key, &[]));
            (
                price_badge(kind, t),
                text(
                    "history.events.priceChanged",
                    &[
                        ("oldPrice", old.as_str()),
                        ("newPrice", new.as_str()),
                        ("verb", verb.as_str()),
                    ],
                ),
            )
        }
        EventPayload::PriceRemoved { old_price } => {
            let old = price(old_price);
            (
                price_badge(PriceEventKind::Removed, t),
                text("history.events.priceRemoved", &[("price", old.as_str())]),
            )
        }
    };

    timeline_item(
        &event.event_id,
        &event.timestamp,
        &format_date(&event.timestamp, locale),
        &format_time(&event.timestamp, locale),
        title,
        &description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::{classify, is_known_shape};
    use crate::i18n::Locale;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};

    const PATH: &str = "/product/shop-1/shops-item-1";

    fn event(id: &str, event_type: &str, payload: Value, day: u32) -> ProductEvent {
        ProductEvent {
            event_id: id.to_string(),
            event_type: event_type.to_string(),
            subject_id: "item-1".to_string(),
            shop_id: "shop-1".to_string(),
            shops_subject_id: "shops-item-1".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, day, 10, 0, 0).unwrap(),
            payload: classify(&payload),
            recognized: is_known_shape(&payload),
        }
    }

    fn state_event() -> ProductEvent {
        event("1", "STATE_AVAILABLE", json!({ "oldState": "LISTED", "newState": "AVAILABLE" }), 15)
    }

    fn price_event(event_type: &str) -> ProductEvent {
        event(
            "2",
            event_type,
            json!({
                "oldPrice": { "amount": 8999, "currency": "EUR" },
                "newPrice": { "amount": 9999, "currency": "EUR" },
            }),
            16,
        )
    }

    fn created_event() -> ProductEvent {
        event(
            "3",
            "CREATED",
            json!({ "state": "AVAILABLE", "price": { "amount": 8999, "currency": "EUR" } }),
            14,
        )
    }

    fn render(history: Option<&[ProductEvent]>, filter: HistoryFilter, locale: Locale) -> String {
        history_card(SubjectKind::Product, PATH, history, filter, &Translator::new(locale)).into_string()
    }

    fn items(html: &str) -> usize {
        html.matches(r#"class="timeline-item""#).count()
    }

    fn filter_button_count(html: &str) -> usize {
        html.matches("aria-pressed=").count()
    }

    #[test]
    fn empty_history_renders_only_the_empty_state() {
        for history in [None, Some(&[][..])] {
            let html = render(history, HistoryFilter::All, Locale::De);
            assert!(html.contains("Historie"));
            assert!(html.contains("Keine Daten für diesen Artikel vorhanden."));
            assert_eq!(items(&html), 0);
            assert_eq!(filter_button_count(&html), 0);
        }
    }

    #[test]
    fn renders_all_filter_buttons() {
        let history = vec![state_event()];
        let html = render(Some(history.as_slice()), HistoryFilter::All, Locale::De);
        assert!(html.contains(">Alle<"));
        assert!(html.contains(">Preis<"));
        assert!(html.contains(">Verfügbarkeit<"));
        assert_eq!(filter_button_count(&html), 3);
        assert!(html.contains(r#"hx-get="/product/shop-1/shops-item-1/history?filter=price&amp;lng=de""#));
    }

    #[test]
    fn price_filter_without_matches_shows_controls_and_message() {
        let history = vec![state_event()];
        let html = render(Some(history.as_slice()), HistoryFilter::Price, Locale::De);
        assert!(html.contains("Keine Events für diesen Filter verfügbar."));
        assert_eq!(filter_button_count(&html), 3);
        assert_eq!(items(&html), 0);
    }

    #[test]
    fn renders_newest_first() {
        let history = vec![created_event(), state_event(), price_event("PRICE_INCREASED")];
        let html = render(Some(history.as_slice()), HistoryFilter::All, Locale::De);
        assert_eq!(items(&html), 3);

        let pos = |id: &str| html.find(&format!(r#"data-event-id="{id}""#)).unwrap();
        assert!(pos("2") < pos("1"));
        assert!(pos("1") < pos("3"));
    }

    #[test]
    fn created_event_text_and_price_suffix() {
        let history = vec![created_event()];
        let html = render(Some(history.as_slice()), HistoryFilter::All, Locale::De);
        assert!(html.contains("Im System erfasst • 89,99 €."));
        assert!(html.contains(r#"data-state="AVAILABLE""#));

        let state_only = render(Some(history.as_slice()), HistoryFilter::State, Locale::De);
        assert_eq!(items(&state_only), 0);
    }

    #[test]
    fn state_change_text() {
        let history = vec![state_event()];
        let html = render(Some(history.as_slice()), HistoryFilter::State, Locale::En);
        assert!(html.contains("Status changed from Listed to Available"));
        assert_eq!(items(&html), 1);
    }

    #[test]
    fn price_change_verb_follows_event_type() {
        let dropped = vec![price_event("PRICE_DROPPED")];
        let html = render(Some(dropped.as_slice()), HistoryFilter::Price, Locale::En);
        assert!(html.contains("Price fallen from €89.99 to €99.99"));
        assert!(html.contains(r#"data-event-type="PRICE_DROPPED""#));

        let increased = vec![price_event("PRICE_CHANGED")];
        let html = render(Some(increased.as_slice()), HistoryFilter::Price, Locale::En);
        assert!(html.contains("Price increased from €89.99 to €99.99"));
        assert!(html.contains(r#"data-event-type="PRICE_INCREASED""#));
    }

    #[test]
    fn discovered_and_removed_texts() {
        let history = vec![
            event("d", "PRICE_DISCOVERED", json!({ "newPrice": { "amount": 1000, "currency": "EUR" } }), 1),
            event("r", "PRICE_REMOVED", json!({ "oldPrice": { "amount": 1000, "currency": "EUR" } }), 2),
        ];
        let html = render(Some(history.as_slice()), HistoryFilter::Price, Locale::De);
        assert!(html.contains("Preis entdeckt: 10,00 €"));
        assert!(html.contains("Preis entfernt: 10,00 €"));
    }

    #[test]
    fn malformed_event_is_not_rendered() {
        let history = vec![
            state_event(),
            event("junk", "PRICE_DROPPED", json!({ "foo": 1 }), 20),
        ];
        let html = render(Some(history.as_slice()), HistoryFilter::All, Locale::En);
        assert_eq!(items(&html), 1);
        assert!(!html.contains(r#"data-event-id="junk""#));
        assert!(!html.contains("Recorded in the system"));

        let only_junk = vec![event("junk", "CREATED", json!({}), 20)];
        let html = render(Some(only_junk.as_slice()), HistoryFilter::All, Locale::En);
        assert_eq!(items(&html), 0);
        assert!(html.contains("No events available for this filter."));
    }

    #[test]
    fn item_subject_uses_item_texts() {
        let html = history_card(
            SubjectKind::Item,
            "/item/shop-1/x",
            None,
            HistoryFilter::All,
            &Translator::new(Locale::En),
        )
        .into_string();
        assert!(html.contains("No data available for this item."));
    }

    #[test]
    fn timestamps_are_split_into_date_and_time() {
        let history = vec![state_event()];
        let html = render(Some(history.as_slice()), HistoryFilter::All, Locale::De);
        assert!(html.contains("<span>15.01.2024</span>"));
        assert!(html.contains("10:00"));
    }
}
