use crate::app::App;
use crate::domain::price_chart::ChartRange;
use crate::domain::subject::SubjectKind;
use crate::domain::timeline::HistoryFilter;
use crate::errors::ServerError;
use crate::i18n::{Locale, Translator};
use crate::responses::{html_response, redirect_response, text_response, ResultResp};
use crate::templates::pages::{self, ListingView};
use astra::Request;
use chrono::Utc;
use std::collections::HashMap;
use tracing::debug;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = parse_query(&req);

    let accept_language = req
        .headers()
        .get("accept-language")
        .and_then(|v| v.to_str().ok());
    let locale = Locale::negotiate(
        query.get("lng").map(String::as_str),
        accept_language,
        app.default_locale,
    );
    let t = Translator::new(locale);

    let segments: Vec<&str> = path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();

    match (method, segments.as_slice()) {
        ("GET", []) => html_response(pages::home_page(&t)),
        ("GET", ["health"]) => text_response("ok"),
        ("GET", ["lookup"]) => lookup(&query, locale),
        ("GET", [subject, shop_id, shops_id, rest @ ..]) => {
            let subject = SubjectKind::from_route_segment(subject).ok_or(ServerError::NotFound)?;
            let shop_id = decode_segment(shop_id)?;
            let shops_id = decode_segment(shops_id)?;

            match rest {
                [] => listing(app, subject, &shop_id, &shops_id, &query, &t),
                ["history"] => history_fragment(app, subject, &shop_id, &shops_id, &query, &t),
                ["price-chart"] => price_chart_fragment(app, subject, &shop_id, &shops_id, &query, &t),
                _ => Err(ServerError::NotFound),
            }
        }
        _ => Err(ServerError::NotFound),
    }
}

fn listing(
    app: &App,
    subject: SubjectKind,
    shop_id: &str,
    shops_id: &str,
    query: &HashMap<String, String>,
    t: &Translator,
) -> ResultResp {
    let detail = app.source.listing(subject, shop_id, shops_id)?;
    debug!(
        shop_id,
        shops_id,
        events = ?detail.history.as_ref().map(Vec::len),
        "rendering listing"
    );

    let view = ListingView {
        subject,
        filter: HistoryFilter::parse(query.get("filter").map(String::as_str)),
        range: ChartRange::parse(query.get("range").map(String::as_str)),
        now: Utc::now(),
    };
    html_response(pages::listing_page(&detail, &view, t))
}

/// Filter switches re-render only the card, so only the history is fetched.
fn history_fragment(
    app: &App,
    subject: SubjectKind,
    shop_id: &str,
    shops_id: &str,
    query: &HashMap<String, String>,
    t: &Translator,
) -> ResultResp {
    let history = app.source.history(subject, shop_id, shops_id)?;
    let filter = HistoryFilter::parse(query.get("filter").map(String::as_str));

    html_response(pages::history_card(
        subject,
        &subject.listing_path(shop_id, shops_id),
        history.as_deref(),
        filter,
        t,
    ))
}

fn price_chart_fragment(
    app: &App,
    subject: SubjectKind,
    shop_id: &str,
    shops_id: &str,
    query: &HashMap<String, String>,
    t: &Translator,
) -> ResultResp {
    let history = app.source.history(subject, shop_id, shops_id)?;
    let range = ChartRange::parse(query.get("range").map(String::as_str));

    html_response(pages::price_chart_card(
        &subject.listing_path(shop_id, shops_id),
        history.as_deref(),
        range,
        Utc::now(),
        t,
    ))
}

/// Landing-page form target: redirects to the listing page.
fn lookup(query: &HashMap<String, String>, locale: Locale) -> ResultResp {
    let field = |name: &str| {
        query
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ServerError::BadRequest(format!("missing '{name}'")))
    };

    let shop_id = field("shopId")?;
    let shops_id = field("shopsProductId")?;
    let path = SubjectKind::Product.listing_path(shop_id, shops_id);

    redirect_response(&format!("{path}?lng={}", locale.tag()))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Path segments are encoded the way `SubjectKind::listing_path` writes them.
fn decode_segment(raw: &str) -> Result<String, ServerError> {
    if raw.contains(['&', '=']) {
        return Err(ServerError::NotFound);
    }

    url::form_urlencoded::parse(raw.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .ok_or(ServerError::NotFound)
}
