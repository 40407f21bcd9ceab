use crate::domain::listing::ListingDetail;
use crate::domain::price_chart::ChartRange;
use crate::domain::subject::SubjectKind;
use crate::domain::timeline::HistoryFilter;
use crate::i18n::format::format_price;
use crate::i18n::Translator;
use crate::templates::components::status_badge;
use crate::templates::desktop_layout;
use crate::templates::pages::history::history_card;
use crate::templates::pages::price_chart::price_chart_card;
use chrono::{DateTime, Utc};
use maud::{html, Markup};

/// Per-request view state of the listing page.
#[derive(Debug, Clone, Copy)]
pub struct ListingView {
    pub subject: SubjectKind,
    pub filter: HistoryFilter,
    pub range: ChartRange,
    pub now: DateTime<Utc>,
}

pub fn listing_page(detail: &ListingDetail, view: &ListingView, t: &Translator) -> Markup {
    let summary = &detail.summary;
    let path = view
        .subject
        .listing_path(&summary.shop_id, &summary.shops_subject_id);
    let history = detail.history.as_deref();

    desktop_layout(
        &summary.title,
        t,
        html! {
            main class="container listing-page" {
                section class="card listing-summary" {
                    h1 { (summary.title) }
                    dl {
                        dt { (t.t("listing.shop", &[])) }
                        dd class="listing-shop" { (summary.shop_name) }
                        dt { (t.t("listing.price", &[])) }
                        dd class="listing-price" {
                            @match &summary.price {
                                Some(price) => (format_price(price, t.locale())),
                                None => (t.t("listing.noPrice", &[])),
                            }
                        }
                        dt { (t.t("listing.state", &[])) }
                        dd { (status_badge(summary.state, t)) }
                    }
                    @if let Some(url) = &summary.url {
                        a class="btn btn-outline" href=(url.as_str()) target="_blank" rel="noopener noreferrer" {
                            (t.t("listing.viewAtShop", &[]))
                        }
                    }
                }

                div class="listing-grid" {
                    (price_chart_card(&path, history, view.range, view.now, t))
                    (history_card(view.subject, &path, history, view.filter, t))
                }
            }
        },
    )
}
