use crate::domain::events::PriceEventKind;
use crate::domain::state::ProductState;
use crate::i18n::Translator;
use maud::{html, Markup};

fn state_style(state: ProductState) -> (&'static str, &'static str) {
    match state {
        ProductState::Listed => ("tag", "bg-sky-600 text-white"),
        ProductState::Available => ("package", "bg-green-700 text-white"),
        ProductState::Reserved => ("clock", "bg-yellow-500 text-white"),
        ProductState::Sold => ("shopping-cart", "bg-amber-600 text-white"),
        ProductState::Removed => ("x-circle", "bg-red-700 text-white"),
        ProductState::Unknown => ("help-circle", "bg-gray-400 text-white"),
    }
}

fn price_style(kind: PriceEventKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        PriceEventKind::Discovered => ("priceBadge.discovered", "tag", "bg-blue-700 text-white"),
        PriceEventKind::Dropped => ("priceBadge.dropped", "trending-down", "bg-green-700 text-white"),
        PriceEventKind::Increased => ("priceBadge.increased", "trending-up", "bg-red-700 text-white"),
        PriceEventKind::Removed => ("priceBadge.removed", "x-circle", "bg-gray-700 text-white"),
    }
}

pub fn status_badge(state: ProductState, t: &Translator) -> Markup {
    let (icon, colors) = state_style(state);

    html! {
        span class={ "badge status-badge py-1 gap-1 " (colors) } data-state=(state.as_str()) {
            i class={ "icon icon-" (icon) } aria-hidden="true" {}
            (t.t(state.i18n_key(), &[]))
        }
    }
}

pub fn price_badge(kind: PriceEventKind, t: &Translator) -> Markup {
    let (key, icon, colors) = price_style(kind);

    html! {
        span class={ "badge price-badge py-1 gap-1 " (colors) } data-event-type=(kind.as_str()) {
            i class={ "icon icon-" (icon) } aria-hidden="true" {}
            (t.t(key, &[]))
        }
    }
}
