use crate::domain::events::ProductEvent;
use crate::domain::price::Price;
use crate::domain::price_chart::{price_series, ChartRange, PricePoint};
use crate::i18n::format::{format_date, format_price};
use crate::i18n::Translator;
use crate::templates::components::toggle_button;
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub const PRICE_CHART_CARD_ID: &str = "price-chart-card";

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 200.0;
const PAD: f64 = 8.0;

pub fn price_chart_card(
    listing_path: &str,
    history: Option<&[ProductEvent]>,
    range: ChartRange,
    now: DateTime<Utc>,
    t: &Translator,
) -> Markup {
    let series = price_series(history.unwrap_or_default(), now);
    let visible = range.window(&series, now);
    let lng = t.locale().tag();

    html! {
        section class="card price-chart-card" id=(PRICE_CHART_CARD_ID) {
            h2 { (t.t("priceChart.title", &[])) }
            @if series.is_empty() {
                p class="text-sm text-muted-foreground" { (t.t("priceChart.noData", &[])) }
            } @else {
                div class="flex gap-2 flex-wrap chart-ranges" role="group" {
                    @for option in ChartRange::ALL {
                        (toggle_button(
                            &t.t(&format!("priceChart.timeRanges.{}", option.as_str()), &[]),
                            &format!("{listing_path}?range={}&lng={lng}", option.as_str()),
                            &format!("{listing_path}/price-chart?range={}&lng={lng}", option.as_str()),
                            &format!("#{PRICE_CHART_CARD_ID}"),
                            option == range,
                        ))
                    }
                }
                (chart_svg(&visible, t))
            }
        }
    }
}

fn chart_svg(points: &[PricePoint], t: &Translator) -> Markup {
    let locale = t.locale();
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return html! {};
    };

    let min = points.iter().map(|p| p.price.amount).min().unwrap_or(0);
    let max = points.iter().map(|p| p.price.amount).max().unwrap_or(0);
    let currency = last.price.currency;

    html! {
        figure class="price-chart" {
            svg xmlns="http://www.w3.org/2000/svg"
                viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
                preserveAspectRatio="none"
                role="img"
            {
                polyline fill="none" stroke="currentColor" stroke-width="2" points=(polyline_points(points)) {}
            }
            figcaption class="chart-axis text-xs text-muted-foreground" {
                span class="chart-min" { (format_price(&Price::new(min, currency), locale)) }
                " – "
                span class="chart-max" { (format_price(&Price::new(max, currency), locale)) }
                " · "
                span class="chart-span" {
                    (format_date(&first.at, locale)) " – " (format_date(&last.at, locale))
                }
            }
        }
    }
}

/// Step line (the price holds until the next change), scaled into the viewBox.
fn polyline_points(points: &[PricePoint]) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };

    let t0 = first.at.timestamp() as f64;
    let t_span = (last.at.timestamp() as f64 - t0).max(1.0);
    let min = points.iter().map(|p| p.price.amount).min().unwrap_or(0) as f64;
    let max = points.iter().map(|p| p.price.amount).max().unwrap_or(0) as f64;
    let y_span = (max - min).max(1.0);

    let x = |p: &PricePoint| PAD + (p.at.timestamp() as f64 - t0) / t_span * (WIDTH - 2.0 * PAD);
    let y = |p: &PricePoint| {
        if max == min {
            HEIGHT / 2.0
        } else {
            HEIGHT - PAD - (p.price.amount as f64 - min) / y_span * (HEIGHT - 2.0 * PAD)
        }
    };

    let mut coords: Vec<String> = Vec::with_capacity(points.len() * 2);
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            // hold the previous price until this point's time
            coords.push(format!("{:.1},{:.1}", x(point), y(&points[i - 1])));
        }
        coords.push(format!("{:.1},{:.1}", x(point), y(point)));
    }
    coords.join(" ")
}
