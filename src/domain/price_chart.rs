// src/domain/price_chart.rs

use crate::domain::events::{EventPayload, ProductEvent};
use crate::domain::price::Price;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub at: DateTime<Utc>,
    pub price: Price,
}

/// Price series from the price events of a chronological history. A removed
/// price contributes no point. When the series is non-empty the last price is
/// repeated at `now` so the line reaches the present.
pub fn price_series(history: &[ProductEvent], now: DateTime<Utc>) -> Vec<PricePoint> {
    let mut points: Vec<PricePoint> = history
        .iter()
        .filter_map(|event| {
            let price = match event.payload {
                EventPayload::PriceChanged { new_price, .. } => new_price,
                EventPayload::PriceDiscovered { new_price } => new_price,
                _ => return None,
            };
            Some(PricePoint {
                at: event.timestamp,
                price,
            })
        })
        .collect();

    if let Some(last) = points.last().copied() {
        points.push(PricePoint { at: now, ..last });
    }

    points
}

/// Zoom window of the price chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartRange {
    OneDay,
    FiveDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    #[default]
    All,
}

impl ChartRange {
    pub const ALL: [ChartRange; 7] = [
        ChartRange::OneDay,
        ChartRange::FiveDays,
        ChartRange::OneMonth,
        ChartRange::ThreeMonths,
        ChartRange::SixMonths,
        ChartRange::OneYear,
        ChartRange::All,
    ];

    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|r| r.trim().to_ascii_lowercase()).as_deref() {
            Some("1d") => ChartRange::OneDay,
            Some("5d") => ChartRange::FiveDays,
            Some("1m") => ChartRange::OneMonth,
            Some("3m") => ChartRange::ThreeMonths,
            Some("6m") => ChartRange::SixMonths,
            Some("1y") => ChartRange::OneYear,
            _ => ChartRange::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartRange::OneDay => "1d",
            ChartRange::FiveDays => "5d",
            ChartRange::OneMonth => "1m",
            ChartRange::ThreeMonths => "3m",
            ChartRange::SixMonths => "6m",
            ChartRange::OneYear => "1y",
            ChartRange::All => "all",
        }
    }

    pub fn days(&self) -> Option<i64> {
        match self {
            ChartRange::OneDay => Some(1),
            ChartRange::FiveDays => Some(5),
            ChartRange::OneMonth => Some(30),
            ChartRange::ThreeMonths => Some(90),
            ChartRange::SixMonths => Some(180),
            ChartRange::OneYear => Some(365),
            ChartRange::All => None,
        }
    }

    /// Points inside the window ending at `now`. The price in force at the
    /// window start is kept as its first point so the line does not start
    /// blank.
    pub fn window(&self, series: &[PricePoint], now: DateTime<Utc>) -> Vec<PricePoint> {
        let Some(days) = self.days() else {
            return series.to_vec();
        };
        let start = now - Duration::days(days);

        let mut out = Vec::new();
        if let Some(before) = series.iter().rev().find(|p| p.at < start) {
            out.push(PricePoint { at: start, ..*before });
        }
        out.extend(series.iter().filter(|p| p.at >= start).copied());
        out
    }
}
