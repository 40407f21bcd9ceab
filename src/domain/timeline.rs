// src/domain/timeline.rs

use crate::domain::events::{EventKind, EventPayload, ProductEvent};

/// The subset of a listing's history the viewer has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryFilter {
    #[default]
    All,
    Price,
    State,
}

impl HistoryFilter {
    pub const ALL: [HistoryFilter; 3] = [HistoryFilter::All, HistoryFilter::Price, HistoryFilter::State];

    /// Query-string value; anything unrecognised means `All`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|r| r.trim().to_ascii_lowercase()).as_deref() {
            Some("price") => HistoryFilter::Price,
            Some("state") => HistoryFilter::State,
            _ => HistoryFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryFilter::All => "all",
            HistoryFilter::Price => "price",
            HistoryFilter::State => "state",
        }
    }

    /// Button label key, relative to the subject prefix.
    pub fn label_key(&self) -> &'static str {
        match self {
            HistoryFilter::All => "history.filters.all",
            HistoryFilter::Price => "history.filters.price",
            HistoryFilter::State => "history.filters.availability",
        }
    }

    /// Created events only show under `All`.
    pub fn matches(&self, payload: &EventPayload) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Price => payload.kind().is_price(),
            HistoryFilter::State => payload.kind() == EventKind::StateChanged,
        }
    }
}

/// What the history card should show for a given history and filter.
#[derive(Debug, PartialEq)]
pub enum TimelineView<'a> {
    /// No history at all; no filter controls are shown.
    NoHistory,
    /// History exists but nothing matches the active filter.
    NoMatches,
    /// Matching events, newest first.
    Entries(Vec<&'a ProductEvent>),
}

/// `history` is chronological (oldest first); entries come back reversed.
/// Events with an unrecognised payload match no filter.
pub fn derive_timeline(history: Option<&[ProductEvent]>, filter: HistoryFilter) -> TimelineView<'_> {
    let history = match history {
        Some(h) if !h.is_empty() => h,
        _ => return TimelineView::NoHistory,
    };

    let entries: Vec<&ProductEvent> = history
        .iter()
        .filter(|event| event.recognized && filter.matches(&event.payload))
        .rev()
        .collect();

    if entries.is_empty() {
        TimelineView::NoMatches
    } else {
        TimelineView::Entries(entries)
    }
}
