use chrono::{DateTime, SecondsFormat, Utc};
use maud::{html, Markup};

pub fn timeline(items: impl IntoIterator<Item = Markup>) -> Markup {
    html! {
        ol class="timeline" {
            @for item in items {
                (item)
            }
        }
    }
}

pub fn timeline_item(
    event_id: &str,
    at: &DateTime<Utc>,
    date: &str,
    time: &str,
    title: Markup,
    description: &str,
) -> Markup {
    html! {
        li class="timeline-item" data-event-id=(event_id) {
            div class="timeline-header" {
                time class="timeline-time" datetime=(at.to_rfc3339_opts(SecondsFormat::Secs, true)) {
                    span { (date) }
                    " "
                    span class="text-muted-foreground" { (time) }
                }
                div class="timeline-title" { (title) }
            }
            p class="timeline-description" { (description) }
        }
    }
}
