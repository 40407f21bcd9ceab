use maud::{html, Markup};

pub mod badges;
pub mod error;
pub mod timeline;

pub use badges::{price_badge, status_badge};
pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Toggle-style link button; `hx_get` swaps the enclosing card in place.
pub fn toggle_button(label: &str, href: &str, hx_get: &str, hx_target: &str, active: bool) -> Markup {
    let variant = if active { "btn btn-sm btn-default" } else { "btn btn-sm btn-outline" };

    html! {
        a class=(variant)
            href=(href)
            hx-get=(hx_get)
            hx-target=(hx_target)
            hx-swap="outerHTML"
            aria-pressed=(if active { "true" } else { "false" })
        {
            (label)
        }
    }
}
