// templates/pages/home.rs

use crate::i18n::Translator;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page(t: &Translator) -> Markup {
    let title = t.t("home.title", &[]);

    desktop_layout(
        &title,
        t,
        html! {
            main class="container" {
                h1 { (title) }
                p { (t.t("home.intro", &[])) }

                (card(&t.t("history.title", &[]), html! {
                    form method="get" action="/lookup" class="lookup-form" {
                        input type="hidden" name="lng" value=(t.locale().tag());
                        label for="shopId" { (t.t("home.lookup.shopId", &[])) }
                        input type="text" id="shopId" name="shopId" required;
                        label for="shopsProductId" { (t.t("home.lookup.listingId", &[])) }
                        input type="text" id="shopsProductId" name="shopsProductId" required;
                        button type="submit" class="primary" { (t.t("home.lookup.submit", &[])) }
                    }
                }))
            }
        },
    )
}
