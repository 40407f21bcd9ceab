use crate::i18n::Translator;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, t: &Translator, content: Markup) -> Markup {
    let lng = t.locale().tag();

    html! {
        (DOCTYPE)
        html lang=(lng) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (t.t("app.name", &[])) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="icon" type="image/svg+xml" href="/static/favicon/favicon.svg";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  a href=(format!("/?lng={lng}")) class="brand" { (t.t("app.name", &[])) }
                  nav {
                      ul {
                          li { a href=(format!("/?lng={lng}")) { (t.t("nav.home", &[])) } }
                      }
                  }
                  div class="language-switch" {
                      a href="?lng=de" aria-current=[(lng == "de").then_some("true")] { "DE" }
                      " | "
                      a href="?lng=en" aria-current=[(lng == "en").then_some("true")] { "EN" }
                  }
              }
                (content)
            }
        }
    }
}
