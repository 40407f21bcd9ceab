// src/tests/router_tests/navigation_tests.rs

use crate::app::App;
use crate::i18n::Locale;
use crate::tests::utils::{get, HistoryDownSource};

fn app() -> App {
    App::new(Box::new(HistoryDownSource), Locale::De)
}

#[test]
fn health_check() {
    let resp = get(&app(), "/health");
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, "ok");
}

#[test]
fn home_page_has_lookup_form() {
    let resp = get(&app(), "/");
    assert_eq!(resp.status, 200);
    assert!(resp.body.contains(r#"action="/lookup""#));
    assert!(resp.body.contains(r#"name="shopId""#));
    assert!(resp.body.contains(r#"name="shopsProductId""#));
}

#[test]
fn lookup_redirects_to_listing() {
    let resp = get(&app(), "/lookup?shopId=shop-1&shopsProductId=a+b&lng=en");
    assert_eq!(resp.status, 303);
    assert_eq!(resp.location.as_deref(), Some("/product/shop-1/a+b?lng=en"));
}

#[test]
fn lookup_requires_both_ids() {
    let resp = get(&app(), "/lookup?shopId=shop-1&shopsProductId=");
    assert_eq!(resp.status, 400);
    assert!(resp.body.contains("shopsProductId"));
}

#[test]
fn encoded_ids_round_trip_through_the_path() {
    let resp = get(&app(), "/item/shop%201/a+b");
    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("Zinnteller a b"));
    assert!(resp.body.contains("Antik Schulz (shop 1)"));
}

#[test]
fn unknown_routes_are_404() {
    assert_eq!(get(&app(), "/nope").status, 404);
    assert_eq!(get(&app(), "/listing/shop-1/sp-1").status, 404);
    assert_eq!(get(&app(), "/product/shop-1/sp-1/extra").status, 404);
}
