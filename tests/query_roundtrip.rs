//! Shareable filter URLs driving the portfolio browser.

#![cfg(feature = "query")]

use zenfolio::catalog::portfolio;
use zenfolio::query::{self, ParseWarning};
use zenfolio::*;

fn ids(items: &[&MediaItem]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

#[test]
fn url_restores_browser_view() {
    let parsed = query::parse("?category=ui-ux,corporate&type=gif&lang=fr&page=1");
    assert!(parsed.warnings.is_empty(), "{:?}", parsed.warnings);

    let items = portfolio();
    let settings = Settings::new(parsed.locale.unwrap_or_default(), Theme::Dark);
    let browser = Browser::new(&items, settings).with_filter(parsed.state);
    assert_eq!(ids(&browser.results()), ["3", "9"]);
    assert_eq!(browser.summary(), "Affichage de 2 sur 2 projets");
}

#[test]
fn browser_state_serializes_and_parses_back() {
    let items = portfolio();
    let mut browser = Browser::new(&items, Settings::default());
    browser.set_query("social media");
    browser.toggle_category("motion");
    browser.toggle_type(MediaType::Video);

    let url = query::to_query(browser.filter_state(), Some(Locale::En));
    assert_eq!(url, "q=social%20media&category=motion&type=video&lang=en");

    let parsed = query::parse(&url);
    assert_eq!(&parsed.state, browser.filter_state());
    assert_eq!(parsed.locale, Some(Locale::En));
}

#[test]
fn pages_reveal_more_results() {
    let parsed = query::parse("page=2");
    let mut pager = Pager::default();
    pager.set_pages(parsed.pages.unwrap());
    assert_eq!(pager.visible(), 12);
}

#[test]
fn bad_pairs_warn_and_are_skipped() {
    let parsed = query::parse("q=logo&type=hologram&lang=xx&page=-1&ref=home&q=icons");
    assert_eq!(parsed.state.search_query, "icons");
    assert!(parsed.state.types.is_empty());
    assert_eq!(parsed.locale, None);
    assert_eq!(parsed.pages, None);

    let invalid = parsed
        .warnings
        .iter()
        .filter(|w| matches!(w, ParseWarning::ValueInvalid { .. }))
        .count();
    assert_eq!(invalid, 3);
    assert!(parsed.warnings.contains(&ParseWarning::KeyNotRecognized {
        key: "ref".into(),
        value: "home".into(),
    }));
    assert!(
        parsed
            .warnings
            .iter()
            .any(|w| matches!(w, ParseWarning::DuplicateKey { key, .. } if key == "q"))
    );
}

#[test]
fn custom_category_survives_round_trip() {
    let items = vec![
        MediaItem::new("a", Localized::single("Set"), "Live-Act", "a.jpg", "a.jpg"),
        MediaItem::new("b", Localized::single("Mark"), "branding", "b.jpg", "b.jpg"),
    ];
    let mut browser = Browser::new(&items, Settings::default());
    browser.toggle_category("Live-Act");

    let url = query::to_query(browser.filter_state(), None);
    let restored = Browser::new(&items, Settings::default()).with_filter(query::parse(&url).state);
    assert_eq!(ids(&restored.results()), ["a"]);
}
