//! Loading catalogs and settings from JSON.

#![cfg(feature = "serde")]

use zenfolio::catalog::{self, portfolio};
use zenfolio::filter::{self, FilterState};
use zenfolio::*;

const CATALOG: &str = r#"[
  {
    "id": "a",
    "title": { "en": "Studio Reel", "fr": "Bande Démo" },
    "category": "motion",
    "thumbnail": "https://cdn.example/a.jpg",
    "src": "https://cdn.example/a.mp4?v=2"
  },
  {
    "id": "b",
    "title": { "en": "Wordmark" },
    "description": { "en": "Custom lettering" },
    "type": "image",
    "category": "branding",
    "tags": ["logo", "lettering"],
    "thumbnail": "b-thumb.png",
    "src": "b.png"
  }
]"#;

#[test]
fn optional_fields_default() {
    let items: Vec<MediaItem> = serde_json::from_str(CATALOG).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(catalog::validate_catalog(&items), Ok(()));

    let a = &items[0];
    assert_eq!(a.media_type, None);
    assert_eq!(a.resolved_type(), MediaType::Video);
    assert!(a.tags.is_empty());
    assert!(a.description.is_empty());
    assert_eq!(a.title_in(Locale::Fr), "Bande Démo");

    let b = &items[1];
    assert_eq!(b.media_type, Some(MediaType::Image));
    // Missing French falls back to English.
    assert_eq!(b.title_in(Locale::Fr), "Wordmark");
}

#[test]
fn loaded_catalog_filters() {
    let items: Vec<MediaItem> = serde_json::from_str(CATALOG).unwrap();
    let state = FilterState::new().query("logo");
    let hits = filter::filter(&items, &state, Locale::Fr);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "b");

    let state = FilterState::new().media_type(MediaType::Video);
    assert_eq!(filter::filter(&items, &state, Locale::En)[0].id, "a");
}

#[test]
fn duplicate_ids_rejected() {
    let json = r#"[
      {"id": "x", "title": {"en": "One"}, "category": "mobile", "thumbnail": "1.jpg", "src": "1.jpg"},
      {"id": "x", "title": {"en": "Two"}, "category": "mobile", "thumbnail": "2.jpg", "src": "2.jpg"}
    ]"#;
    let items: Vec<MediaItem> = serde_json::from_str(json).unwrap();
    assert_eq!(
        catalog::validate_catalog(&items),
        Err(CatalogError::DuplicateId("x".into()))
    );
}

#[test]
fn bundled_catalog_survives_json() {
    let items = portfolio();
    let json = serde_json::to_string(&items).unwrap();
    assert!(json.contains(r#""type":"gif""#));
    let back: Vec<MediaItem> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, items);
}

#[test]
fn settings_and_filter_state_from_json() {
    let settings: Settings = serde_json::from_str(r#"{"locale": "fr"}"#).unwrap();
    assert_eq!(settings, Settings::new(Locale::Fr, Theme::Light));

    let state: FilterState =
        serde_json::from_str(r#"{"categories": ["branding"], "types": ["gif"]}"#).unwrap();
    assert_eq!(state, FilterState::new().category("branding").media_type(MediaType::Gif));
}

#[test]
fn masonry_config_from_json() {
    let config: MasonryConfig = serde_json::from_str(r#"{"columns": 4}"#).unwrap();
    assert_eq!(config.columns, 4);
    assert_eq!(config.gap, masonry::DEFAULT_GAP);
    assert_eq!(config.container_width, None);
}
