//! Catalog search and filtering.
//!
//! Three predicates, each inactive when empty:
//!
//! - search: the locale's title, the locale's description, or any tag
//!   contains the query (case-insensitive);
//! - category: the item's category is one of the selected ids;
//! - type: the item's resolved media type is one of the selected ids.
//!
//! An item is kept iff it satisfies every active predicate. Output keeps
//! catalog order. Selected ids outside the known tables simply match nothing.
//!
//! ```
//! use zenfolio::{FilterState, Locale, MediaType, catalog, filter};
//!
//! let items = catalog::portfolio();
//! let state = FilterState::new()
//!     .category("branding")
//!     .media_type(MediaType::Video);
//! assert!(filter::filter(&items, &state, Locale::En).is_empty());
//!
//! let state = FilterState::new().query("logo");
//! let ids: Vec<_> = filter::filter(&items, &state, Locale::En)
//!     .iter()
//!     .map(|i| i.id.as_str())
//!     .collect();
//! assert_eq!(ids, ["1", "6"]);
//! ```

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use crate::catalog::MediaItem;
use crate::locale::Locale;
use crate::media::MediaType;

/// Current search text and filter selections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterState {
    /// Free-text search. Empty matches everything; otherwise matched
    /// case-insensitively against the title, description, and tags.
    pub search_query: String,
    /// Selected category ids.
    pub categories: BTreeSet<String>,
    /// Selected media type ids.
    pub types: BTreeSet<String>,
}

impl FilterState {
    /// No query and no selections: every item matches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Select a category id.
    pub fn category(mut self, id: impl Into<String>) -> Self {
        self.categories.insert(id.into());
        self
    }

    /// Select a media type.
    pub fn media_type(mut self, media_type: MediaType) -> Self {
        self.types.insert(String::from(media_type.id()));
        self
    }

    /// Select a media type by raw id (kept even when unknown).
    pub fn type_id(mut self, id: impl Into<String>) -> Self {
        self.types.insert(id.into());
        self
    }

    /// Replace the search text (the search box changed).
    pub fn set_query(&mut self, query: &str) {
        self.search_query.clear();
        self.search_query.push_str(query);
    }

    /// Select the category if unselected, otherwise deselect it.
    /// Returns whether it is now selected.
    pub fn toggle_category(&mut self, id: &str) -> bool {
        toggle(&mut self.categories, id)
    }

    /// Select the type if unselected, otherwise deselect it.
    /// Returns whether it is now selected.
    pub fn toggle_type(&mut self, media_type: MediaType) -> bool {
        toggle(&mut self.types, media_type.id())
    }

    /// Drop the query and every selection.
    pub fn clear(&mut self) {
        self.search_query.clear();
        self.categories.clear();
        self.types.clear();
    }

    /// Whether any predicate is active.
    pub fn is_active(&self) -> bool {
        !self.search_query.is_empty() || !self.categories.is_empty() || !self.types.is_empty()
    }

    /// Badge count on the filter button: one per selection, plus one for a
    /// non-empty query.
    pub fn active_count(&self) -> usize {
        self.categories.len() + self.types.len() + usize::from(!self.search_query.is_empty())
    }
}

fn toggle(set: &mut BTreeSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(String::from(id));
        true
    }
}

/// Whether `item` satisfies every active predicate of `state`.
pub fn matches(item: &MediaItem, state: &FilterState, locale: Locale) -> bool {
    let needle = state.search_query.to_lowercase();
    matches_prepared(item, state, &needle, locale)
}

fn matches_prepared(item: &MediaItem, state: &FilterState, needle: &str, locale: Locale) -> bool {
    matches_search(item, needle, locale)
        && (state.categories.is_empty() || state.categories.contains(&item.category))
        && (state.types.is_empty() || state.types.contains(item.resolved_type().id()))
}

fn matches_search(item: &MediaItem, needle: &str, locale: Locale) -> bool {
    if needle.is_empty() {
        return true;
    }
    contains_folded(item.title_in(locale), needle)
        || contains_folded(item.description_in(locale), needle)
        || item.tags.iter().any(|tag| contains_folded(tag, needle))
}

fn contains_folded(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Items of `catalog` matching `state`, in catalog order.
pub fn filter<'a>(
    catalog: &'a [MediaItem],
    state: &FilterState,
    locale: Locale,
) -> Vec<&'a MediaItem> {
    let needle = state.search_query.to_lowercase();
    let out: Vec<&MediaItem> = catalog
        .iter()
        .filter(|item| matches_prepared(item, state, &needle, locale))
        .collect();
    tracing::trace!(
        catalog = catalog.len(),
        results = out.len(),
        active = state.active_count(),
        "catalog filtered"
    );
    out
}
