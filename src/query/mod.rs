//! Shareable filter URLs.
//!
//! Parses query strings like `?q=logo&category=branding,motion&type=video&lang=fr`
//! into a [`FilterState`](crate::FilterState) and back, so a filtered view can
//! be bookmarked.
//!
//! # Example
//!
//! ```
//! use zenfolio::{Locale, query};
//!
//! let result = query::parse("?q=brand+identity&category=branding&lang=fr&page=2");
//! assert!(result.warnings.is_empty());
//! assert_eq!(result.state.search_query, "brand identity");
//! assert_eq!(result.locale, Some(Locale::Fr));
//! assert_eq!(result.pages, Some(2));
//!
//! let url = query::to_query(&result.state, result.locale);
//! assert_eq!(url, "q=brand%20identity&category=branding&lang=fr");
//! ```
//!
//! Parsing never fails. Problems are reported as [`ParseWarning`]s and the
//! offending pair is skipped.

mod parse;

use alloc::string::String;
use alloc::vec::Vec;

use crate::filter::FilterState;
use crate::locale::Locale;

/// Result of parsing a filter query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// Search text and selections.
    pub state: FilterState,
    /// Requested display locale.
    pub locale: Option<Locale>,
    /// Number of result pages to reveal.
    pub pages: Option<usize>,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A single-valued key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// The key is not a filter parameter.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    parse::parse_query(query)
}

/// Serialize `state` (and optionally a locale) into a query string without
/// a leading `?`. Selections are emitted in sorted order.
pub fn to_query(state: &FilterState, locale: Option<Locale>) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();
    if !state.search_query.is_empty() {
        pairs.push(("q", parse::percent_encode(&state.search_query)));
    }
    if !state.categories.is_empty() {
        pairs.push(("category", join_encoded(state.categories.iter())));
    }
    if !state.types.is_empty() {
        pairs.push(("type", join_encoded(state.types.iter())));
    }
    if let Some(l) = locale {
        pairs.push(("lang", String::from(l.code())));
    }

    let mut out = String::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out
}

fn join_encoded<'a>(values: impl Iterator<Item = &'a String>) -> String {
    let mut out = String::new();
    for (i, v) in values.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&parse::percent_encode(v));
    }
    out
}
