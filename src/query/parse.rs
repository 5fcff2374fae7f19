//! Query string tokenizer, key dispatch, and percent coding.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use super::{ParseResult, ParseWarning};
use crate::filter::FilterState;
use crate::locale::Locale;
use crate::media::MediaType;

pub(crate) fn parse_query(query: &str) -> ParseResult {
    let mut result = ParseResult {
        state: FilterState::default(),
        locale: None,
        pages: None,
        warnings: Vec::new(),
    };

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        dispatch_key(&key, raw_value, &mut result);
    }

    result
}

fn dispatch_key(key: &str, raw_value: &str, out: &mut ParseResult) {
    match key {
        "q" | "query" | "search" => {
            let value = percent_decode(raw_value);
            if !out.state.search_query.is_empty() {
                out.warnings.push(ParseWarning::DuplicateKey {
                    key: String::from(key),
                    value: value.clone(),
                });
            }
            out.state.search_query = value;
        }

        // Multi-valued: repeated keys and comma lists accumulate. Category ids
        // are an open set and compared exactly, so they keep their case.
        "category" | "categories" | "cat" => {
            out.state.categories.extend(split_list(raw_value));
        }
        "type" | "types" => {
            for id in split_list(raw_value) {
                match MediaType::from_id(&id) {
                    Some(t) => {
                        out.state.types.insert(String::from(t.id()));
                    }
                    None => out.warnings.push(ParseWarning::ValueInvalid {
                        key: "type",
                        value: id,
                        reason: "expected video|image|gif",
                    }),
                }
            }
        }

        "lang" | "locale" => {
            let value = percent_decode(raw_value);
            match Locale::from_code(&value) {
                Some(l) => set_or_warn(&mut out.locale, l, key, &value, &mut out.warnings),
                None => out.warnings.push(ParseWarning::ValueInvalid {
                    key: "lang",
                    value,
                    reason: "expected en|fr",
                }),
            }
        }

        "page" | "pages" => {
            let value = percent_decode(raw_value);
            match parse_pages(&value) {
                Some(n) => set_or_warn(&mut out.pages, n, key, &value, &mut out.warnings),
                None => out.warnings.push(ParseWarning::ValueInvalid {
                    key: "page",
                    value,
                    reason: "expected a positive integer",
                }),
            }
        }

        _ => out.warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: percent_decode(raw_value),
        }),
    }
}

/// Set a single-valued field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: T,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if field.is_some() {
        warnings.push(ParseWarning::DuplicateKey {
            key: String::from(key),
            value: String::from(value),
        });
    }
    *field = Some(parsed);
}

fn parse_pages(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok().filter(|&v| v > 0)
}

/// Comma-separated list, each element percent-decoded and trimmed. Empty
/// elements are dropped.
fn split_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',').filter_map(|part| {
        let v = percent_decode(part);
        let v = v.trim();
        (!v.is_empty()).then(|| v.to_owned())
    })
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space. Invalid
/// escapes are kept literally; invalid UTF-8 is replaced.
pub(super) fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub(super) fn percent_encode(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[usize::from(b >> 4)] as char);
            out.push(HEX[usize::from(b & 0x0f)] as char);
        }
    }
    out
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::to_query;

    #[test]
    fn parse_basic() {
        let r = parse_query("q=logo&category=branding&type=video");
        assert_eq!(r.state.search_query, "logo");
        assert!(r.state.categories.contains("branding"));
        assert!(r.state.types.contains("video"));
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn leading_question_mark_and_empty_pairs() {
        let r = parse_query("?&&q=ui&");
        assert_eq!(r.state.search_query, "ui");
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn lists_and_repeats_accumulate() {
        let r = parse_query("category=branding,%20motion&cat=mobile&type=gif,IMAGE&types=gif");
        let cats: Vec<_> = r.state.categories.iter().map(String::as_str).collect();
        assert_eq!(cats, ["branding", "mobile", "motion"]);
        let types: Vec<_> = r.state.types.iter().map(String::as_str).collect();
        assert_eq!(types, ["gif", "image"]);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn unknown_category_is_kept() {
        let r = parse_query("category=sculpture");
        assert!(r.state.categories.contains("sculpture"));
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn category_case_is_kept() {
        let state = FilterState::new().category("Live-Act").category("branding");
        let url = to_query(&state, None);
        assert_eq!(url, "category=Live-Act,branding");
        assert_eq!(parse_query(&url).state, state);
    }

    #[test]
    fn invalid_type_warns() {
        let r = parse_query("type=video,audio");
        assert_eq!(r.state.types.len(), 1);
        assert_eq!(
            r.warnings,
            [ParseWarning::ValueInvalid {
                key: "type",
                value: String::from("audio"),
                reason: "expected video|image|gif",
            }]
        );
    }

    #[test]
    fn duplicate_query_last_wins() {
        let r = parse_query("q=a&search=b");
        assert_eq!(r.state.search_query, "b");
        assert!(matches!(r.warnings[0], ParseWarning::DuplicateKey { .. }));
    }

    #[test]
    fn locale_and_pages() {
        let r = parse_query("lang=fr-CA&page=3");
        assert_eq!(r.locale, Some(Locale::Fr));
        assert_eq!(r.pages, Some(3));

        let r = parse_query("lang=de&page=0");
        assert_eq!(r.locale, None);
        assert_eq!(r.pages, None);
        assert_eq!(r.warnings.len(), 2);
    }

    #[test]
    fn unknown_key_warns() {
        let r = parse_query("utm_source=mail");
        assert_eq!(
            r.warnings,
            [ParseWarning::KeyNotRecognized {
                key: String::from("utm_source"),
                value: String::from("mail"),
            }]
        );
    }

    #[test]
    fn keys_are_case_insensitive() {
        let r = parse_query("Q=Motion&LANG=EN");
        assert_eq!(r.state.search_query, "Motion");
        assert_eq!(r.locale, Some(Locale::En));
    }

    // ---- percent coding ----

    #[test]
    fn decode_plus_and_escapes() {
        assert_eq!(percent_decode("social+media"), "social media");
        assert_eq!(percent_decode("r%C3%A9seaux"), "réseaux");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%4"), "%4");
    }

    #[test]
    fn encode_reserved_and_utf8() {
        assert_eq!(percent_encode("ui-ux"), "ui-ux");
        assert_eq!(percent_encode("a&b c"), "a%26b%20c");
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn to_query_round_trips() {
        let state = FilterState::new()
            .query("user experience & more")
            .category("ui-ux")
            .category("web-design");
        let url = to_query(&state, None);
        assert_eq!(parse_query(&url).state, state);
    }

    #[test]
    fn to_query_empty_state() {
        assert_eq!(to_query(&FilterState::new(), None), "");
    }
}
