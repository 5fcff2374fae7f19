//! Media types and locator-based type resolution.

use crate::locale::Locale;

/// Kind of media behind a catalog item.
///
/// Selects the modal viewer and matches the type filter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaType {
    /// Playable video.
    Video,
    /// Still image.
    Image,
    /// Animated GIF.
    Gif,
}

/// Extensions treated as video when sniffing a locator. Sorted for binary search.
const VIDEO_EXTENSIONS: &[&str] = &["avi", "m4v", "mkv", "mov", "mp4", "ogg", "ogv", "webm"];

impl MediaType {
    /// Every media type, in filter-bar order.
    pub const ALL: [Self; 3] = [Self::Video, Self::Image, Self::Gif];

    /// Stable identifier used in filter selections and URLs.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
            Self::Gif => "gif",
        }
    }

    /// Parse an identifier. Case-insensitive.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(id.trim()))
    }

    /// Filter-bar label.
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Video, Locale::En) => "Videos",
            (Self::Video, Locale::Fr) => "Vidéos",
            (Self::Image, _) => "Images",
            (Self::Gif, _) => "GIFs",
        }
    }

    /// Whether the media can be shown in the expanded full-screen view.
    pub const fn is_expandable(self) -> bool {
        matches!(self, Self::Image | Self::Gif)
    }
}

/// Decide the media type of an asset.
///
/// Priority: the explicit tag, then the locator's file extension, then
/// [`MediaType::Image`]. Query strings and fragments are ignored, and the
/// extension comparison is case-insensitive.
///
/// ```
/// use zenfolio::{MediaType, resolve_media_type};
///
/// assert_eq!(resolve_media_type(None, "reel.MP4?t=3"), MediaType::Video);
/// assert_eq!(resolve_media_type(Some(MediaType::Gif), "reel.mp4"), MediaType::Gif);
/// assert_eq!(resolve_media_type(None, "photo"), MediaType::Image);
/// ```
pub fn resolve_media_type(explicit: Option<MediaType>, locator: &str) -> MediaType {
    if let Some(t) = explicit {
        return t;
    }
    match extension(locator) {
        Some(ext) if ext.eq_ignore_ascii_case("gif") => MediaType::Gif,
        Some(ext) if is_video_extension(ext) => MediaType::Video,
        _ => MediaType::Image,
    }
}

fn is_video_extension(ext: &str) -> bool {
    if ext.len() > 4 || !ext.is_ascii() {
        return false;
    }
    let mut buf = [0u8; 4];
    let lower = &mut buf[..ext.len()];
    lower.copy_from_slice(ext.as_bytes());
    lower.make_ascii_lowercase();
    match core::str::from_utf8(lower) {
        Ok(s) => VIDEO_EXTENSIONS.binary_search(&s).is_ok(),
        Err(_) => false,
    }
}

/// Extension of the last path segment, without query or fragment.
fn extension(locator: &str) -> Option<&str> {
    let end = locator.find(['?', '#']).unwrap_or(locator.len());
    let path = &locator[..end];
    let segment = path.rsplit('/').next().unwrap_or(path);
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}
