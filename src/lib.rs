//! Portfolio gallery state: masonry packing, catalog filtering, and the media modal.
//!
//! Pure state and geometry with no rendering and no I/O. `no_std` compatible
//! (requires `alloc`).
//!
//! # Modules
//!
//! - [`masonry`]: Greedy shortest-column packing of images with known or pending aspect ratios
//! - [`probe`]: Asynchronous aspect-ratio measurement with stale and late completion handling
//! - [`gallery`]: Gallery component: responsive columns, re-packing, lightbox navigation
//! - [`catalog`]: Media items, categories, and the bundled portfolio
//! - [`filter`]: Search text plus category/type selection over a catalog
//! - [`pager`]: "Load more" windowing of filter results
//! - [`browse`]: Portfolio grid controller tying filter, pager, and modal together
//! - [`modal`]: Media modal state machine (details, expanded view, playback)
//! - [`locale`], [`media`], [`settings`]: Localized text, media kinds, theme and navigation
//! - `query` (feature `query`): Shareable filter URLs
//! - `svg` (feature `svg`): SVG rendering of a masonry layout

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod browse;
pub mod catalog;
pub mod filter;
pub mod gallery;
pub mod locale;
pub mod masonry;
pub mod media;
pub mod modal;
pub mod pager;
pub mod probe;
pub mod settings;

#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "svg")]
pub mod svg;

pub use browse::Browser;
pub use catalog::{CatalogError, Category, MediaItem};
pub use filter::FilterState;
pub use gallery::{Gallery, Key, Lightbox};
pub use locale::{Locale, Localized};
pub use masonry::{Breakpoints, GalleryImage, LayoutError, MasonryConfig, MasonryLayout, Placement};
pub use media::{MediaType, resolve_media_type};
pub use modal::{Dismissed, ModalError, ModalState, Playback};
pub use pager::Pager;
pub use probe::{AspectProbes, ProbeOutcome, ProbeTicket, ProbeUpdate};
pub use settings::{Route, Settings, Theme};
