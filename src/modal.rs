//! Media modal state machine.
//!
//! ```text
//!   Closed ──open(item)──▶ Open { details, expanded, playback }
//!     ▲                        │
//!     └──────escape / close────┘
//! ```
//!
//! Inside `Open`, the details panel and the expanded (full-screen) view are
//! independent overlays. Escape dismisses the innermost one first: expanded
//! media, then details, then the modal itself. Every open starts from a
//! fresh state.

use alloc::string::String;

use crate::catalog::MediaItem;
use crate::gallery::Key;
use crate::locale::Locale;
use crate::media::MediaType;
use crate::settings::SidebarLayer;

/// Modal error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModalError {
    /// The operation needs an open modal.
    #[error("modal is not open")]
    NotOpen,
    /// Only images and GIFs have an expanded view.
    #[error("{0:?} media cannot be expanded")]
    ExpandUnsupported(MediaType),
}

/// What a single escape press dismissed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dismissed {
    /// The expanded media view collapsed.
    Expanded,
    /// The details panel closed.
    Details,
    /// The modal closed.
    Modal,
    /// Nothing was open.
    Nothing,
}

/// Video playback state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Playback {
    /// Whether the video is playing. Starts paused.
    pub playing: bool,
    /// Sound off. Setting the volume to 0 also mutes.
    pub muted: bool,
    /// 0.0 to 1.0.
    pub volume: f32,
    /// Seconds.
    pub current_time: f64,
    /// Seconds; 0 until known.
    pub duration: f64,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            playing: false,
            muted: false,
            volume: 1.0,
            current_time: 0.0,
            duration: 0.0,
        }
    }
}

impl Playback {
    /// Play/pause button.
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Mute button. The volume level is kept.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Set the volume, clamped to 0..=1. Zero volume mutes; anything else
    /// unmutes.
    pub fn set_volume(&mut self, volume: f32) {
        let v = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
        self.volume = v;
        self.muted = v == 0.0;
    }

    /// Jump to `seconds`, clamped to the known duration.
    pub fn seek(&mut self, seconds: f64) {
        let upper = if self.duration > 0.0 { self.duration } else { 0.0 };
        self.current_time = if seconds.is_nan() { 0.0 } else { seconds.clamp(0.0, upper) };
    }

    /// The player reported its duration.
    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = if seconds.is_finite() && seconds > 0.0 { seconds } else { 0.0 };
        if self.current_time > self.duration {
            self.current_time = self.duration;
        }
    }

    /// The player reported progress.
    pub fn set_current_time(&mut self, seconds: f64) {
        if seconds.is_finite() && seconds >= 0.0 {
            self.current_time = seconds;
        }
    }

    /// `"m:ss / m:ss"` progress label.
    pub fn progress_label(&self) -> String {
        alloc::format!(
            "{} / {}",
            format_time(self.current_time),
            format_time(self.duration)
        )
    }
}

/// Format seconds as `m:ss`. Negative and non-finite values format as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    alloc::format!("{}:{:02}", total / 60, total % 60)
}

/// State while the modal is open.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenModal {
    /// Catalog id of the item shown.
    pub item_id: String,
    /// Resolved type; selects the video player or the image viewer.
    pub media_type: MediaType,
    /// Details panel open over the media.
    pub showing_details: bool,
    /// Image or GIF shown full screen. Never set for video.
    pub media_expanded: bool,
    /// The full asset failed to load; show the thumbnail instead.
    pub media_failed: bool,
    /// Player state. Only meaningful for video.
    pub playback: Playback,
    src: String,
    thumbnail: String,
}

impl OpenModal {
    /// Asset to display: the full asset, or the thumbnail after a failure.
    pub fn display_source(&self) -> &str {
        if self.media_failed {
            &self.thumbnail
        } else {
            &self.src
        }
    }
}

/// The modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    /// Nothing shown.
    #[default]
    Closed,
    /// Showing one catalog item.
    Open(OpenModal),
}

impl ModalState {
    /// Open on `item`, discarding any previous state.
    pub fn open(&mut self, item: &MediaItem) {
        let media_type = item.resolved_type();
        tracing::debug!(id = %item.id, ?media_type, "modal opened");
        *self = Self::Open(OpenModal {
            item_id: item.id.clone(),
            media_type,
            showing_details: false,
            media_expanded: false,
            media_failed: false,
            playback: Playback::default(),
            src: item.src.clone(),
            thumbnail: item.thumbnail.clone(),
        });
    }

    /// Close button or backdrop click. Dismisses every layer at once.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("modal closed");
        }
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// State of the open modal.
    pub fn current(&self) -> Option<&OpenModal> {
        match self {
            Self::Open(m) => Some(m),
            Self::Closed => None,
        }
    }

    fn current_mut(&mut self) -> Result<&mut OpenModal, ModalError> {
        match self {
            Self::Open(m) => Ok(m),
            Self::Closed => Err(ModalError::NotOpen),
        }
    }

    /// Media expanded to full screen. Drives [`SidebarLayer`].
    pub fn is_expanded(&self) -> bool {
        self.current().is_some_and(|m| m.media_expanded)
    }

    /// Sidebar stacking for the current state.
    pub fn sidebar_layer(&self) -> SidebarLayer {
        SidebarLayer::for_media_expanded(self.is_expanded())
    }

    /// Show or hide the details panel. Showing it pauses video playback.
    /// Returns whether details are now shown.
    pub fn toggle_details(&mut self) -> Result<bool, ModalError> {
        let m = self.current_mut()?;
        m.showing_details = !m.showing_details;
        if m.showing_details && m.media_type == MediaType::Video {
            m.playback.pause();
        }
        Ok(m.showing_details)
    }

    /// Expand image or GIF media to full screen.
    pub fn expand(&mut self) -> Result<(), ModalError> {
        let m = self.current_mut()?;
        if !m.media_type.is_expandable() {
            return Err(ModalError::ExpandUnsupported(m.media_type));
        }
        m.media_expanded = true;
        Ok(())
    }

    /// Leave the full-screen view. No-op when not expanded.
    pub fn collapse(&mut self) -> Result<(), ModalError> {
        self.current_mut()?.media_expanded = false;
        Ok(())
    }

    /// Dismiss the innermost overlay.
    pub fn escape(&mut self) -> Dismissed {
        let dismissed = match self {
            Self::Closed => Dismissed::Nothing,
            Self::Open(m) if m.media_expanded => {
                m.media_expanded = false;
                Dismissed::Expanded
            }
            Self::Open(m) if m.showing_details => {
                m.showing_details = false;
                Dismissed::Details
            }
            Self::Open(_) => Dismissed::Modal,
        };
        if dismissed == Dismissed::Modal {
            *self = Self::Closed;
        }
        tracing::trace!(?dismissed, "escape");
        dismissed
    }

    /// The full asset failed to load.
    pub fn media_failed(&mut self) -> Result<(), ModalError> {
        let m = self.current_mut()?;
        m.media_failed = true;
        m.playback.pause();
        tracing::debug!(id = %m.item_id, "media failed to load, showing poster");
        Ok(())
    }

    /// Video playback state, when a video is open.
    pub fn playback_mut(&mut self) -> Option<&mut Playback> {
        match self {
            Self::Open(m) if m.media_type == MediaType::Video => Some(&mut m.playback),
            _ => None,
        }
    }

    /// Keyboard handling. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape => self.escape() != Dismissed::Nothing,
            _ => false,
        }
    }

    /// Title and description of the open item, for the info panel.
    pub fn info<'a>(&self, item: &'a MediaItem, locale: Locale) -> Option<(&'a str, &'a str)> {
        let m = self.current()?;
        (m.item_id == item.id).then(|| (item.title_in(locale), item.description_in(locale)))
    }
}
