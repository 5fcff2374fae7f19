//! Tracking of asynchronous natural-size measurements.
//!
//! The host starts a measurement with [`AspectProbes::begin`], keeps the
//! returned [`ProbeTicket`] with its load callback, and hands the ticket back
//! to [`AspectProbes::complete`]. Completions are applied only when they are
//! still relevant:
//!
//! - after [`AspectProbes::teardown`] every older ticket is ignored, so a late
//!   callback from an unmounted gallery cannot touch fresh state;
//! - per image, a completion older than the measurement already applied is
//!   ignored, so out-of-order loads never reinstate stale dimensions.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::masonry::{DEFAULT_ASPECT_RATIO, GalleryImage};

/// Handle for one outstanding measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProbeTicket {
    key: String,
    generation: u64,
    epoch: u64,
}

impl ProbeTicket {
    /// Image identity this ticket measures.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// How a measurement ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Natural pixel dimensions of the loaded image.
    Loaded { width: u32, height: u32 },
    /// The asset could not be loaded or decoded.
    Failed,
}

/// What [`AspectProbes::complete`] did with a completion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ProbeUpdate {
    /// The ratio was recorded; the layout should be recomputed.
    Applied(f32),
    /// A newer measurement for the same image was already applied.
    Stale,
    /// The owner was torn down after the ticket was issued.
    Cancelled,
}

impl ProbeUpdate {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct Entry {
    /// Last generation handed out.
    issued: u64,
    /// Generation of the measurement in `ratio`, 0 when none.
    applied: u64,
    ratio: Option<f32>,
}

/// Measured aspect ratios keyed by image identity.
#[derive(Clone, Debug, Default)]
pub struct AspectProbes {
    entries: BTreeMap<String, Entry>,
    epoch: u64,
}

impl AspectProbes {
    /// No measurements yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start measuring `key`.
    pub fn begin(&mut self, key: &str) -> ProbeTicket {
        let entry = self.entries.entry(String::from(key)).or_default();
        entry.issued += 1;
        ProbeTicket {
            key: String::from(key),
            generation: entry.issued,
            epoch: self.epoch,
        }
    }

    /// Finish a measurement.
    pub fn complete(&mut self, ticket: &ProbeTicket, outcome: ProbeOutcome) -> ProbeUpdate {
        if ticket.epoch != self.epoch {
            tracing::trace!(key = %ticket.key, "probe completed after teardown, ignored");
            return ProbeUpdate::Cancelled;
        }
        let Some(entry) = self.entries.get_mut(&ticket.key) else {
            return ProbeUpdate::Cancelled;
        };
        if ticket.generation <= entry.applied {
            tracing::trace!(
                key = %ticket.key,
                generation = ticket.generation,
                applied = entry.applied,
                "stale probe completion ignored"
            );
            return ProbeUpdate::Stale;
        }
        let ratio = outcome_ratio(outcome);
        if outcome == ProbeOutcome::Failed {
            tracing::debug!(key = %ticket.key, "image probe failed, using default aspect ratio");
        }
        entry.applied = ticket.generation;
        entry.ratio = Some(ratio);
        ProbeUpdate::Applied(ratio)
    }

    /// Latest applied ratio for `key`.
    pub fn aspect_ratio(&self, key: &str) -> Option<f32> {
        self.entries.get(key).and_then(|e| e.ratio)
    }

    /// Whether a measurement for `key` has been issued but none applied yet.
    pub fn is_pending(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|e| e.issued > e.applied && e.ratio.is_none())
    }

    /// Copy measured ratios into `images`. Returns how many changed.
    pub fn apply(&self, images: &mut [GalleryImage]) -> usize {
        let mut changed = 0;
        for image in images.iter_mut() {
            if let Some(r) = self.aspect_ratio(&image.source)
                && image.aspect_ratio != Some(r)
            {
                image.aspect_ratio = Some(r);
                changed += 1;
            }
        }
        changed
    }

    /// Forget all measurements and invalidate every outstanding ticket.
    pub fn teardown(&mut self) {
        self.entries.clear();
        self.epoch += 1;
    }
}

fn outcome_ratio(outcome: ProbeOutcome) -> f32 {
    match outcome {
        ProbeOutcome::Loaded { width, height } if width > 0 && height > 0 => {
            width as f32 / height as f32
        }
        _ => DEFAULT_ASPECT_RATIO,
    }
}
