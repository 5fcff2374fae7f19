//! Gallery component state: responsive masonry layout plus a lightbox.

use alloc::string::String;
use alloc::vec::Vec;

use crate::masonry::{self, Breakpoints, GalleryImage, LayoutError, MasonryConfig, MasonryLayout};
use crate::probe::{AspectProbes, ProbeOutcome, ProbeTicket, ProbeUpdate};

/// Keys the gallery and modal react to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Closes the lightbox.
    Escape,
    /// Previous image.
    ArrowLeft,
    /// Next image.
    ArrowRight,
    /// Any other key; ignored.
    Other,
}

/// Full-size viewer over the gallery images.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<usize>,
    len: usize,
}

impl Lightbox {
    fn new(len: usize) -> Self {
        Self {
            selected: None,
            len,
        }
    }

    /// Index of the image being viewed.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Previous/next buttons only make sense with more than one image.
    pub fn has_navigation(&self) -> bool {
        self.len > 1
    }

    fn open(&mut self, index: usize) -> bool {
        if index < self.len {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    fn close(&mut self) {
        self.selected = None;
    }

    fn next(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1) % self.len);
        }
    }

    fn previous(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(if i == 0 { self.len - 1 } else { i - 1 });
        }
    }

    /// One-based position, e.g. `"3 / 12"`.
    pub fn counter(&self) -> Option<String> {
        self.selected
            .map(|i| alloc::format!("{} / {}", i + 1, self.len))
    }
}

/// State owned by one gallery instance.
///
/// Every input change (images, viewport, container width, a measurement)
/// recomputes the whole layout.
#[derive(Clone, Debug)]
pub struct Gallery {
    images: Vec<GalleryImage>,
    config: MasonryConfig,
    breakpoints: Breakpoints,
    viewport_width: Option<f32>,
    probes: AspectProbes,
    layout: MasonryLayout,
    lightbox: Lightbox,
}

impl Gallery {
    /// Build a gallery and compute its first layout.
    ///
    /// A container too narrow for `config.columns` gets fewer columns; only a
    /// zero column count is an error.
    pub fn new(images: Vec<GalleryImage>, config: MasonryConfig) -> Result<Self, LayoutError> {
        let layout = fit_layout(&images, &config)?;
        let lightbox = Lightbox::new(images.len());
        Ok(Self {
            images,
            config,
            breakpoints: Breakpoints::default(),
            viewport_width: None,
            probes: AspectProbes::new(),
            layout,
            lightbox,
        })
    }

    /// Replace the breakpoints and re-layout.
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Result<Self, LayoutError> {
        self.layout =
            self.layout_for(&self.images, &self.config, breakpoints, self.viewport_width)?;
        self.breakpoints = breakpoints;
        Ok(self)
    }

    /// Current images, with any measured ratios filled in.
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// Layout of [`images`](Self::images). Always places every image once.
    pub fn layout(&self) -> &MasonryLayout {
        &self.layout
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Column count after applying breakpoints to the requested count.
    ///
    /// The layout may use fewer when the container is too narrow.
    pub fn effective_columns(&self) -> usize {
        effective_columns(&self.config, self.breakpoints, self.viewport_width)
    }

    /// Viewport resized.
    ///
    /// On error nothing changes.
    pub fn set_viewport_width(&mut self, width: f32) -> Result<(), LayoutError> {
        self.layout =
            self.layout_for(&self.images, &self.config, self.breakpoints, Some(width))?;
        self.viewport_width = Some(width);
        Ok(())
    }

    /// Container measured or resized.
    ///
    /// On error nothing changes.
    pub fn set_container_width(&mut self, width: f32) -> Result<(), LayoutError> {
        let config = MasonryConfig {
            container_width: Some(width),
            ..self.config
        };
        self.layout =
            self.layout_for(&self.images, &config, self.breakpoints, self.viewport_width)?;
        self.config = config;
        Ok(())
    }

    /// Swap the image list. Closes the lightbox; measurements for images that
    /// are still present are kept.
    ///
    /// On error nothing changes.
    pub fn set_images(&mut self, mut images: Vec<GalleryImage>) -> Result<(), LayoutError> {
        self.probes.apply(&mut images);
        self.layout =
            self.layout_for(&images, &self.config, self.breakpoints, self.viewport_width)?;
        self.lightbox = Lightbox::new(images.len());
        self.images = images;
        Ok(())
    }

    /// Start measuring image `index`. `None` when out of range.
    pub fn begin_probe(&mut self, index: usize) -> Option<ProbeTicket> {
        let source = &self.images.get(index)?.source;
        Some(self.probes.begin(source))
    }

    /// Deliver a measurement. Re-layouts when it was applied.
    pub fn complete_probe(
        &mut self,
        ticket: &ProbeTicket,
        outcome: ProbeOutcome,
    ) -> Result<ProbeUpdate, LayoutError> {
        let update = self.probes.complete(ticket, outcome);
        if update.is_applied() && self.probes.apply(&mut self.images) > 0 {
            self.relayout()?;
        }
        Ok(update)
    }

    /// The gallery is going away; late measurements become no-ops.
    pub fn teardown(&mut self) {
        self.probes.teardown();
        self.lightbox.close();
    }

    /// Open the lightbox on image `index`. Returns false when out of range.
    pub fn open(&mut self, index: usize) -> bool {
        self.lightbox.open(index)
    }

    pub fn close(&mut self) {
        self.lightbox.close();
    }

    /// Next image, wrapping to the first.
    pub fn next(&mut self) {
        self.lightbox.next();
    }

    /// Previous image, wrapping to the last.
    pub fn previous(&mut self) {
        self.lightbox.previous();
    }

    /// Image shown in the lightbox.
    pub fn selected_image(&self) -> Option<&GalleryImage> {
        self.lightbox.selected().and_then(|i| self.images.get(i))
    }

    /// Keyboard handling while the lightbox is open. Returns whether the key
    /// was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.lightbox.is_open() {
            return false;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.previous(),
            Key::Other => return false,
        }
        true
    }

    fn relayout(&mut self) -> Result<(), LayoutError> {
        self.layout = self.layout_for(
            &self.images,
            &self.config,
            self.breakpoints,
            self.viewport_width,
        )?;
        Ok(())
    }

    fn layout_for(
        &self,
        images: &[GalleryImage],
        config: &MasonryConfig,
        breakpoints: Breakpoints,
        viewport_width: Option<f32>,
    ) -> Result<MasonryLayout, LayoutError> {
        let config = MasonryConfig {
            columns: effective_columns(config, breakpoints, viewport_width),
            ..*config
        };
        fit_layout(images, &config)
    }
}

fn effective_columns(
    config: &MasonryConfig,
    breakpoints: Breakpoints,
    viewport_width: Option<f32>,
) -> usize {
    match viewport_width {
        Some(w) => breakpoints.columns_for_viewport(config.columns, w),
        None => config.columns,
    }
}

/// Lay out with `config.columns`, dropping columns while the gaps leave no
/// room. One column always fits, since the container width is positive.
fn fit_layout(
    images: &[GalleryImage],
    config: &MasonryConfig,
) -> Result<MasonryLayout, LayoutError> {
    let mut columns = config.columns.min(masonry::MAX_COLUMNS);
    loop {
        let attempt = MasonryConfig { columns, ..*config };
        match masonry::layout(images, &attempt) {
            Err(LayoutError::ColumnWidthNotPositive) if columns > 1 => {
                tracing::trace!(columns, "container too narrow, dropping a column");
                columns -= 1;
            }
            result => return result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> Gallery {
        let images = (0..n)
            .map(|i| GalleryImage::new(alloc::format!("img{i}.jpg"), alloc::format!("Image {i}")))
            .collect();
        Gallery::new(images, MasonryConfig::new(3).gap(0.0).container_width(900.0)).unwrap()
    }

    #[test]
    fn initial_layout_uses_square_placeholders() {
        let g = gallery(4);
        assert_eq!(g.layout().column_width, 300.0);
        assert_eq!(g.layout().len(), 4);
        assert_eq!(g.layout().placement(3).unwrap().height, 300.0);
    }

    #[test]
    fn viewport_changes_column_count() {
        let mut g = gallery(6);
        g.set_viewport_width(500.0).unwrap();
        assert_eq!(g.layout().columns.len(), 1);
        g.set_viewport_width(900.0).unwrap();
        assert_eq!(g.layout().columns.len(), 2);
        g.set_viewport_width(1400.0).unwrap();
        assert_eq!(g.layout().columns.len(), 3);
    }

    #[test]
    fn probe_completion_repacks() {
        let mut g = gallery(2);
        let t = g.begin_probe(0).unwrap();
        let u = g
            .complete_probe(&t, ProbeOutcome::Loaded { width: 600, height: 200 })
            .unwrap();
        assert!(u.is_applied());
        assert_eq!(g.images()[0].aspect_ratio, Some(3.0));
        assert_eq!(g.layout().placement(0).unwrap().height, 100.0);
    }

    #[test]
    fn late_probe_after_teardown_is_ignored() {
        let mut g = gallery(2);
        let t = g.begin_probe(1).unwrap();
        g.teardown();
        let before = g.layout().clone();
        let u = g
            .complete_probe(&t, ProbeOutcome::Loaded { width: 600, height: 200 })
            .unwrap();
        assert_eq!(u, ProbeUpdate::Cancelled);
        assert_eq!(g.layout(), &before);
        assert_eq!(g.images()[1].aspect_ratio, None);
    }

    #[test]
    fn begin_probe_out_of_range() {
        assert!(gallery(2).begin_probe(2).is_none());
    }

    #[test]
    fn set_images_keeps_measurements() {
        let mut g = gallery(2);
        let t = g.begin_probe(1).unwrap();
        g.complete_probe(&t, ProbeOutcome::Loaded { width: 2, height: 1 })
            .unwrap();
        g.set_images(alloc::vec![GalleryImage::new("img1.jpg", "again")])
            .unwrap();
        assert_eq!(g.images()[0].aspect_ratio, Some(2.0));
        assert_eq!(g.layout().len(), 1);
    }

    #[test]
    fn narrow_container_drops_columns() {
        let images = (0..3)
            .map(|i| GalleryImage::new(alloc::format!("img{i}.jpg"), ""))
            .collect();
        let config = MasonryConfig::new(3).gap(16.0).container_width(900.0);
        let mut g = Gallery::new(images, config).unwrap();

        // 3 columns need 32px of gaps; 2 leave 2px each.
        g.set_container_width(20.0).unwrap();
        assert_eq!(g.layout().columns.len(), 2);
        assert_eq!(g.layout().column_width, 2.0);
        assert_eq!(g.layout().len(), 3);

        g.set_container_width(10.0).unwrap();
        assert_eq!(g.layout().columns.len(), 1);
        assert_eq!(g.layout().column_width, 10.0);

        g.set_images(alloc::vec![GalleryImage::new("solo.jpg", "")]).unwrap();
        assert_eq!(g.images().len(), g.layout().len());

        g.set_container_width(900.0).unwrap();
        assert_eq!(g.layout().columns.len(), 3);
    }

    #[test]
    fn narrow_container_at_construction() {
        let g = Gallery::new(
            alloc::vec![GalleryImage::new("a.jpg", "")],
            MasonryConfig::new(4).gap(100.0).container_width(50.0),
        )
        .unwrap();
        assert_eq!(g.layout().columns.len(), 1);
        assert_eq!(g.effective_columns(), 4);
    }

    #[test]
    fn zero_columns_still_rejected() {
        let err = Gallery::new(alloc::vec![], MasonryConfig::new(0)).unwrap_err();
        assert_eq!(err, LayoutError::ZeroColumns);
    }

    #[test]
    fn layout_always_covers_images() {
        let mut g = gallery(5);
        for width in [900.0, 1.0, 0.0, f32::NAN, 640.0] {
            g.set_container_width(width).unwrap();
            g.set_viewport_width(width).unwrap();
            assert_eq!(g.images().len(), g.layout().len(), "width {width}");
        }
    }

    // ── lightbox ────────────────────────────────────────────────────────

    #[test]
    fn lightbox_wraps_both_ways() {
        let mut g = gallery(3);
        assert!(g.open(2));
        g.next();
        assert_eq!(g.lightbox().selected(), Some(0));
        g.previous();
        assert_eq!(g.lightbox().selected(), Some(2));
        assert_eq!(g.lightbox().counter().as_deref(), Some("3 / 3"));
    }

    #[test]
    fn lightbox_rejects_out_of_range() {
        let mut g = gallery(3);
        assert!(!g.open(3));
        assert!(!g.lightbox().is_open());
        assert_eq!(g.lightbox().counter(), None);
    }

    #[test]
    fn lightbox_keys() {
        let mut g = gallery(3);
        assert!(!g.handle_key(Key::Escape));
        g.open(0);
        assert!(g.handle_key(Key::ArrowLeft));
        assert_eq!(g.selected_image().unwrap().source, "img2.jpg");
        assert!(g.handle_key(Key::ArrowRight));
        assert_eq!(g.lightbox().selected(), Some(0));
        assert!(!g.handle_key(Key::Other));
        assert!(g.handle_key(Key::Escape));
        assert!(!g.lightbox().is_open());
    }

    #[test]
    fn single_image_has_no_navigation() {
        let mut g = gallery(1);
        assert!(!g.lightbox().has_navigation());
        g.open(0);
        g.next();
        assert_eq!(g.lightbox().selected(), Some(0));
    }
}
