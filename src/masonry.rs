//! Masonry column packing for image galleries.
//!
//! Images are placed in input order, each into the column whose running
//! height is currently smallest (ties go to the lowest column index). The
//! result is deterministic for a given input order and configuration, and
//! is recomputed from scratch whenever an input changes.
//!
//! # Example
//!
//! ```
//! use zenfolio::{GalleryImage, MasonryConfig, masonry};
//!
//! let images = [
//!     GalleryImage::new("a.jpg", "A").aspect_ratio(2.0),
//!     GalleryImage::new("b.jpg", "B").aspect_ratio(4.0),
//!     GalleryImage::new("c.jpg", "C").aspect_ratio(2.5),
//! ];
//! let config = MasonryConfig::new(2).gap(0.0).container_width(400.0);
//! let layout = masonry::layout(&images, &config).unwrap();
//!
//! assert_eq!(layout.column_width, 200.0);
//! assert_eq!(layout.columns[0].height, 100.0);
//! assert_eq!(layout.columns[1].height, 130.0);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use num_traits::Float;

/// Container width assumed when the real width is not known yet.
pub const DEFAULT_CONTAINER_WIDTH: f32 = 1200.0;
/// Aspect ratio (width / height) used for images not yet measured, or whose
/// asset failed to load.
pub const DEFAULT_ASPECT_RATIO: f32 = 1.0;
/// Default number of columns.
pub const DEFAULT_COLUMNS: usize = 3;
/// Default gap between columns and between stacked images, in pixels.
pub const DEFAULT_GAP: f32 = 16.0;
/// Largest column count [`layout`] accepts.
pub const MAX_COLUMNS: usize = 64;

/// An image to place in the gallery.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalleryImage {
    /// Asset locator. Also the identity used for dimension probing.
    pub source: String,
    /// Accessible label.
    pub alt: String,
    /// Width / height. `None` until measured.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aspect_ratio: Option<f32>,
}

impl GalleryImage {
    /// An image whose aspect ratio is not known yet.
    pub fn new(source: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt: alt.into(),
            aspect_ratio: None,
        }
    }

    /// Set a known aspect ratio.
    pub fn aspect_ratio(mut self, ratio: f32) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    /// Ratio used for packing.
    ///
    /// Unknown, non-finite, and non-positive ratios all pack as
    /// [`DEFAULT_ASPECT_RATIO`]; the gallery re-packs once a measurement
    /// arrives.
    pub fn effective_aspect_ratio(&self) -> f32 {
        match self.aspect_ratio {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => DEFAULT_ASPECT_RATIO,
        }
    }
}

/// Masonry configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MasonryConfig {
    /// Column count. Must be at least 1.
    pub columns: usize,
    /// Gap between columns and between images in a column.
    pub gap: f32,
    /// Measured container width. `None` uses [`DEFAULT_CONTAINER_WIDTH`].
    pub container_width: Option<f32>,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            gap: DEFAULT_GAP,
            container_width: None,
        }
    }
}

impl MasonryConfig {
    /// Configuration with `columns` columns and default gap.
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Set the gap.
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the measured container width.
    pub fn container_width(mut self, width: f32) -> Self {
        self.container_width = Some(width);
        self
    }

    /// Container width, falling back to [`DEFAULT_CONTAINER_WIDTH`].
    pub fn effective_container_width(&self) -> f32 {
        match self.container_width {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => DEFAULT_CONTAINER_WIDTH,
        }
    }

    /// Pixel width of one column.
    pub fn column_width(&self) -> Result<f32, LayoutError> {
        if self.columns == 0 {
            return Err(LayoutError::ZeroColumns);
        }
        if self.columns > MAX_COLUMNS {
            return Err(LayoutError::TooManyColumns(self.columns));
        }
        let n = self.columns as f32;
        let gap = self.gap.max(0.0);
        let w = (self.effective_container_width() - gap * (n - 1.0)) / n;
        if !w.is_finite() || w <= 0.0 {
            return Err(LayoutError::ColumnWidthNotPositive);
        }
        Ok(w)
    }

    /// How many columns of at least `min_column_width` fit in `width`.
    /// Always in `1..=MAX_COLUMNS`.
    pub fn columns_for_width(width: f32, min_column_width: f32, gap: f32) -> usize {
        if !(width.is_finite() && min_column_width.is_finite()) || min_column_width <= 0.0 {
            return 1;
        }
        let gap = gap.max(0.0);
        let n = Float::floor((width + gap) / (min_column_width + gap));
        if n >= MAX_COLUMNS as f32 {
            MAX_COLUMNS
        } else if n >= 1.0 {
            n as usize
        } else {
            1
        }
    }
}

/// Viewport breakpoints for responsive column counts.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    /// Below this width: a single column.
    pub medium: f32,
    /// Below this width: at most two columns.
    pub wide: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium: 768.0,
            wide: 1024.0,
        }
    }
}

impl Breakpoints {
    /// Column count for a viewport width, given the requested count.
    ///
    /// Narrow → 1, medium → `min(2, requested)`, wide → `requested`.
    /// An unknown viewport (non-finite) keeps the requested count.
    pub fn columns_for_viewport(&self, requested: usize, viewport_width: f32) -> usize {
        let requested = requested.max(1);
        if !viewport_width.is_finite() {
            requested
        } else if viewport_width < self.medium {
            1
        } else if viewport_width < self.wide {
            requested.min(2)
        } else {
            requested
        }
    }
}

/// Where one image ended up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Index into the input image list.
    pub index: usize,
    /// Column the image was assigned to.
    pub column: usize,
    /// Top offset within the column.
    pub y: f32,
    /// Rendered height.
    pub height: f32,
}

/// One packed column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Column {
    /// Images top to bottom.
    pub items: Vec<Placement>,
    /// Content height: image heights plus the gaps between them.
    pub height: f32,
}

/// Result of [`layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct MasonryLayout {
    /// Pixel width of each column.
    pub column_width: f32,
    /// Gap between columns and between stacked images.
    pub gap: f32,
    /// Columns left to right. Always `config.columns` entries.
    pub columns: Vec<Column>,
}

impl MasonryLayout {
    /// Number of placed images.
    pub fn len(&self) -> usize {
        self.columns.iter().map(|c| c.items.len()).sum()
    }

    /// Whether no image was placed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Placement of input image `index`.
    pub fn placement(&self, index: usize) -> Option<&Placement> {
        self.columns
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|p| p.index == index)
    }

    /// Height of the tallest column.
    pub fn tallest(&self) -> f32 {
        self.columns.iter().map(|c| c.height).fold(0.0, f32::max)
    }

    /// Height of the shortest column.
    pub fn shortest(&self) -> f32 {
        self.columns
            .iter()
            .map(|c| c.height)
            .reduce(f32::min)
            .unwrap_or(0.0)
    }

    /// Left offset of column `column`.
    pub fn column_x(&self, column: usize) -> f32 {
        column as f32 * (self.column_width + self.gap)
    }

    /// Height the gallery container needs.
    pub fn content_height(&self) -> f32 {
        self.tallest()
    }
}

/// Layout error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Column count is zero.
    #[error("column count must be at least 1")]
    ZeroColumns,
    /// Column count is above [`MAX_COLUMNS`].
    #[error("column count {0} exceeds the maximum of {max}", max = MAX_COLUMNS)]
    TooManyColumns(usize),
    /// Gaps leave no room for columns.
    #[error("gaps leave no positive width for columns")]
    ColumnWidthNotPositive,
}

/// Pack `images` into columns.
pub fn layout(
    images: &[GalleryImage],
    config: &MasonryConfig,
) -> Result<MasonryLayout, LayoutError> {
    let column_width = config.column_width()?;
    let gap = config.gap.max(0.0);

    let mut columns: Vec<Column> = (0..config.columns).map(|_| Column::default()).collect();
    // Running totals include one trailing gap per image.
    let mut running = alloc::vec![0.0f32; config.columns];

    for (index, image) in images.iter().enumerate() {
        let height = column_width / image.effective_aspect_ratio();
        let column = shortest_column(&running);
        columns[column].items.push(Placement {
            index,
            column,
            y: running[column],
            height,
        });
        running[column] += height + gap;
    }

    for (col, total) in columns.iter_mut().zip(&running) {
        col.height = if col.items.is_empty() { 0.0 } else { total - gap };
    }

    tracing::debug!(
        images = images.len(),
        columns = config.columns,
        column_width,
        "masonry layout computed"
    );

    Ok(MasonryLayout {
        column_width,
        gap,
        columns,
    })
}

/// Index of the smallest running total; first wins on ties.
fn shortest_column(running: &[f32]) -> usize {
    let mut best = 0;
    for (i, &h) in running.iter().enumerate().skip(1) {
        if h < running[best] {
            best = i;
        }
    }
    best
}
