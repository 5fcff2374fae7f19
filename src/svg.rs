//! SVG visualization of a masonry layout.
//!
//! Draws each column as a lane and each placed image as a labeled tile, so a
//! packing can be inspected without a browser.
//!
//! # Example
//!
//! ```
//! use zenfolio::{GalleryImage, MasonryConfig, masonry, svg::render_masonry_svg};
//!
//! let images = vec![
//!     GalleryImage::new("a.jpg", "Dune").aspect_ratio(1.5),
//!     GalleryImage::new("b.jpg", "Harbor").aspect_ratio(0.75),
//!     GalleryImage::new("c.jpg", "Kiln"),
//! ];
//! let config = MasonryConfig::new(2).container_width(600.0);
//! let layout = masonry::layout(&images, &config).unwrap();
//!
//! let svg = render_masonry_svg(&layout, &images);
//! assert!(svg.starts_with("<svg"));
//! ```

use alloc::format;
use alloc::string::String;

use crate::masonry::{GalleryImage, MasonryLayout};

/// Maximum drawn width of the gallery; wider layouts are scaled down.
const MAX_DRAW_W: f32 = 600.0;
/// Outer margin.
const MARGIN: f32 = 20.0;
/// Height of the caption line above the gallery.
const CAPTION_H: f32 = 24.0;

/// Render a complete SVG document for `layout`.
///
/// `images` supplies tile labels (alt text, falling back to the source); it
/// should be the slice the layout was computed from.
pub fn render_masonry_svg(layout: &MasonryLayout, images: &[GalleryImage]) -> String {
    let n = layout.columns.len();
    let content_w = if n == 0 {
        0.0
    } else {
        layout.column_x(n - 1) + layout.column_width
    };
    let content_h = layout.content_height();
    let scale = if content_w > MAX_DRAW_W {
        MAX_DRAW_W / content_w
    } else {
        1.0
    };

    let total_w = content_w * scale + 2.0 * MARGIN;
    let total_h = content_h * scale + 2.0 * MARGIN + CAPTION_H;

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .caption { font-size: 13px; font-weight: bold; fill: #333; }
  .label { font-size: 11px; fill: #fff; }
  .lane { fill: #f0f0f0; stroke: #ccc; stroke-width: 1; stroke-dasharray: 4,2; }
  .tile { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1; }
  @media (prefers-color-scheme: dark) {
    .caption { fill: #e0e0e0; }
    .lane { fill: #262626; stroke: #444; }
    .tile { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    svg.push_str(&format!(
        r#"<text x="{MARGIN}" y="{:.1}" class="caption">{}</text>"#,
        MARGIN + 12.0,
        escape_xml(&format!(
            "{} images, {} columns × {:.0}px, height {:.0}px",
            layout.len(),
            n,
            layout.column_width,
            content_h
        ))
    ));
    svg.push('\n');

    let top = MARGIN + CAPTION_H;
    for (c, column) in layout.columns.iter().enumerate() {
        let x = MARGIN + layout.column_x(c) * scale;
        let w = layout.column_width * scale;

        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{top:.1}" width="{w:.1}" height="{:.1}" class="lane"/>"#,
            content_h * scale
        ));
        svg.push('\n');

        for p in &column.items {
            let y = top + p.y * scale;
            let h = p.height * scale;
            svg.push_str(&format!(
                r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="tile" rx="2"/>"#
            ));
            svg.push('\n');

            let label = images
                .get(p.index)
                .map(|img| if img.alt.is_empty() { img.source.as_str() } else { img.alt.as_str() })
                .unwrap_or("");
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" class="label">{}</text>"#,
                x + 4.0,
                y + 14.0,
                escape_xml(&format!("#{} {label}", p.index))
            ));
            svg.push('\n');
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
