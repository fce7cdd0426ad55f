//! Text overlay: label boxes, the glowing title and the watermark.
//!
//! The overlay is built as an SVG document positioned entirely from the
//! layout results, then rasterized with resvg on top of the composited image.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use tiny_skia::{Pixmap, Transform};
use tracing::{debug, info};

use super::RenderError;
use crate::layout::zones::TextMeasurer;
use crate::layout::{
    CanvasSize, Label, Point, Rect, TextStyle, TitleLayout, Typography, WatermarkLayout,
};

const LABEL_CORNER_RADIUS: f64 = 6.0;
const LABEL_BOX_OPACITY: f64 = 0.55;
const TITLE_GLOW_COLOR: &str = "#ffe9b8";
const TITLE_GLOW_OPACITY: f64 = 0.08;
/// Ring radii (reference canvas) of the disc-sampled title glow.
const TITLE_GLOW_RADII: [f64; 3] = [2.0, 4.0, 6.0];
const TITLE_GLOW_SAMPLES_PER_RING: usize = 8;
const WATERMARK_OPACITY: f64 = 0.4;
const TITLE_PAINT: &str = r##"fill="#ffffff" stroke="#000000" stroke-width="1" paint-order="stroke""##;

pub struct OverlayRenderer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl OverlayRenderer {
    /// System fonts plus any faces found in `fonts_dir`.
    pub fn new(fonts_dir: Option<&Path>) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        if let Some(dir) = fonts_dir {
            db.load_fonts_dir(dir);
        }
        info!("Font database ready ({} faces)", db.len());
        Self { fontdb: Arc::new(db) }
    }

    pub fn draw(&self, pixmap: &mut Pixmap, svg: &str) -> Result<(), RenderError> {
        let tree = self.parse(svg)?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
        Ok(())
    }

    fn parse(&self, svg: &str) -> Result<usvg::Tree, RenderError> {
        let mut opt = usvg::Options::default();
        opt.fontdb = Arc::clone(&self.fontdb);
        usvg::Tree::from_str(svg, &opt).map_err(|e| RenderError::Svg(e.to_string()))
    }
}

/// Lays the text out with the same font database and paint as the final
/// overlay, so the bounds include the outline stroke.
impl TextMeasurer for OverlayRenderer {
    fn ink_bounds(&self, text: &str, style: &TextStyle) -> Option<Rect> {
        let mut svg = String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1">"#);
        push_text(
            &mut svg,
            text,
            style,
            Point::new(0.0, style.ascent_px()),
            "middle",
            TITLE_PAINT,
        );
        svg.push_str("</svg>");

        let tree = match self.parse(&svg) {
            Ok(tree) => tree,
            Err(e) => {
                debug!("Text measurement failed for '{text}': {e}");
                return None;
            }
        };
        // No face resolved: usvg drops the text node entirely.
        if !tree.root().has_children() {
            return None;
        }
        let b = tree.root().abs_stroke_bounding_box();
        let bounds = Rect::new(
            f64::from(b.x()),
            f64::from(b.y()),
            f64::from(b.width()),
            f64::from(b.height()),
        );
        (bounds.width > 0.0 && bounds.height > 0.0).then_some(bounds)
    }
}

pub fn build_overlay_svg(
    canvas: CanvasSize,
    typography: &Typography,
    title: &TitleLayout,
    watermark: &WatermarkLayout,
    labels: &[Label],
) -> String {
    let scale = canvas.scale();
    let (w, h) = (canvas.width, canvas.height);
    let mut svg = String::with_capacity(4096);

    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );

    let mut placed = 0;
    for label in labels {
        let Some(rect) = label.rect else { continue };
        placed += 1;
        let _ = write!(
            svg,
            r##"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" fill="#000000" fill-opacity="{LABEL_BOX_OPACITY}"/>"##,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            LABEL_CORNER_RADIUS * scale,
        );
        let baseline = rect.y + typography.label_padding_y + typography.label.ascent_px();
        push_text(
            &mut svg,
            &label.text,
            &typography.label,
            Point::new(rect.center().x, baseline),
            "middle",
            r##"fill="#ffffff""##,
        );
    }

    let title_baseline = title.top + title.style.ascent_px();
    let _ = write!(
        svg,
        r#"<g fill="{TITLE_GLOW_COLOR}" fill-opacity="{TITLE_GLOW_OPACITY}">"#
    );
    for offset in glow_offsets(scale) {
        push_text(
            &mut svg,
            &title.text,
            &title.style,
            Point::new(title.center_x + offset.x, title_baseline + offset.y),
            "middle",
            "",
        );
    }
    svg.push_str("</g>");
    push_text(
        &mut svg,
        &title.text,
        &title.style,
        Point::new(title.center_x, title_baseline),
        "middle",
        TITLE_PAINT,
    );

    push_text(
        &mut svg,
        watermark.text,
        &watermark.style,
        Point::new(watermark.x, watermark.top + watermark.style.ascent_px()),
        "start",
        &format!(r##"fill="#ffffff" fill-opacity="{WATERMARK_OPACITY}""##),
    );

    svg.push_str("</svg>");
    debug!("Overlay SVG: {placed} labels, {} bytes", svg.len());
    svg
}

/// Evenly spread sample offsets over concentric rings.
fn glow_offsets(scale: f64) -> Vec<Point> {
    let origin = Point::new(0.0, 0.0);
    let step = 360.0 / TITLE_GLOW_SAMPLES_PER_RING as f64;
    TITLE_GLOW_RADII
        .iter()
        .enumerate()
        .flat_map(|(ring, &radius)| {
            // Stagger alternate rings so samples do not line up radially.
            let phase = if ring % 2 == 1 { step / 2.0 } else { 0.0 };
            (0..TITLE_GLOW_SAMPLES_PER_RING).map(move |i| {
                origin.offset_polar(phase + i as f64 * step, radius * scale)
            })
        })
        .collect()
}

fn push_text(svg: &mut String, text: &str, style: &TextStyle, at: Point, anchor: &str, paint: &str) {
    let _ = write!(
        svg,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="{anchor}" font-family="{}" font-size="{:.2}" font-weight="{}" {paint}>{}</text>"#,
        at.x,
        at.y,
        style.family.svg_family(),
        style.size_px,
        style.family.svg_weight(),
        escape_xml(text),
    );
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
