//! Title and watermark geometry.
//!
//! Both text blocks are positioned before any label is placed, and their
//! padded bounding boxes become exclusion zones for the placement engine.

use serde::Serialize;

use crate::layout::font_metrics::TextStyle;
use crate::layout::geometry::Rect;
use crate::layout::CanvasSize;

/// Distance from the top edge to the top of the title text (reference canvas).
pub const TITLE_TEXT_TOP: f64 = 50.0;
/// Padding added around the title text to form its exclusion zone.
pub const TITLE_SAFETY_PADDING: f64 = 15.0;
/// The title never spans more than this fraction of the canvas width.
pub const TITLE_MAX_WIDTH_FRACTION: f64 = 0.9;
/// Long titles shrink down to this size and no further (reference canvas).
pub const TITLE_MIN_FONT_PX: f64 = 24.0;

pub const WATERMARK_TEXT: &str = "constellation.tech";
/// Gap between the watermark text and the bottom/right canvas edges.
pub const WATERMARK_MARGIN: f64 = 20.0;
pub const WATERMARK_PADDING: f64 = 5.0;

/// Final position of the title text. `zone` is the padded exclusion box.
#[derive(Debug, Clone, Serialize)]
pub struct TitleLayout {
    pub text: String,
    pub style: TextStyle,
    pub center_x: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub zone: Rect,
}

#[derive(Debug, Clone, Serialize)]
pub struct WatermarkLayout {
    pub text: &'static str,
    pub style: TextStyle,
    pub x: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub zone: Rect,
}

/// Ink extent of rendered text.
pub trait TextMeasurer {
    /// Bounds of `text` drawn with `style`, horizontally centered on `x = 0`,
    /// with the top of its line box at `y = 0`. `None` when no face can draw it.
    fn ink_bounds(&self, text: &str, style: &TextStyle) -> Option<Rect>;
}

/// Centers `text` horizontally near the top edge, shrinking the font when it
/// would span more than `TITLE_MAX_WIDTH_FRACTION` of the canvas.
///
/// The exclusion zone covers both the metric-table line box and the ink
/// reported by `measurer`, plus `TITLE_SAFETY_PADDING`.
pub fn layout_title(
    text: &str,
    style: TextStyle,
    canvas: CanvasSize,
    measurer: &dyn TextMeasurer,
) -> TitleLayout {
    let scale = canvas.scale();
    let max_width = f64::from(canvas.width) * TITLE_MAX_WIDTH_FRACTION;

    let mut style = style;
    let mut extent = title_extent(text, &style, measurer);
    if extent.width > max_width {
        let fitted = (style.size_px * max_width / extent.width).max(TITLE_MIN_FONT_PX * scale);
        style = style.with_size(fitted);
        extent = title_extent(text, &style, measurer);
    }

    let (width, height) = style.measure(text);
    let center_x = f64::from(canvas.width) / 2.0;
    let top = TITLE_TEXT_TOP * scale;
    let zone = Rect::new(
        center_x + extent.x,
        top + extent.y,
        extent.width,
        extent.height,
    )
    .inflate(TITLE_SAFETY_PADDING * scale);

    TitleLayout {
        text: text.to_string(),
        style,
        center_x,
        top,
        width,
        height,
        zone,
    }
}

/// Line box and ink, relative to the horizontal center and line top.
fn title_extent(text: &str, style: &TextStyle, measurer: &dyn TextMeasurer) -> Rect {
    let (width, height) = style.measure(text);
    let line = Rect::new(-width / 2.0, 0.0, width, height);
    match measurer.ink_bounds(text, style) {
        Some(ink) => line.union(&ink),
        None => line,
    }
}

/// Measurer with no rasterizer behind it: zones fall back to the line box.
#[cfg(test)]
pub(crate) struct LineBoxOnly;

#[cfg(test)]
impl TextMeasurer for LineBoxOnly {
    fn ink_bounds(&self, _text: &str, _style: &TextStyle) -> Option<Rect> {
        None
    }
}

/// Anchors the watermark in the bottom-right corner.
pub fn layout_watermark(style: TextStyle, canvas: CanvasSize) -> WatermarkLayout {
    let scale = canvas.scale();
    let (width, height) = style.measure(WATERMARK_TEXT);
    let margin = WATERMARK_MARGIN * scale;
    let x = f64::from(canvas.width) - width - margin;
    let top = f64::from(canvas.height) - height - margin;

    WatermarkLayout {
        text: WATERMARK_TEXT,
        style,
        x,
        top,
        width,
        height,
        zone: Rect::new(x, top, width, height).inflate(WATERMARK_PADDING * scale),
    }
}
