// Overlay layout: geometry primitives, text metrics, title/watermark zones,
// and the sector-based label placement engine.
// Everything here is synchronous and CPU-bound; callers run it inside
// tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod geometry;
pub mod placement;
pub mod zones;

use serde::{Deserialize, Serialize};

pub use font_metrics::{FontFamily, TextStyle};
pub use geometry::{Point, Rect};
pub use placement::{Label, LabelPlacer, LabelRequest, StarGraph};
pub use zones::{layout_title, layout_watermark, TitleLayout, WatermarkLayout};

/// Side length of the canvas all reference constants are expressed in.
pub const REFERENCE_CANVAS_PX: f64 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Factor applied to every pixel constant tuned for the reference canvas.
    pub fn scale(&self) -> f64 {
        f64::from(self.width.min(self.height)) / REFERENCE_CANVAS_PX
    }
}

/// Font sizes and label padding for one canvas size.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Typography {
    pub title: TextStyle,
    pub label: TextStyle,
    pub watermark: TextStyle,
    pub label_padding_x: f64,
    pub label_padding_y: f64,
}

impl Typography {
    pub fn for_canvas(canvas: CanvasSize) -> Self {
        let s = canvas.scale();
        Self {
            title: TextStyle::new(FontFamily::MontserratBold, 40.0 * s),
            label: TextStyle::new(FontFamily::OpenSans, 16.0 * s),
            watermark: TextStyle::new(FontFamily::OpenSans, 12.0 * s),
            label_padding_x: 8.0 * s,
            label_padding_y: 4.0 * s,
        }
    }

    /// Size of the rounded box drawn behind a label.
    pub fn label_box_size(&self, text: &str) -> (f64, f64) {
        let (w, h) = self.label.measure(text);
        (w + 2.0 * self.label_padding_x, h + 2.0 * self.label_padding_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_scale_uses_shorter_side() {
        assert_eq!(CanvasSize::square(1024).scale(), 1.0);
        let wide = CanvasSize {
            width: 2048,
            height: 512,
        };
        assert_eq!(wide.scale(), 0.5);
    }

    #[test]
    fn test_label_box_includes_padding() {
        let typo = Typography::for_canvas(CanvasSize::square(1024));
        let (text_w, text_h) = typo.label.measure("Docker");
        let (box_w, box_h) = typo.label_box_size("Docker");
        assert!((box_w - text_w - 16.0).abs() < 1e-9);
        assert!((box_h - text_h - 8.0).abs() < 1e-9);
    }
}
