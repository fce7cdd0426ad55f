// CPU-bound image pass: composite stars and lines onto the background,
// place labels around the title and watermark zones, then rasterize the text
// overlay and encode PNG. `Renderer::render` is synchronous; the orchestrator
// runs it inside tokio::task::spawn_blocking.

pub mod compositor;
pub mod overlay;

use image::imageops::FilterType;
use image::RgbaImage;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tiny_skia::{ColorU8, IntSize, Pixmap};
use tracing::{debug, info};

use crate::layout::placement::GraphError;
use crate::layout::{
    layout_title, layout_watermark, CanvasSize, Label, LabelPlacer, LabelRequest, StarGraph,
    Typography,
};
pub use compositor::Compositor;
pub use overlay::{build_overlay_svg, OverlayRenderer};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot allocate {width}x{height} pixmap")]
    Allocation { width: u32, height: u32 },

    #[error("label placement failed: {0}")]
    Placement(#[from] GraphError),

    #[error("overlay SVG rejected: {0}")]
    Svg(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Everything one render pass needs, owned so it can move to a blocking thread.
pub struct RenderJob {
    pub background: RgbaImage,
    /// Star graph already scaled to `canvas`.
    pub graph: StarGraph,
    pub canvas: CanvasSize,
    pub title: String,
    pub labels: Vec<LabelRequest>,
    /// Seeds the per-star sprite choice.
    pub seed: u64,
}

#[derive(Debug)]
pub struct RenderOutput {
    pub png: Vec<u8>,
    /// One entry per requested label, in request order.
    pub labels: Vec<Label>,
    pub edge_crossings: usize,
}

impl RenderOutput {
    pub fn placed_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_placed()).count()
    }
}

pub struct Renderer {
    compositor: Compositor,
    overlay: OverlayRenderer,
}

impl Renderer {
    pub fn new(compositor: Compositor, overlay: OverlayRenderer) -> Self {
        Self {
            compositor,
            overlay,
        }
    }

    pub fn render(&self, job: RenderJob) -> Result<RenderOutput, RenderError> {
        let RenderJob {
            background,
            graph,
            canvas,
            title,
            labels,
            seed,
        } = job;
        let typography = Typography::for_canvas(canvas);

        let background = fit_to_canvas(background, canvas);
        let mut pixmap = pixmap_from_image(&background)?;

        let mut rng = StdRng::seed_from_u64(seed);
        self.compositor
            .compose(&mut pixmap, &graph, canvas.scale(), &mut rng)?;

        let title = layout_title(&title, typography.title, canvas, &self.overlay);
        let watermark = layout_watermark(typography.watermark, canvas);
        debug!(
            "Exclusion zones: title {:?}, watermark {:?}",
            title.zone, watermark.zone
        );

        let placer = LabelPlacer::new(&graph, canvas, &typography, title.zone, watermark.zone);
        let placed = placer.place(&labels)?;
        let edge_crossings = placer.count_edge_crossings(&placed);

        let svg = build_overlay_svg(canvas, &typography, &title, &watermark, &placed);
        self.overlay.draw(&mut pixmap, &svg)?;

        let png = pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))?;

        let output = RenderOutput {
            png,
            labels: placed,
            edge_crossings,
        };
        info!(
            "Rendered {}x{}: {}/{} labels placed, {} label/line crossings, {} bytes",
            canvas.width,
            canvas.height,
            output.placed_count(),
            output.labels.len(),
            edge_crossings,
            output.png.len()
        );
        Ok(output)
    }
}

fn fit_to_canvas(image: RgbaImage, canvas: CanvasSize) -> RgbaImage {
    if image.dimensions() == (canvas.width, canvas.height) {
        return image;
    }
    debug!(
        "Resizing background {}x{} -> {}x{}",
        image.width(),
        image.height(),
        canvas.width,
        canvas.height
    );
    image::imageops::resize(&image, canvas.width, canvas.height, FilterType::Lanczos3)
}

/// Copies a straight-alpha image into a premultiplied pixmap.
pub fn pixmap_from_image(image: &RgbaImage) -> Result<Pixmap, RenderError> {
    let (width, height) = image.dimensions();
    let allocation = RenderError::Allocation { width, height };
    let Some(size) = IntSize::from_wh(width, height) else {
        return Err(allocation);
    };

    let data = image
        .pixels()
        .flat_map(|p| {
            let [r, g, b, a] = p.0;
            let c = ColorU8::from_rgba(r, g, b, a).premultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    Pixmap::from_vec(data, size).ok_or(allocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TemplateCatalog;
    use crate::layout::geometry::rects_overlap;
    use image::Rgba;

    fn renderer() -> Renderer {
        Renderer::new(Compositor::procedural().unwrap(), OverlayRenderer::new(None))
    }

    fn nebula(side: u32) -> RgbaImage {
        RgbaImage::from_pixel(side, side, Rgba([20, 10, 40, 255]))
    }

    #[test]
    fn test_pixmap_from_image_premultiplies() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([200, 100, 50, 255]));
        img.put_pixel(1, 0, Rgba([200, 100, 50, 0]));
        let pixmap = pixmap_from_image(&img).unwrap();
        let opaque = pixmap.pixel(0, 0).unwrap();
        assert_eq!((opaque.red(), opaque.alpha()), (200, 255));
        let clear = pixmap.pixel(1, 0).unwrap();
        assert_eq!((clear.red(), clear.alpha()), (0, 0));
    }

    #[test]
    fn test_zero_sized_image_is_rejected() {
        assert!(matches!(
            pixmap_from_image(&RgbaImage::new(0, 0)),
            Err(RenderError::Allocation { .. })
        ));
    }

    #[test]
    fn test_render_orion_end_to_end() {
        let canvas = CanvasSize::square(1024);
        let catalog = TemplateCatalog::load().unwrap();
        let graph = catalog.get("orion").unwrap().for_canvas(canvas, 7);
        let names = ["Python", "Docker", "React", "PostgreSQL", "AWS", "Rust", "Go"];
        let labels = names
            .iter()
            .enumerate()
            .map(|(i, n)| LabelRequest::new(*n, i))
            .collect();

        let output = renderer()
            .render(RenderJob {
                background: nebula(1024),
                graph: graph.clone(),
                canvas,
                title: "The Cosmic Pillars of Code".into(),
                labels,
                seed: 42,
            })
            .unwrap();

        let decoded = image::load_from_memory(&output.png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1024, 1024));
        assert_eq!(output.labels.len(), 7);
        assert!(output.placed_count() > 0);

        let rects: Vec<_> = output.labels.iter().filter_map(|l| l.rect).collect();
        for (i, a) in rects.iter().enumerate() {
            assert!(a.fits_within(1024.0, 1024.0));
            for b in &rects[i + 1..] {
                assert!(!rects_overlap(a, b));
            }
        }
    }

    #[test]
    fn test_render_resizes_background_to_canvas() {
        let canvas = CanvasSize::square(512);
        let graph = StarGraph::new(
            vec![
                crate::layout::Point::new(150.0, 250.0),
                crate::layout::Point::new(350.0, 250.0),
            ],
            vec![(0, 1)],
        )
        .unwrap();
        let output = renderer()
            .render(RenderJob {
                background: nebula(1024),
                graph,
                canvas,
                title: "Small".into(),
                labels: vec![LabelRequest::new("Rust", 0)],
                seed: 1,
            })
            .unwrap();
        let decoded = image::load_from_memory(&output.png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (512, 512));
        assert_eq!(output.placed_count(), 1);
    }

    #[test]
    fn test_label_for_missing_star_is_an_error() {
        let graph = StarGraph::new(vec![crate::layout::Point::new(500.0, 500.0)], vec![]).unwrap();
        let err = renderer()
            .render(RenderJob {
                background: nebula(1024),
                graph,
                canvas: CanvasSize::square(1024),
                title: "T".into(),
                labels: vec![LabelRequest::new("Rust", 3)],
                seed: 0,
            })
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::Placement(GraphError::UnknownStar { star: 3, .. })
        ));
    }
}
