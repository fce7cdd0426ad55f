//! Stars and glowing connection lines, drawn straight onto the background.

use std::path::{Path, PathBuf};

use rand::Rng;
use tiny_skia::{
    BlendMode, FillRule, FilterQuality, LineCap, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};
use tracing::{debug, info, warn};

use super::RenderError;
use crate::layout::{Point, StarGraph};

/// Side of the procedural sprite on the reference canvas.
const PROCEDURAL_SPRITE_PX: u32 = 60;
const LINE_COLOR: (u8, u8, u8) = (255, 220, 150);

/// `(width, alpha)` per stroke, outermost first. Each pass overwrites the
/// previous one where they overlap, giving a bloom without a blur.
#[rustfmt::skip]
const GLOW_PASSES: [(f32, u8); 5] = [
    (8.0, 40),
    (6.0, 70),
    (4.0, 110),
    (3.0, 150),
    (2.0, 190),
];

pub struct Compositor {
    sprites: Vec<Pixmap>,
}

impl Compositor {
    /// Loads every `*.png` in `sprites_dir` (sorted by path), falling back to
    /// a single procedural sprite when the directory is absent or yields none.
    pub fn load(sprites_dir: Option<&Path>) -> Result<Self, RenderError> {
        let sprites = sprites_dir.map(load_sprites).unwrap_or_default();
        if sprites.is_empty() {
            info!("Using procedural star sprite");
            return Self::procedural();
        }
        info!("Loaded {} star sprites", sprites.len());
        Ok(Self { sprites })
    }

    pub fn procedural() -> Result<Self, RenderError> {
        Ok(Self {
            sprites: vec![procedural_sprite(PROCEDURAL_SPRITE_PX)?],
        })
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    /// Draws connection lines, then one sprite per star. Sprites are scaled by
    /// `scale` and picked with `rng`.
    pub fn compose<R: Rng>(
        &self,
        canvas: &mut Pixmap,
        graph: &StarGraph,
        scale: f64,
        rng: &mut R,
    ) -> Result<(), RenderError> {
        let stars = graph.stars();

        let mut lines = Pixmap::new(canvas.width(), canvas.height()).ok_or(
            RenderError::Allocation {
                width: canvas.width(),
                height: canvas.height(),
            },
        )?;
        let mut drawn = 0;
        for &(a, b) in graph.edges() {
            let (Some(&start), Some(&end)) = (stars.get(a), stars.get(b)) else {
                warn!(
                    "Invalid connection ({a}, {b}), skipping (only {} stars)",
                    stars.len()
                );
                continue;
            };
            draw_glow_line(&mut lines, start, end, scale as f32);
            drawn += 1;
        }
        canvas.draw_pixmap(
            0,
            0,
            lines.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        debug!("Drew {drawn} glowing connection lines");

        let s = scale as f32;
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        for star in stars {
            let sprite = &self.sprites[rng.gen_range(0..self.sprites.len())];
            let tx = star.x as f32 - sprite.width() as f32 * s / 2.0;
            let ty = star.y as f32 - sprite.height() as f32 * s / 2.0;
            canvas.draw_pixmap(
                0,
                0,
                sprite.as_ref(),
                &paint,
                Transform::from_row(s, 0.0, 0.0, s, tx, ty),
                None,
            );
        }
        debug!("Placed {} stars", stars.len());
        Ok(())
    }
}

fn load_sprites(dir: &Path) -> Vec<Pixmap> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read sprite directory {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        })
        .collect();
    paths.sort();

    paths
        .iter()
        .filter_map(|path| match Pixmap::load_png(path) {
            Ok(sprite) => {
                debug!("Loaded sprite: {}", path.display());
                Some(sprite)
            }
            Err(e) => {
                warn!("Failed to load {}: {e}", path.display());
                None
            }
        })
        .collect()
}

/// Soft white star: six faint rings, an inner glow and a solid core.
fn procedural_sprite(size: u32) -> Result<Pixmap, RenderError> {
    let mut sprite = Pixmap::new(size, size).ok_or(RenderError::Allocation {
        width: size,
        height: size,
    })?;
    let center = size as f32 / 2.0;

    let mut discs: Vec<(f32, u8)> = (1..=6u8)
        .rev()
        .map(|i| (f32::from(i) * 4.0, (255.0 * f32::from(i) / 6.0 * 0.2) as u8))
        .collect();
    discs.push((14.0, 200));
    discs.push((10.0, 255));

    for (radius, alpha) in discs {
        let Some(circle) = PathBuilder::from_circle(center, center, radius) else {
            continue;
        };
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, alpha);
        paint.anti_alias = true;
        paint.blend_mode = BlendMode::Source;
        sprite.fill_path(&circle, &paint, FillRule::Winding, Transform::identity(), None);
    }
    Ok(sprite)
}

fn draw_glow_line(layer: &mut Pixmap, start: Point, end: Point, scale: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(start.x as f32, start.y as f32);
    pb.line_to(end.x as f32, end.y as f32);
    let Some(path) = pb.finish() else {
        return;
    };

    let (r, g, b) = LINE_COLOR;
    for (width, alpha) in GLOW_PASSES {
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, alpha);
        paint.anti_alias = true;
        paint.blend_mode = BlendMode::Source;
        let stroke = Stroke {
            width: width * scale,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        layer.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}
