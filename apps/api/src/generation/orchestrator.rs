//! End-to-end constellation generation.
//!
//! Pipeline: extract → analyze → seed → title → prompt → quota → background →
//! template → star mapping → render (blocking thread) → upload.
//! Every collaborator failure surfaces as its own `GenerationError` variant.

use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::analysis::{TechAnalyzer, TechStats, Technology};
use crate::catalog::TemplateCatalog;
use crate::extraction::{extract_text, ExtractError};
use crate::imagegen::{BackgroundGenerator, ImageGenError};
use crate::layout::{CanvasSize, LabelRequest};
use crate::quota::{QuotaExceeded, QuotaTracker};
use crate::render::{RenderError, RenderJob, Renderer};
use crate::storage::{ImageStore, StorageError};
use crate::titles::{background_prompt, pick_title, seed_from_text};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Quota(#[from] QuotaExceeded),

    #[error(transparent)]
    ImageGen(#[from] ImageGenError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ConstellationResult {
    pub image_url: String,
    pub title: String,
    /// Display name of the constellation template.
    pub template: String,
    pub technologies: Vec<Technology>,
    pub stats: TechStats,
    /// Seconds.
    pub generation_time: f64,
    pub stars_mapped: usize,
    pub labels_placed: usize,
    /// Technologies whose label found no valid position.
    pub labels_skipped: Vec<String>,
    /// Placed labels that a connection line passes through.
    pub edge_crossings: usize,
}

pub struct Orchestrator {
    analyzer: TechAnalyzer,
    catalog: TemplateCatalog,
    renderer: Arc<Renderer>,
    background: Arc<dyn BackgroundGenerator>,
    store: Arc<dyn ImageStore>,
    quota: Arc<QuotaTracker>,
    canvas: CanvasSize,
}

impl Orchestrator {
    pub fn new(
        analyzer: TechAnalyzer,
        catalog: TemplateCatalog,
        renderer: Arc<Renderer>,
        background: Arc<dyn BackgroundGenerator>,
        store: Arc<dyn ImageStore>,
        quota: Arc<QuotaTracker>,
        canvas: CanvasSize,
    ) -> Self {
        Self {
            analyzer,
            catalog,
            renderer,
            background,
            store,
            quota,
            canvas,
        }
    }

    /// Runs the full pipeline on an uploaded résumé.
    pub async fn generate(
        &self,
        file: Bytes,
        filename: String,
    ) -> Result<ConstellationResult, GenerationError> {
        let start = Instant::now();
        info!("Starting constellation generation for '{filename}'");

        let result = self.run(file, filename, start).await;
        if let Err(e) = &result {
            error!(
                "Generation failed after {:.2}s: {e}",
                start.elapsed().as_secs_f64()
            );
        }
        result
    }

    async fn run(
        &self,
        file: Bytes,
        filename: String,
        start: Instant,
    ) -> Result<ConstellationResult, GenerationError> {
        let text = tokio::task::spawn_blocking(move || extract_text(&file, &filename))
            .await
            .map_err(|e| anyhow::anyhow!("spawn_blocking failed in text extraction: {e}"))??;
        self.generate_from_text(&text, start).await
    }

    async fn generate_from_text(
        &self,
        text: &str,
        start: Instant,
    ) -> Result<ConstellationResult, GenerationError> {
        let analysis = self.analyzer.analyze(text);
        info!(
            "Detected {} technologies (dominant: {:?})",
            analysis.stats.total_technologies, analysis.stats.dominant_category
        );

        let seed = seed_from_text(text);
        let mut rng = StdRng::seed_from_u64(seed);

        let title = pick_title(&analysis.stats, &mut rng).to_string();
        let prompt = background_prompt(analysis.stats.dominant_category);

        let quota = self.quota.try_consume()?;
        info!(
            "Quota: {}/{} used today",
            quota.current_count, quota.max_quota
        );

        let background = self.background.generate(&prompt).await?;

        let template = self.catalog.select(analysis.technologies.len(), &mut rng);
        let stars_mapped = analysis.technologies.len().min(template.star_count());
        let graph = template.for_canvas(self.canvas, stars_mapped);
        let labels: Vec<LabelRequest> = analysis
            .technologies
            .iter()
            .take(stars_mapped)
            .enumerate()
            .map(|(star, tech)| LabelRequest::new(tech.name.clone(), star))
            .collect();
        info!(
            "Template '{}': mapping {stars_mapped} technologies onto {} stars",
            template.name,
            template.star_count()
        );

        let renderer = Arc::clone(&self.renderer);
        let job = RenderJob {
            background,
            graph,
            canvas: self.canvas,
            title: title.clone(),
            labels,
            seed,
        };
        let rendered = tokio::task::spawn_blocking(move || renderer.render(job))
            .await
            .map_err(|e| anyhow::anyhow!("spawn_blocking failed in render pass: {e}"))??;

        let labels_placed = rendered.placed_count();
        let edge_crossings = rendered.edge_crossings;
        let labels_skipped: Vec<String> = rendered
            .labels
            .iter()
            .filter(|l| !l.is_placed())
            .map(|l| l.text.clone())
            .collect();

        let image_url = self.store.upload_png(Bytes::from(rendered.png)).await?;

        let generation_time = start.elapsed().as_secs_f64();
        info!(
            "Generation complete in {generation_time:.2}s: '{title}' on {} ({labels_placed}/{stars_mapped} labels)",
            template.name
        );

        Ok(ConstellationResult {
            image_url,
            title,
            template: template.name.to_string(),
            technologies: analysis.technologies,
            stats: analysis.stats,
            generation_time,
            stars_mapped,
            labels_placed,
            labels_skipped,
            edge_crossings,
        })
    }
}
