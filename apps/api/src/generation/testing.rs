//! In-memory collaborators for orchestrator and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use bytes::Bytes;
use image::{Rgba, RgbaImage};

use crate::analysis::TechAnalyzer;
use crate::catalog::TemplateCatalog;
use crate::generation::orchestrator::Orchestrator;
use crate::imagegen::{BackgroundGenerator, ImageGenError, GENERATED_SIZE};
use crate::layout::CanvasSize;
use crate::quota::QuotaTracker;
use crate::render::{Compositor, OverlayRenderer, Renderer};
use crate::storage::{ImageStore, StorageError};

#[derive(Default)]
pub struct SolidBackground {
    calls: AtomicUsize,
}

impl SolidBackground {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BackgroundGenerator for SolidBackground {
    async fn generate(&self, _prompt: &str) -> Result<RgbaImage, ImageGenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RgbaImage::from_pixel(
            GENERATED_SIZE,
            GENERATED_SIZE,
            Rgba([25, 15, 50, 255]),
        ))
    }
}

pub struct FailingBackground;

#[async_trait]
impl BackgroundGenerator for FailingBackground {
    async fn generate(&self, _prompt: &str) -> Result<RgbaImage, ImageGenError> {
        Err(ImageGenError::Blank)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    uploads: Mutex<Vec<Bytes>>,
}

impl MemoryStore {
    pub fn uploads(&self) -> Vec<Bytes> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for MemoryStore {
    async fn upload_png(&self, png: Bytes) -> Result<String, StorageError> {
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push(png);
        Ok(format!("memory://constellations/{}.png", uploads.len()))
    }
}

pub struct FailingStore;

#[async_trait]
impl ImageStore for FailingStore {
    async fn upload_png(&self, _png: Bytes) -> Result<String, StorageError> {
        Err(StorageError::Upload {
            key: "constellations/test.png".into(),
            message: "bucket unavailable".into(),
        })
    }
}

/// Shared renderer; the font database is loaded once per test binary.
pub fn renderer() -> Arc<Renderer> {
    static RENDERER: OnceLock<Arc<Renderer>> = OnceLock::new();
    RENDERER
        .get_or_init(|| {
            Arc::new(Renderer::new(
                Compositor::procedural().unwrap(),
                OverlayRenderer::new(None),
            ))
        })
        .clone()
}

pub fn orchestrator(
    background: Arc<dyn BackgroundGenerator>,
    store: Arc<dyn ImageStore>,
    quota: Arc<QuotaTracker>,
) -> Orchestrator {
    Orchestrator::new(
        TechAnalyzer::new().unwrap(),
        TemplateCatalog::load().unwrap(),
        renderer(),
        background,
        store,
        quota,
        CanvasSize::square(1024),
    )
}
