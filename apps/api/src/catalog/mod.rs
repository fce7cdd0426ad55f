//! Constellation template store.
//!
//! The catalog is validated once at startup; a malformed template is a
//! configuration error and stops the process before it serves anything.

mod templates;

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::layout::placement::GraphError;
use crate::layout::{CanvasSize, Point, StarGraph, REFERENCE_CANVAS_PX};
use templates::{TemplateDef, TEMPLATE_DEFS};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("template catalog is empty")]
    Empty,

    #[error("duplicate template key '{0}'")]
    DuplicateKey(String),

    #[error("template '{0}' has no stars")]
    NoStars(String),

    #[error("template '{key}': star {index} at ({x}, {y}) lies outside the reference canvas")]
    StarOutOfBounds {
        key: String,
        index: usize,
        x: f64,
        y: f64,
    },

    #[error("template '{key}': {source}")]
    Graph {
        key: String,
        #[source]
        source: GraphError,
    },
}

#[derive(Debug, Clone)]
pub struct Template {
    pub key: &'static str,
    pub name: &'static str,
    graph: StarGraph,
}

impl Template {
    pub fn star_count(&self) -> usize {
        self.graph.len()
    }

    /// Reference-canvas graph.
    #[cfg(test)]
    pub fn graph(&self) -> &StarGraph {
        &self.graph
    }

    /// The first `star_count` stars, scaled onto `canvas`.
    pub fn for_canvas(&self, canvas: CanvasSize, star_count: usize) -> StarGraph {
        self.graph.truncated(star_count).scaled(canvas.scale())
    }
}

pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Loads and validates the built-in templates.
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Self::from_defs(TEMPLATE_DEFS)?;
        info!("Loaded {} constellation templates", catalog.templates.len());
        Ok(catalog)
    }

    fn from_defs(defs: &[TemplateDef]) -> Result<Self, CatalogError> {
        if defs.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut keys = HashSet::new();
        let mut templates = Vec::with_capacity(defs.len());
        for def in defs {
            if !keys.insert(def.key) {
                return Err(CatalogError::DuplicateKey(def.key.to_string()));
            }
            if def.stars.is_empty() {
                return Err(CatalogError::NoStars(def.key.to_string()));
            }
            for (index, &(x, y)) in def.stars.iter().enumerate() {
                let inside = (0.0..=REFERENCE_CANVAS_PX).contains(&x)
                    && (0.0..=REFERENCE_CANVAS_PX).contains(&y);
                if !inside {
                    return Err(CatalogError::StarOutOfBounds {
                        key: def.key.to_string(),
                        index,
                        x,
                        y,
                    });
                }
            }

            let stars = def.stars.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let graph =
                StarGraph::new(stars, def.edges.to_vec()).map_err(|source| CatalogError::Graph {
                    key: def.key.to_string(),
                    source,
                })?;
            templates.push(Template {
                key: def.key,
                name: def.name,
                graph,
            });
        }

        Ok(Self { templates })
    }

    #[cfg(test)]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.key == key)
    }

    /// Chooses a template for a profile with `technology_count` technologies.
    ///
    /// Eligible templates have no more stars than technologies (the smallest
    /// template when none qualifies). Large profiles prefer large templates:
    /// 10+ technologies prefer 8+ stars, 5–9 prefer 5+. The pick among the
    /// remaining candidates is uniform over `rng`.
    pub fn select<R: Rng>(&self, technology_count: usize, rng: &mut R) -> &Template {
        let mut eligible: Vec<&Template> = self
            .templates
            .iter()
            .filter(|t| t.star_count() <= technology_count)
            .collect();

        if eligible.is_empty() {
            warn!("No template with <= {technology_count} stars, using smallest available");
            eligible.extend(self.templates.iter().min_by_key(|t| t.star_count()));
        }

        let preferred_min = match technology_count {
            10.. => Some(8),
            5..=9 => Some(5),
            _ => None,
        };
        if let Some(min_stars) = preferred_min {
            let preferred: Vec<&Template> = eligible
                .iter()
                .copied()
                .filter(|t| t.star_count() >= min_stars)
                .collect();
            if !preferred.is_empty() {
                debug!(
                    "Preferring {} templates with >= {min_stars} stars",
                    preferred.len()
                );
                eligible = preferred;
            }
        }

        // Non-empty: `from_defs` rejects an empty catalog.
        let chosen = eligible[rng.gen_range(0..eligible.len())];
        info!(
            "Selected template '{}' from {} eligible (tech_count={technology_count})",
            chosen.key,
            eligible.len()
        );
        chosen
    }
}
