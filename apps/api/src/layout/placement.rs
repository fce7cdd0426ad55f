//! Sector-based label placement.
//!
//! Every label gets twelve candidate positions, one per 30° sector around its
//! star, at a fixed radius. Each sector is scored by how much it crowds the
//! star's own edges, previously placed labels, the title/watermark zones and
//! nearby constellation lines. Sectors are tried best-first and the first
//! candidate box that stays on the canvas, overlaps nothing already occupied,
//! and keeps clear of other stars wins. Labels with no valid sector are left
//! unplaced rather than drawn on top of something.
//!
//! The engine is deterministic: ties are broken by angular clearance from the
//! star's edges, then by sector index, on quantized keys.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::layout::geometry::{
    angular_distance, direction_deg, point_in_rect, point_to_segment_distance, rects_overlap,
    segment_intersects_rect, Point, Rect,
};
use crate::layout::{CanvasSize, Typography};

pub const SECTOR_COUNT: usize = 12;
pub const SECTOR_SPAN_DEG: f64 = 360.0 / SECTOR_COUNT as f64;

const BASE_SCORE: f64 = 100.0;
const EDGE_ANGLE_WINDOW_DEG: f64 = 30.0;
const EDGE_PENALTY: f64 = 50.0;
const NEARBY_LABEL_PENALTY: f64 = 20.0;
const ZONE_PENALTY: f64 = 200.0;
const LINE_PENALTY: f64 = 30.0;
/// Sectors scoring below this are never tried.
const MIN_VIABLE_SCORE: f64 = -100.0;
/// Scores and clearances are compared as integers at this resolution.
const SORT_QUANTUM: f64 = 1e6;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("edge {edge} references star {star}, but only {star_count} stars exist")]
    EdgeOutOfRange {
        edge: usize,
        star: usize,
        star_count: usize,
    },

    #[error("edge {edge} connects star {star} to itself")]
    SelfLoop { edge: usize, star: usize },

    #[error("label '{text}' references star {star}, but only {star_count} stars exist")]
    UnknownStar {
        text: String,
        star: usize,
        star_count: usize,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Star graph
// ────────────────────────────────────────────────────────────────────────────

/// Star positions plus undirected edges between star indices.
/// Construction guarantees every edge endpoint is a valid index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarGraph {
    stars: Vec<Point>,
    edges: Vec<(usize, usize)>,
}

impl StarGraph {
    pub fn new(stars: Vec<Point>, edges: Vec<(usize, usize)>) -> Result<Self, GraphError> {
        let star_count = stars.len();
        for (edge, &(a, b)) in edges.iter().enumerate() {
            for star in [a, b] {
                if star >= star_count {
                    return Err(GraphError::EdgeOutOfRange {
                        edge,
                        star,
                        star_count,
                    });
                }
            }
            if a == b {
                return Err(GraphError::SelfLoop { edge, star: a });
            }
        }
        Ok(Self { stars, edges })
    }

    pub fn stars(&self) -> &[Point] {
        &self.stars
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Number of edges touching each star, indexed like `stars()`.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.stars.len()];
        for &(a, b) in &self.edges {
            degrees[a] += 1;
            degrees[b] += 1;
        }
        degrees
    }

    /// Directions from `star` toward each neighbor it shares an edge with.
    pub fn incident_directions(&self, star: usize) -> Vec<f64> {
        let origin = self.stars[star];
        self.edges
            .iter()
            .filter_map(|&(a, b)| {
                if a == star {
                    Some(b)
                } else if b == star {
                    Some(a)
                } else {
                    None
                }
            })
            .map(|other| direction_deg(origin, self.stars[other]))
            .collect()
    }

    pub fn scaled(&self, factor: f64) -> StarGraph {
        StarGraph {
            stars: self.stars.iter().map(|p| p.scaled(factor)).collect(),
            edges: self.edges.clone(),
        }
    }

    /// Keeps the first `count` stars and only the edges whose endpoints both survive.
    pub fn truncated(&self, count: usize) -> StarGraph {
        let count = count.min(self.stars.len());
        StarGraph {
            stars: self.stars[..count].to_vec(),
            edges: self
                .edges
                .iter()
                .copied()
                .filter(|&(a, b)| a < count && b < count)
                .collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Inputs / outputs
// ────────────────────────────────────────────────────────────────────────────

/// Distance thresholds, tuned for the 1024 px reference canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementParams {
    /// Radius at which candidate label centers sit around their star.
    pub min_distance_from_star: f64,
    /// A label center closer than this to any other star is rejected.
    pub min_distance_from_other_stars: f64,
    pub nearby_label_radius: f64,
    pub line_proximity: f64,
}

impl PlacementParams {
    pub const REFERENCE: PlacementParams = PlacementParams {
        min_distance_from_star: 60.0,
        min_distance_from_other_stars: 40.0,
        nearby_label_radius: 100.0,
        line_proximity: 30.0,
    };

    pub fn for_canvas(canvas: CanvasSize) -> Self {
        let s = canvas.scale();
        let r = Self::REFERENCE;
        Self {
            min_distance_from_star: r.min_distance_from_star * s,
            min_distance_from_other_stars: r.min_distance_from_other_stars * s,
            nearby_label_radius: r.nearby_label_radius * s,
            line_proximity: r.line_proximity * s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRequest {
    pub text: String,
    pub star_index: usize,
}

impl LabelRequest {
    pub fn new(text: impl Into<String>, star_index: usize) -> Self {
        Self {
            text: text.into(),
            star_index,
        }
    }
}

/// Placement outcome for one label. `rect` is `None` when no sector was valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub star_index: usize,
    pub rect: Option<Rect>,
}

impl Label {
    pub fn is_placed(&self) -> bool {
        self.rect.is_some()
    }
}

/// Score of one candidate sector for one star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorScore {
    pub sector: usize,
    pub angle_deg: f64,
    pub score: f64,
    /// Angular gap to the nearest incident edge; 180 for isolated stars.
    pub clearance_deg: f64,
}

fn quantize(value: f64) -> i64 {
    (value * SORT_QUANTUM).round() as i64
}

/// Label indices in the order they are placed: busiest stars first, ties in
/// input order.
pub fn processing_order(graph: &StarGraph, requests: &[LabelRequest]) -> Vec<usize> {
    let degrees = graph.degrees();
    let mut order: Vec<usize> = (0..requests.len()).collect();
    order.sort_by_key(|&i| Reverse(degrees[requests[i].star_index]));
    order
}

// ────────────────────────────────────────────────────────────────────────────
// Placement engine
// ────────────────────────────────────────────────────────────────────────────

pub struct LabelPlacer<'a> {
    graph: &'a StarGraph,
    canvas: CanvasSize,
    typography: &'a Typography,
    params: PlacementParams,
    title_zone: Rect,
    watermark_zone: Rect,
}

impl<'a> LabelPlacer<'a> {
    pub fn new(
        graph: &'a StarGraph,
        canvas: CanvasSize,
        typography: &'a Typography,
        title_zone: Rect,
        watermark_zone: Rect,
    ) -> Self {
        Self {
            graph,
            canvas,
            typography,
            params: PlacementParams::for_canvas(canvas),
            title_zone,
            watermark_zone,
        }
    }

    /// Places every label, returning results in input order.
    ///
    /// Fails only when a label references a star that does not exist.
    pub fn place(&self, requests: &[LabelRequest]) -> Result<Vec<Label>, GraphError> {
        let star_count = self.graph.len();
        if let Some(bad) = requests.iter().find(|r| r.star_index >= star_count) {
            return Err(GraphError::UnknownStar {
                text: bad.text.clone(),
                star: bad.star_index,
                star_count,
            });
        }

        let mut occupied = vec![self.title_zone, self.watermark_zone];
        let mut placed: Vec<Rect> = Vec::with_capacity(requests.len());
        let mut rects: Vec<Option<Rect>> = vec![None; requests.len()];

        for idx in processing_order(self.graph, requests) {
            let request = &requests[idx];
            let size = self.typography.label_box_size(&request.text);
            let sectors = self.score_sectors(request.star_index, &placed);

            let chosen = sectors
                .iter()
                .filter(|s| s.score >= MIN_VIABLE_SCORE)
                .find_map(|s| {
                    let rect = self.candidate_rect(request.star_index, s.angle_deg, size);
                    self.is_valid(request.star_index, &rect, &occupied)
                        .then_some((s.sector, rect))
                });

            match chosen {
                Some((sector, rect)) => {
                    debug!(
                        "Placed label '{}' for star {} in sector {sector}",
                        request.text, request.star_index
                    );
                    occupied.push(rect);
                    placed.push(rect);
                    rects[idx] = Some(rect);
                }
                None => warn!(
                    "No valid position for label '{}' (star {}), skipping",
                    request.text, request.star_index
                ),
            }
        }

        Ok(requests
            .iter()
            .zip(rects)
            .map(|(request, rect)| Label {
                text: request.text.clone(),
                star_index: request.star_index,
                rect,
            })
            .collect())
    }

    /// Scores all twelve sectors around `star_index`, best first.
    pub fn score_sectors(&self, star_index: usize, placed: &[Rect]) -> Vec<SectorScore> {
        let stars = self.graph.stars();
        let star = stars[star_index];
        let directions = self.graph.incident_directions(star_index);

        let mut scores: Vec<SectorScore> = (0..SECTOR_COUNT)
            .map(|sector| {
                let angle_deg = sector as f64 * SECTOR_SPAN_DEG;
                let probe = star.offset_polar(angle_deg, self.params.min_distance_from_star);
                let mut score = BASE_SCORE;

                for &dir in &directions {
                    let separation = angular_distance(angle_deg, dir);
                    if separation < EDGE_ANGLE_WINDOW_DEG {
                        score -= EDGE_PENALTY * (1.0 - separation / EDGE_ANGLE_WINDOW_DEG);
                    }
                }

                let nearby = placed
                    .iter()
                    .filter(|r| r.center().distance(probe) < self.params.nearby_label_radius)
                    .count();
                score -= NEARBY_LABEL_PENALTY * nearby as f64;

                if point_in_rect(probe, &self.title_zone) {
                    score -= ZONE_PENALTY;
                }
                if point_in_rect(probe, &self.watermark_zone) {
                    score -= ZONE_PENALTY;
                }

                for &(a, b) in self.graph.edges() {
                    let d = point_to_segment_distance(probe, stars[a], stars[b]);
                    if d < self.params.line_proximity {
                        score -= LINE_PENALTY * (1.0 - d / self.params.line_proximity);
                    }
                }

                let clearance_deg = directions
                    .iter()
                    .map(|&dir| angular_distance(angle_deg, dir))
                    .fold(180.0, f64::min);

                SectorScore {
                    sector,
                    angle_deg,
                    score,
                    clearance_deg,
                }
            })
            .collect();

        scores.sort_by_key(|s| {
            (
                Reverse(quantize(s.score)),
                Reverse(quantize(s.clearance_deg)),
                s.sector,
            )
        });
        scores
    }

    fn candidate_rect(&self, star_index: usize, angle_deg: f64, size: (f64, f64)) -> Rect {
        let center = self.graph.stars()[star_index]
            .offset_polar(angle_deg, self.params.min_distance_from_star);
        Rect::centered_at(center, size.0, size.1)
    }

    fn is_valid(&self, star_index: usize, rect: &Rect, occupied: &[Rect]) -> bool {
        if !rect.fits_within(f64::from(self.canvas.width), f64::from(self.canvas.height)) {
            return false;
        }
        if occupied.iter().any(|o| rects_overlap(rect, o)) {
            return false;
        }
        let center = rect.center();
        self.graph
            .stars()
            .iter()
            .enumerate()
            .all(|(i, s)| i == star_index || s.distance(center) >= self.params.min_distance_from_other_stars)
    }

    /// Number of placed labels whose box is crossed by some constellation line
    /// not attached to the label's own star.
    pub fn count_edge_crossings(&self, labels: &[Label]) -> usize {
        let stars = self.graph.stars();
        labels
            .iter()
            .filter_map(|l| l.rect.map(|r| (l.star_index, r)))
            .filter(|(star, rect)| {
                self.graph.edges().iter().any(|&(a, b)| {
                    a != *star && b != *star && segment_intersects_rect(stars[a], stars[b], rect)
                })
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::zones::{layout_title, layout_watermark, LineBoxOnly};

    fn canvas() -> CanvasSize {
        CanvasSize::square(1024)
    }

    fn typography() -> Typography {
        Typography::for_canvas(canvas())
    }

    fn zones(typo: &Typography) -> (Rect, Rect) {
        (
            layout_title("The Constellation of Code", typo.title, canvas(), &LineBoxOnly).zone,
            layout_watermark(typo.watermark, canvas()).zone,
        )
    }

    fn graph(stars: &[(f64, f64)], edges: &[(usize, usize)]) -> StarGraph {
        StarGraph::new(
            stars.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            edges.to_vec(),
        )
        .expect("valid graph")
    }

    fn assert_invariants(graph: &StarGraph, labels: &[Label], title: Rect, watermark: Rect) {
        let placed: Vec<(usize, Rect)> = labels
            .iter()
            .filter_map(|l| l.rect.map(|r| (l.star_index, r)))
            .collect();
        for (i, (star, rect)) in placed.iter().enumerate() {
            assert!(rect.fits_within(1024.0, 1024.0), "label {i} leaves canvas");
            assert!(!rects_overlap(rect, &title), "label {i} overlaps title");
            assert!(!rects_overlap(rect, &watermark), "label {i} overlaps watermark");
            for (j, (_, other)) in placed.iter().enumerate() {
                if i != j {
                    assert!(!rects_overlap(rect, other), "labels {i} and {j} overlap");
                }
            }
            for (k, s) in graph.stars().iter().enumerate() {
                if k != *star {
                    assert!(s.distance(rect.center()) >= 40.0, "label {i} too close to star {k}");
                }
            }
        }
    }

    #[test]
    fn test_graph_rejects_out_of_range_edge() {
        let err = StarGraph::new(vec![Point::new(0.0, 0.0)], vec![(0, 3)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::EdgeOutOfRange {
                edge: 0,
                star: 3,
                star_count: 1
            }
        );
    }

    #[test]
    fn test_graph_rejects_self_loop() {
        let err = StarGraph::new(vec![Point::new(0.0, 0.0)], vec![(0, 0)]).unwrap_err();
        assert_eq!(err, GraphError::SelfLoop { edge: 0, star: 0 });
    }

    #[test]
    fn test_truncated_drops_dangling_edges() {
        let g = graph(
            &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)],
            &[(0, 1), (1, 2), (2, 3), (0, 3)],
        );
        let t = g.truncated(3);
        assert_eq!(t.len(), 3);
        assert_eq!(t.edges(), &[(0, 1), (1, 2)]);
        assert_eq!(g.truncated(10).len(), 4);
    }

    #[test]
    fn test_processing_order_busiest_star_first() {
        // Star 1 has degree 2, the others degree 1.
        let g = graph(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)], &[(0, 1), (1, 2)]);
        let requests = vec![
            LabelRequest::new("A", 0),
            LabelRequest::new("B", 1),
            LabelRequest::new("C", 2),
        ];
        assert_eq!(processing_order(&g, &requests), vec![1, 0, 2]);
    }

    #[test]
    fn test_isolated_star_takes_sector_zero() {
        let typo = typography();
        let (title, watermark) = zones(&typo);
        let g = graph(&[(512.0, 512.0)], &[]);
        let placer = LabelPlacer::new(&g, canvas(), &typo, title, watermark);
        let labels = placer.place(&[LabelRequest::new("Python", 0)]).unwrap();

        let rect = labels[0].rect.expect("label should be placed");
        let c = rect.center();
        assert!((c.x - 572.0).abs() < 1e-6, "center x {}", c.x);
        assert!((c.y - 512.0).abs() < 1e-6, "center y {}", c.y);
    }

    #[test]
    fn test_single_edge_prefers_widest_clear_sector() {
        let typo = typography();
        let (title, watermark) = zones(&typo);
        let g = graph(&[(512.0, 512.0), (700.0, 512.0)], &[(0, 1)]);
        let placer = LabelPlacer::new(&g, canvas(), &typo, title, watermark);
        let sectors = placer.score_sectors(0, &[]);

        // Sector 0 points straight along the edge: edge and line penalties.
        let toward_edge = sectors.iter().find(|s| s.sector == 0).unwrap();
        assert!((toward_edge.score - 20.0).abs() < 1e-9);
        // Sector 6 sits on the line's extension: line penalty only.
        let behind = sectors.iter().find(|s| s.sector == 6).unwrap();
        assert!((behind.score - 70.0).abs() < 1e-9);
        // 150° and 210° both score 100 with 150° clearance; lower index wins.
        assert_eq!(sectors[0].sector, 5);
        assert_eq!(sectors[1].sector, 7);
    }

    #[test]
    fn test_triangle_labels_point_outward() {
        let typo = typography();
        let (title, watermark) = zones(&typo);
        let g = graph(
            &[(512.0, 400.0), (362.0, 660.0), (662.0, 660.0)],
            &[(0, 1), (1, 2), (2, 0)],
        );
        let requests = vec![
            LabelRequest::new("Rust", 0),
            LabelRequest::new("Docker", 1),
            LabelRequest::new("PostgreSQL", 2),
        ];
        let labels = LabelPlacer::new(&g, canvas(), &typo, title, watermark)
            .place(&requests)
            .unwrap();

        let centroid = Point::new((512.0 + 362.0 + 662.0) / 3.0, (400.0 + 660.0 + 660.0) / 3.0);
        for label in &labels {
            let rect = label.rect.expect("every triangle label should be placed");
            let star = g.stars()[label.star_index];
            let outward = (star.x - centroid.x, star.y - centroid.y);
            let offset = (rect.center().x - star.x, rect.center().y - star.y);
            assert!(
                outward.0 * offset.0 + outward.1 * offset.1 > 0.0,
                "label {} points inward",
                label.text
            );
        }
        assert_invariants(&g, &labels, title, watermark);
    }

    #[test]
    fn test_crowded_star_is_skipped() {
        let typo = typography();
        let (title, watermark) = zones(&typo);
        let mut stars = vec![(512.0, 512.0)];
        for k in 0..8 {
            let p = Point::new(512.0, 512.0).offset_polar(k as f64 * 45.0, 60.0);
            stars.push((p.x, p.y));
        }
        stars.extend([(150.0, 850.0), (850.0, 300.0), (150.0, 300.0)]);
        let g = graph(&stars, &[]);
        let requests: Vec<LabelRequest> = (0..12)
            .map(|i| LabelRequest::new(format!("Tech{i}"), i))
            .collect();

        let labels = LabelPlacer::new(&g, canvas(), &typo, title, watermark)
            .place(&requests)
            .unwrap();

        assert_eq!(labels.len(), 12);
        assert!(labels[0].rect.is_none(), "center star has no valid sector");
        assert!(labels[9].is_placed() && labels[10].is_placed() && labels[11].is_placed());
        assert_invariants(&g, &labels, title, watermark);
    }

    #[test]
    fn test_hub_with_eight_edges() {
        let typo = typography();
        let (title, watermark) = zones(&typo);
        let hub = Point::new(512.0, 512.0);
        let mut stars = vec![(hub.x, hub.y)];
        for k in 0..8 {
            let p = hub.offset_polar(k as f64 * 45.0, 150.0);
            stars.push((p.x, p.y));
        }
        let edges: Vec<(usize, usize)> = (1..=8).map(|k| (0, k)).collect();
        let g = graph(&stars, &edges);
        let requests: Vec<LabelRequest> = (0..9)
            .map(|i| LabelRequest::new(format!("Tech{i}"), i))
            .collect();

        assert_eq!(processing_order(&g, &requests)[0], 0, "hub is placed first");

        let placer = LabelPlacer::new(&g, canvas(), &typo, title, watermark);
        let sectors = placer.score_sectors(0, &[]);
        // 0°, 90°, 180° and 270° point straight along a spoke: full edge
        // penalty plus two collinear edges at distance 0.
        let (clear, along) = sectors.split_at(8);
        let mut along_edges: Vec<usize> = along.iter().map(|s| s.sector).collect();
        along_edges.sort_unstable();
        assert_eq!(along_edges, vec![0, 3, 6, 9]);
        for s in along {
            assert!((s.score + 10.0).abs() < 1e-6, "sector {}: {}", s.sector, s.score);
        }
        for s in clear {
            assert!(s.score > 40.0, "sector {}: {}", s.sector, s.score);
        }

        let labels = placer.place(&requests).unwrap();
        assert_eq!(labels.len(), 9);
        let rect = labels[0].rect.expect("hub label should be placed");
        let direction = direction_deg(hub, rect.center());
        for k in 0..8 {
            assert!(angular_distance(direction, k as f64 * 45.0) >= 15.0 - 1e-6);
        }
        assert_invariants(&g, &labels, title, watermark);
    }

    #[test]
    fn test_star_inside_exclusion_zone_is_skipped() {
        let typo = typography();
        let big_title = Rect::new(0.0, 0.0, 1024.0, 400.0);
        let (_, watermark) = zones(&typo);
        let g = graph(&[(512.0, 200.0), (512.0, 700.0)], &[]);
        let labels = LabelPlacer::new(&g, canvas(), &typo, big_title, watermark)
            .place(&[LabelRequest::new("Vue", 0), LabelRequest::new("Go", 1)])
            .unwrap();
        assert!(labels[0].rect.is_none());
        assert!(labels[1].is_placed());
    }

    #[test]
    fn test_unknown_star_is_an_error() {
        let typo = typography();
        let (title, watermark) = zones(&typo);
        let g = graph(&[(512.0, 512.0)], &[]);
        let err = LabelPlacer::new(&g, canvas(), &typo, title, watermark)
            .place(&[LabelRequest::new("Kotlin", 4)])
            .unwrap_err();
        assert!(matches!(err, GraphError::UnknownStar { star: 4, .. }));
    }

    #[test]
    fn test_template_layout_is_deterministic_and_valid() {
        let typo = typography();
        let (title, watermark) = zones(&typo);
        // Orion on the reference canvas.
        let g = graph(
            &[
                (300.0, 200.0),
                (700.0, 180.0),
                (350.0, 400.0),
                (512.0, 420.0),
                (650.0, 400.0),
                (280.0, 750.0),
                (720.0, 780.0),
            ],
            &[(0, 2), (1, 4), (2, 3), (3, 4), (2, 5), (4, 6)],
        );
        let requests: Vec<LabelRequest> = ["Python", "React", "Docker", "AWS", "Pytest", "Kubernetes", "Redis"]
            .iter()
            .enumerate()
            .map(|(i, t)| LabelRequest::new(*t, i))
            .collect();
        let placer = LabelPlacer::new(&g, canvas(), &typo, title, watermark);

        let first = placer.place(&requests).unwrap();
        let second = placer.place(&requests).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), requests.len());
        assert!(first.iter().filter(|l| l.is_placed()).count() >= 5);
        assert_invariants(&g, &first, title, watermark);
    }

    #[test]
    fn test_scaled_params_shrink_with_canvas() {
        let p = PlacementParams::for_canvas(CanvasSize::square(512));
        assert_eq!(p.min_distance_from_star, 30.0);
        assert_eq!(p.nearby_label_radius, 50.0);
    }

    #[test]
    fn test_count_edge_crossings() {
        let typo = typography();
        let (title, watermark) = zones(&typo);
        let g = graph(
            &[(100.0, 500.0), (900.0, 500.0), (500.0, 300.0)],
            &[(0, 1)],
        );
        let placer = LabelPlacer::new(&g, canvas(), &typo, title, watermark);
        let crossing = Label {
            text: "Go".into(),
            star_index: 2,
            rect: Some(Rect::new(480.0, 490.0, 40.0, 20.0)),
        };
        let clear = Label {
            text: "Go".into(),
            star_index: 2,
            rect: Some(Rect::new(480.0, 200.0, 40.0, 20.0)),
        };
        assert_eq!(placer.count_edge_crossings(&[crossing, clear]), 1);
    }
}
