//! Plane geometry shared by the label placement engine and the compositor.
//!
//! Coordinates are image pixels: +x to the right, +y downward. Angles are in
//! degrees, normalized to `[0, 360)`, measured from +x and increasing clockwise
//! on screen (because +y points down).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// The point `distance` pixels away from `self` in direction `angle_deg`.
    pub fn offset_polar(self, angle_deg: f64, distance: f64) -> Point {
        let rad = angle_deg.to_radians();
        Point::new(self.x + distance * rad.cos(), self.y + distance * rad.sin())
    }

    pub fn scaled(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn centered_at(center: Point, width: f64, height: f64) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Grows the rectangle by `padding` on every side.
    pub fn inflate(&self, padding: f64) -> Rect {
        Rect::new(
            self.x - padding,
            self.y - padding,
            self.width + 2.0 * padding,
            self.height + 2.0 * padding,
        )
    }

    /// True when the rectangle lies entirely inside `[0, width) × [0, height)`.
    pub fn fits_within(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() < width && self.bottom() < height
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Angles
// ────────────────────────────────────────────────────────────────────────────

pub fn normalize_angle(deg: f64) -> f64 {
    let a = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Direction of the vector `from → to`, in degrees.
pub fn direction_deg(from: Point, to: Point) -> f64 {
    normalize_angle((to.y - from.y).atan2(to.x - from.x).to_degrees())
}

/// Smallest separation between two angles, in `[0, 180]`.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (normalize_angle(a) - normalize_angle(b)).abs();
    d.min(360.0 - d)
}

// ────────────────────────────────────────────────────────────────────────────
// Distances and intersection tests
// ────────────────────────────────────────────────────────────────────────────

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// The placement scorer uses this unclamped form: a candidate lying beyond an
/// endpoint, but on the line's extension, still counts as close to the line.
/// A zero-length segment degrades to the distance to `a`.
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = dx.hypot(dy);
    if len < f64::EPSILON {
        return p.distance(a);
    }
    (dy * p.x - dx * p.y + b.x * a.y - b.y * a.x).abs() / len
}

/// Inclusive containment: points on the border are inside.
pub fn point_in_rect(p: Point, r: &Rect) -> bool {
    p.x >= r.x && p.x <= r.right() && p.y >= r.y && p.y <= r.bottom()
}

/// Two rectangles overlap unless one lies strictly to a side of the other.
/// Rectangles that merely touch along an edge count as overlapping.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    !(a.right() < b.x || b.right() < a.x || a.bottom() < b.y || b.bottom() < a.y)
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const ABOVE: u8 = 4;
const BELOW: u8 = 8;

fn outcode(p: Point, r: &Rect) -> u8 {
    let mut code = INSIDE;
    if p.x < r.x {
        code |= LEFT;
    } else if p.x > r.right() {
        code |= RIGHT;
    }
    if p.y < r.y {
        code |= ABOVE;
    } else if p.y > r.bottom() {
        code |= BELOW;
    }
    code
}

/// Cohen–Sutherland clip test: true when any part of segment `[a, b]` lies
/// inside or on the border of `r`.
pub fn segment_intersects_rect(a: Point, b: Point, r: &Rect) -> bool {
    let (mut p0, mut p1) = (a, b);
    let (mut c0, mut c1) = (outcode(p0, r), outcode(p1, r));

    // Each clip resolves at least one outcode bit, so four rounds suffice.
    for _ in 0..8 {
        if (c0 | c1) == INSIDE {
            return true;
        }
        if (c0 & c1) != INSIDE {
            return false;
        }

        let out = if c0 != INSIDE { c0 } else { c1 };
        let clipped = if out & BELOW != 0 {
            let y = r.bottom();
            Point::new(p0.x + (p1.x - p0.x) * (y - p0.y) / (p1.y - p0.y), y)
        } else if out & ABOVE != 0 {
            let y = r.y;
            Point::new(p0.x + (p1.x - p0.x) * (y - p0.y) / (p1.y - p0.y), y)
        } else if out & RIGHT != 0 {
            let x = r.right();
            Point::new(x, p0.y + (p1.y - p0.y) * (x - p0.x) / (p1.x - p0.x))
        } else {
            let x = r.x;
            Point::new(x, p0.y + (p1.y - p0.y) * (x - p0.x) / (p1.x - p0.x))
        };

        if out == c0 {
            p0 = clipped;
            c0 = outcode(p0, r);
        } else {
            p1 = clipped;
            c1 = outcode(p1, r);
        }
    }
    false
}
