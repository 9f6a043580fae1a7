//! Shape value types, the tagged collision result, and tolerances.
//!
//! - `Circle`, `Ellipse`: sized by diameter, centred at `center`.
//! - `Rect`: axis-aligned, `origin` is the top-left corner.
//! - `Segment`: two endpoints, possibly coincident.
//! - `CollisionResult`: whether two shapes touch, and optionally where.
//! - `CollideCfg`: marker size and the default line buffer.

use nalgebra::{Point2, Vector2};

use crate::math::distance;

/// Debug-draw sizing, plus the default point-on-segment slack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollideCfg {
    /// Diameter of the marker handed to a `DebugSink` at intersection points.
    pub marker_size: f64,
}

impl CollideCfg {
    /// Slack used by `point_on_segment` and `line_circle`.
    pub const DEFAULT_LINE_BUFFER: f64 = 0.1;
    pub const DEFAULT_MARKER_SIZE: f64 = 10.0;
}

impl Default for CollideCfg {
    fn default() -> Self {
        Self {
            marker_size: Self::DEFAULT_MARKER_SIZE,
        }
    }
}

/// Circle given by center and diameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point2<f64>,
    pub diameter: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point2<f64>, diameter: f64) -> Self {
        Self { center, diameter }
    }
    #[inline]
    pub fn at(x: f64, y: f64, diameter: f64) -> Self {
        Self::new(Point2::new(x, y), diameter)
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

/// Axis-aligned ellipse given by center and the two diameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub center: Point2<f64>,
    pub width: f64,
    pub height: f64,
}

impl Ellipse {
    #[inline]
    pub fn new(center: Point2<f64>, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }
    #[inline]
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point2::new(x, y), width, height)
    }
    /// Semi-axes `(rx, ry)`.
    #[inline]
    pub fn radii(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl From<Circle> for Ellipse {
    fn from(c: Circle) -> Self {
        Ellipse::new(c.center, c.diameter, c.diameter)
    }
}

/// Axis-aligned rectangle: top-left `origin` plus extent.
///
/// Zero or negative extents are accepted; tests then evaluate the same
/// inequalities on the degenerate box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Point2<f64>,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point2::new(x, y),
            width,
            height,
        }
    }
    /// Rectangle from a corner point and a size vector.
    #[inline]
    pub fn from_origin_size(origin: Point2<f64>, size: Vector2<f64>) -> Self {
        Self {
            origin,
            width: size.x,
            height: size.y,
        }
    }
    #[inline]
    pub fn left(&self) -> f64 {
        self.origin.x
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.origin.x + self.width
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.origin.y
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.height
    }
    /// Boundary as four segments, ordered left, right, top, bottom.
    pub fn edges(&self) -> [Segment; 4] {
        let (l, r, t, b) = (self.left(), self.right(), self.top(), self.bottom());
        [
            Segment::from_coords(l, t, l, b),
            Segment::from_coords(r, t, r, b),
            Segment::from_coords(l, t, r, t),
            Segment::from_coords(l, b, r, b),
        ]
    }
}

/// Line segment between `a` and `b`. `a == b` is a valid, zero-length segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point2<f64>,
    pub b: Point2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }
    #[inline]
    pub fn length(&self) -> f64 {
        distance(self.a, self.b)
    }
    /// `b - a`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.b - self.a
    }
    /// Point at parameter `t` along the segment (`t = 0` → `a`, `t = 1` → `b`).
    #[inline]
    pub fn at(&self, t: f64) -> Point2<f64> {
        self.a + self.direction() * t
    }
}

/// Outcome of a collision query.
///
/// Boolean entry points never produce `CollisionAt`; point-returning entry
/// points never produce a bare `Collision`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CollisionResult {
    NoCollision,
    Collision,
    CollisionAt(Point2<f64>),
}

impl CollisionResult {
    #[inline]
    pub fn is_collision(&self) -> bool {
        !matches!(self, CollisionResult::NoCollision)
    }
    #[inline]
    pub fn point(&self) -> Option<Point2<f64>> {
        match *self {
            CollisionResult::CollisionAt(p) => Some(p),
            _ => None,
        }
    }
}

impl From<bool> for CollisionResult {
    fn from(hit: bool) -> Self {
        if hit {
            CollisionResult::Collision
        } else {
            CollisionResult::NoCollision
        }
    }
}

impl From<Option<Point2<f64>>> for CollisionResult {
    fn from(p: Option<Point2<f64>>) -> Self {
        p.map_or(CollisionResult::NoCollision, CollisionResult::CollisionAt)
    }
}
