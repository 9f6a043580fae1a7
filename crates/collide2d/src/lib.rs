//! 2D collision primitives.
//!
//! Pure, stateless predicates for axis-aligned rectangles, circles, ellipses,
//! points and line segments, plus the segment-intersection math under them.
//!
//! Conventions
//! - All containment and overlap tests are boundary-inclusive (`<=`).
//! - Rectangles are `origin` (top-left) + `width`/`height`; y grows downwards.
//! - Circles and ellipses are sized by diameter, not radius.
//! - Degenerate inputs (zero-length segments, zero-size shapes, NaN) follow
//!   plain IEEE-754 arithmetic. Nothing here panics or returns an error.
//!
//! Layout (leaves first)
//! - `math`: distance helpers.
//! - `shapes`: value types and `CollisionResult`.
//! - `point`: point containment.
//! - `pair`: shape-pair overlap.
//! - `line`: segment intersection and line-compound tests.
//! - `debug`: marker sinks for visualising intersection points.
//! - `sample`: seeded shape generation for benches and experiments.

pub mod debug;
pub mod line;
pub mod math;
pub mod pair;
pub mod point;
pub mod sample;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use debug::{DebugSink, Marker, MarkerLog, NoDebug, TraceSink};
pub use line::{
    line_circle, line_circle_eps, line_rect, line_rect_collision, line_rect_intersection,
    line_rect_intersection_traced, segment_collision, segment_intersect, segment_intersection,
    segment_intersection_traced,
};
pub use math::{distance, squared_distance};
pub use nalgebra::{Point2, Vector2};
pub use pair::{circle_circle, circle_circle_optimized, rect_circle, rect_rect};
pub use point::{
    point_in_circle, point_in_ellipse, point_in_rect, point_on_segment, point_on_segment_eps,
};
pub use shapes::{Circle, CollideCfg, CollisionResult, Ellipse, Rect, Segment};

/// Point from a coordinate pair.
#[inline]
pub fn pt(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::debug::{DebugSink, MarkerLog, NoDebug, TraceSink};
    pub use crate::line::*;
    pub use crate::pair::*;
    pub use crate::point::*;
    pub use crate::pt;
    pub use crate::shapes::{Circle, CollideCfg, CollisionResult, Ellipse, Rect, Segment};
    pub use nalgebra::{Point2, Vector2};
}
