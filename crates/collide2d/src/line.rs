//! Segment intersection and the line-compound tests built on it.
//!
//! Intersection uses the parametric form: with `s1 = P1→P2` and `s2 = P3→P4`,
//!
//! ```text
//! den = (y4-y3)(x2-x1) - (x4-x3)(y2-y1)
//! uA  = ((x4-x3)(y1-y3) - (y4-y3)(x1-x3)) / den
//! uB  = ((x2-x1)(y1-y3) - (y2-y1)(x1-x3)) / den
//! ```
//!
//! and the segments meet iff `uA, uB ∈ [0, 1]`. Parallel and collinear
//! segments (and zero-length ones) give `den == 0`, so `uA`/`uB` are ±∞ or
//! NaN and the range check fails on its own. There is no separate parallel
//! branch.
//!
//! Entry points come in three shapes: `bool` (`segment_intersect`),
//! `Option<Point2>` (`segment_intersection`) and `CollisionResult`
//! (`segment_collision`). `*_traced` variants also hand each hit to a
//! `DebugSink`.

use nalgebra::Point2;

use crate::debug::DebugSink;
use crate::math::distance;
use crate::point::{point_in_circle, point_on_segment_eps};
use crate::shapes::{Circle, CollideCfg, CollisionResult, Rect, Segment};

/// `uA` along `s1` when both crossing parameters are in `[0, 1]`.
#[inline]
fn crossing_param(s1: &Segment, s2: &Segment) -> Option<f64> {
    let (x1, y1, x2, y2) = (s1.a.x, s1.a.y, s1.b.x, s1.b.y);
    let (x3, y3, x4, y4) = (s2.a.x, s2.a.y, s2.b.x, s2.b.y);
    let den = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    let u_a = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / den;
    let u_b = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / den;
    let unit = 0.0..=1.0;
    (unit.contains(&u_a) && unit.contains(&u_b)).then_some(u_a)
}

/// `s1` and `s2` share at least one point (endpoints included).
#[inline]
pub fn segment_intersect(s1: &Segment, s2: &Segment) -> bool {
    crossing_param(s1, s2).is_some()
}

/// Crossing point of `s1` and `s2`, `None` if they do not cross.
#[inline]
pub fn segment_intersection(s1: &Segment, s2: &Segment) -> Option<Point2<f64>> {
    crossing_param(s1, s2).map(|u| s1.at(u))
}

/// `CollisionAt(point)` or `NoCollision`.
#[inline]
pub fn segment_collision(s1: &Segment, s2: &Segment) -> CollisionResult {
    segment_intersection(s1, s2).into()
}

/// `segment_intersection`, marking a hit on `sink` with `cfg.marker_size`.
pub fn segment_intersection_traced<S: DebugSink + ?Sized>(
    s1: &Segment,
    s2: &Segment,
    sink: &mut S,
    cfg: &CollideCfg,
) -> Option<Point2<f64>> {
    let hit = segment_intersection(s1, s2);
    if let Some(p) = hit {
        sink.marker(p, cfg.marker_size);
    }
    hit
}

/// `s` touches the disc `c`.
///
/// Endpoints inside decide immediately. Otherwise the circle center is
/// projected onto the line through `s`; the projection has to lie on the
/// segment (default buffer) and within the radius. A line that would cut the
/// circle only beyond an endpoint does not count.
#[inline]
pub fn line_circle(s: &Segment, c: &Circle) -> bool {
    line_circle_eps(s, c, CollideCfg::DEFAULT_LINE_BUFFER)
}

/// `line_circle` with an explicit slack for the on-segment check of the
/// projected center.
pub fn line_circle_eps(s: &Segment, c: &Circle, buffer: f64) -> bool {
    if point_in_circle(s.a, c) || point_in_circle(s.b, c) {
        return true;
    }
    let d = s.direction();
    let t = (c.center - s.a).dot(&d) / d.norm_squared();
    let closest = s.at(t);
    if !point_on_segment_eps(closest, s, buffer) {
        return false;
    }
    distance(closest, c.center) <= c.radius()
}

/// `s` crosses at least one edge of `r`.
///
/// A segment lying strictly inside `r` crosses no edge and reports `false`;
/// combine with `point_in_rect` if containment should count.
pub fn line_rect(s: &Segment, r: &Rect) -> bool {
    r.edges().iter().any(|e| segment_intersect(s, e))
}

/// First crossing with an edge of `r`, edges tried left, right, top, bottom.
pub fn line_rect_intersection(s: &Segment, r: &Rect) -> Option<Point2<f64>> {
    r.edges().iter().find_map(|e| segment_intersection(s, e))
}

/// `CollisionAt(first edge crossing)` or `NoCollision`.
#[inline]
pub fn line_rect_collision(s: &Segment, r: &Rect) -> CollisionResult {
    line_rect_intersection(s, r).into()
}

/// `line_rect_intersection`, marking every edge crossing on `sink`.
/// The returned point is still the first in edge order.
pub fn line_rect_intersection_traced<S: DebugSink + ?Sized>(
    s: &Segment,
    r: &Rect,
    sink: &mut S,
    cfg: &CollideCfg,
) -> Option<Point2<f64>> {
    let mut first = None;
    for e in r.edges().iter() {
        let hit = segment_intersection_traced(s, e, sink, cfg);
        if first.is_none() {
            first = hit;
        }
    }
    first
}
