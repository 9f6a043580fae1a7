//! Shape-pair overlap: rect/rect, rect/circle, circle/circle.
//!
//! Touching counts as overlapping in every test here.

use nalgebra::Point2;

use crate::math::{distance, squared_distance};
use crate::shapes::{Circle, Rect};

/// Projections of `r1` and `r2` overlap on both axes.
#[inline]
pub fn rect_rect(r1: &Rect, r2: &Rect) -> bool {
    r1.right() >= r2.left()
        && r1.left() <= r2.right()
        && r1.bottom() >= r2.top()
        && r1.top() <= r2.bottom()
}

/// Closest point of `r` to `c`'s center lies within the radius.
///
/// A center inside the rectangle clamps to itself, so it always collides.
pub fn rect_circle(r: &Rect, c: &Circle) -> bool {
    let cx = c.center.x;
    let cy = c.center.y;
    let test_x = if cx < r.left() {
        r.left()
    } else if cx > r.right() {
        r.right()
    } else {
        cx
    };
    let test_y = if cy < r.top() {
        r.top()
    } else if cy > r.bottom() {
        r.bottom()
    } else {
        cy
    };
    distance(c.center, Point2::new(test_x, test_y)) <= c.radius()
}

/// Center distance is at most the sum of the radii.
#[inline]
pub fn circle_circle(c1: &Circle, c2: &Circle) -> bool {
    distance(c1.center, c2.center) <= c1.radius() + c2.radius()
}

/// Same answer as `circle_circle` without the square root.
#[inline]
pub fn circle_circle_optimized(c1: &Circle, c2: &Circle) -> bool {
    let radii = c1.radius() + c2.radius();
    squared_distance(c1.center, c2.center) <= radii * radii
}
