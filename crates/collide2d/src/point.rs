//! Point containment: circle, ellipse, rectangle, segment.

use nalgebra::Point2;

use crate::math::distance;
use crate::shapes::{Circle, CollideCfg, Ellipse, Rect, Segment};

/// `p` lies in or on `c`.
#[inline]
pub fn point_in_circle(p: Point2<f64>, c: &Circle) -> bool {
    distance(p, c.center) <= c.radius()
}

/// `p` lies in or on `e`.
///
/// Bounding box first, then the half-chord `ry * sqrt(rx² - dx²) / rx` at the
/// point's x offset. An ellipse with `width == 0` has collapsed onto its
/// vertical axis: once the box check passes the point is on that segment (or,
/// with `height == 0` too, on the center), so no division takes place.
pub fn point_in_ellipse(p: Point2<f64>, e: &Ellipse) -> bool {
    let (rx, ry) = e.radii();
    let c = e.center;
    let in_box = p.x >= c.x - rx && p.x <= c.x + rx && p.y >= c.y - ry && p.y <= c.y + ry;
    if !in_box {
        return false;
    }
    if rx == 0.0 {
        return true;
    }
    let dx = p.x - c.x;
    let dy = p.y - c.y;
    let half_chord = ry * (rx * rx - dx * dx).abs().sqrt() / rx;
    dy <= half_chord && dy >= -half_chord
}

/// `p` lies in or on `r`; all four edges count.
#[inline]
pub fn point_in_rect(p: Point2<f64>, r: &Rect) -> bool {
    p.x >= r.left() && p.x <= r.right() && p.y >= r.top() && p.y <= r.bottom()
}

/// `p` lies on `s` within the default buffer (`CollideCfg::DEFAULT_LINE_BUFFER`).
#[inline]
pub fn point_on_segment(p: Point2<f64>, s: &Segment) -> bool {
    point_on_segment_eps(p, s, CollideCfg::DEFAULT_LINE_BUFFER)
}

/// `p` lies on `s` if `|pa| + |pb|` is within `buffer` of `|ab|`.
///
/// The slack absorbs rounding; larger buffers accept points further off the
/// segment (the accepted region is a thin ellipse with foci `a`, `b`).
pub fn point_on_segment_eps(p: Point2<f64>, s: &Segment, buffer: f64) -> bool {
    let d1 = distance(p, s.a);
    let d2 = distance(p, s.b);
    let len = s.length();
    let sum = d1 + d2;
    sum >= len - buffer && sum <= len + buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    #[test]
    fn circle_boundary_inclusive() {
        let c = Circle::at(0.0, 0.0, 10.0);
        assert!(point_in_circle(point![0.0, 0.0], &c));
        assert!(point_in_circle(point![5.0, 0.0], &c));
        assert!(point_in_circle(point![0.0, -5.0], &c));
        assert!(point_in_circle(point![3.0, 4.0], &c));
        assert!(!point_in_circle(point![5.0, 0.1], &c));
    }

    #[test]
    fn zero_diameter_circle_is_exact_point() {
        let c = Circle::at(2.0, 3.0, 0.0);
        assert!(point_in_circle(point![2.0, 3.0], &c));
        assert!(!point_in_circle(point![2.0, 3.0 + 1e-12], &c));
    }

    #[test]
    fn ellipse_contains_axes_and_rejects_corners() {
        let e = Ellipse::at(10.0, 10.0, 20.0, 10.0);
        assert!(point_in_ellipse(point![10.0, 10.0], &e));
        assert!(point_in_ellipse(point![0.0, 10.0], &e));
        assert!(point_in_ellipse(point![20.0, 10.0], &e));
        assert!(point_in_ellipse(point![10.0, 5.0], &e));
        assert!(point_in_ellipse(point![10.0, 15.0], &e));
        // inside the bounding box but outside the curve
        assert!(!point_in_ellipse(point![19.0, 14.0], &e));
        assert!(!point_in_ellipse(point![1.0, 6.0], &e));
        // outside the bounding box
        assert!(!point_in_ellipse(point![21.0, 10.0], &e));
        assert!(!point_in_ellipse(point![10.0, 15.5], &e));
    }

    #[test]
    fn ellipse_agrees_with_circle_when_round() {
        let c = Circle::at(-3.0, 4.0, 8.0);
        let e = Ellipse::from(c);
        for &(x, y) in &[(-3.0, 4.0), (1.0, 4.0), (-0.2, 6.8), (0.0, 7.0), (-7.1, 4.0)] {
            let p = point![x, y];
            assert_eq!(point_in_ellipse(p, &e), point_in_circle(p, &c), "at ({x},{y})");
        }
    }

    #[test]
    fn degenerate_ellipses() {
        // zero width: the vertical axis segment x = 0, y in [-5, 5]
        let v = Ellipse::at(0.0, 0.0, 0.0, 10.0);
        assert!(point_in_ellipse(point![0.0, 0.0], &v));
        assert!(point_in_ellipse(point![0.0, 5.0], &v));
        assert!(point_in_ellipse(point![0.0, -3.0], &v));
        assert!(!point_in_ellipse(point![0.0, 5.5], &v));
        assert!(!point_in_ellipse(point![0.1, 0.0], &v));
        // zero height: the horizontal axis segment
        let h = Ellipse::at(0.0, 0.0, 10.0, 0.0);
        assert!(point_in_ellipse(point![4.0, 0.0], &h));
        assert!(!point_in_ellipse(point![4.0, 0.1], &h));
        // both zero: only the center
        let dot = Ellipse::at(1.0, 1.0, 0.0, 0.0);
        assert!(point_in_ellipse(point![1.0, 1.0], &dot));
        assert!(!point_in_ellipse(point![1.0, 1.5], &dot));
    }

    #[test]
    fn ellipse_rejects_nan() {
        let e = Ellipse::at(0.0, 0.0, 0.0, 10.0);
        assert!(!point_in_ellipse(point![f64::NAN, 0.0], &e));
        let e = Ellipse::at(0.0, 0.0, 4.0, 4.0);
        assert!(!point_in_ellipse(point![0.0, f64::NAN], &e));
    }

    #[test]
    fn rect_every_edge_counts() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(point_in_rect(point![0.0, 5.0], &r));
        assert!(point_in_rect(point![10.0, 5.0], &r));
        assert!(point_in_rect(point![5.0, 0.0], &r));
        assert!(point_in_rect(point![5.0, 10.0], &r));
        assert!(point_in_rect(point![0.0, 0.0], &r));
        assert!(point_in_rect(point![10.0, 10.0], &r));
        assert!(!point_in_rect(point![-1.0, 5.0], &r));
        assert!(!point_in_rect(point![11.0, 5.0], &r));
        assert!(!point_in_rect(point![5.0, -1.0], &r));
        assert!(!point_in_rect(point![5.0, 11.0], &r));
    }

    #[test]
    fn rect_degenerate_extent() {
        let line = Rect::new(0.0, 0.0, 10.0, 0.0);
        assert!(point_in_rect(point![3.0, 0.0], &line));
        assert!(!point_in_rect(point![3.0, 0.001], &line));
        // negative width: no x satisfies left <= x <= right
        let inverted = Rect::new(0.0, 0.0, -10.0, 10.0);
        assert!(!point_in_rect(point![-5.0, 5.0], &inverted));
    }

    #[test]
    fn on_segment_with_buffer() {
        let s = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        assert!(point_on_segment(point![5.0, 0.0], &s));
        assert!(point_on_segment(point![0.0, 0.0], &s));
        assert!(point_on_segment(point![10.0, 0.0], &s));
        assert!(point_on_segment(point![5.0, 0.5], &s)); // sum ≈ 10.05
        assert!(!point_on_segment(point![5.0, 1.0], &s)); // sum ≈ 10.2
        assert!(!point_on_segment(point![10.2, 0.0], &s)); // past the end
        assert!(point_on_segment_eps(point![5.0, 1.0], &s, 0.5));
        assert!(!point_on_segment_eps(point![5.0, 0.5], &s, 0.0));
    }

    #[test]
    fn on_zero_length_segment() {
        let s = Segment::from_coords(1.0, 1.0, 1.0, 1.0);
        assert!(point_on_segment(point![1.0, 1.0], &s));
        assert!(point_on_segment(point![1.04, 1.0], &s));
        assert!(!point_on_segment(point![1.2, 1.0], &s));
    }
}
