use nalgebra::Point2;

/// Euclidean distance between `a` and `b`.
/// Exactly 0 for coincident points and symmetric in its arguments.
#[inline]
pub fn distance(a: Point2<f64>, b: Point2<f64>) -> f64 {
    squared_distance(a, b).sqrt()
}

/// Squared Euclidean distance. Use for threshold comparisons in hot loops.
#[inline]
pub fn squared_distance(a: Point2<f64>, b: Point2<f64>) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn distance_pythagorean() {
        let a = point![0.0, 0.0];
        let b = point![3.0, 4.0];
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(squared_distance(a, b), 25.0);
    }

    #[test]
    fn distance_coincident_is_zero() {
        let p = point![-7.25, 1e9];
        assert_eq!(distance(p, p), 0.0);
        assert_eq!(squared_distance(p, p), 0.0);
    }

    #[test]
    fn distance_symmetric_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let a = point![rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3)];
            let b = point![rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3)];
            assert_eq!(distance(a, b), distance(b, a));
            // agrees with nalgebra's own metric
            assert!((distance(a, b) - nalgebra::distance(&a, &b)).abs() < 1e-9);
        }
    }
}
