//! Seeded random shapes (replay tokens + bounded sampling).
//!
//! Purpose
//! - Feed benchmarks and randomized checks with reproducible shape sets.
//!   Each draw is addressed by a `(seed, index)` replay token so a failing
//!   case can be regenerated from two integers.
//!
//! Model
//! - Positions are uniform in `SampleCfg::bounds`. Extents (diameters,
//!   widths, heights, segment spans) are uniform in `[0, max_extent]`, so
//!   degenerate zero-size shapes are possible but rare.

use nalgebra::{Point2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shapes::{Circle, Ellipse, Rect, Segment};

/// Axis-aligned sampling region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min: Point2::new(-100.0, -100.0),
            max: Point2::new(100.0, 100.0),
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub bounds: Bounds2,
    /// Upper bound for diameters, rect sizes and segment spans.
    pub max_extent: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            bounds: Bounds2::default(),
            max_extent: 40.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    /// Token for the next draw in the same stream.
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
    /// Generator for this draw: seed and index fill disjoint bytes of the
    /// 32-byte `StdRng` seed, so distinct tokens never share a stream.
    pub fn to_std_rng(self) -> StdRng {
        let mut key = <StdRng as SeedableRng>::Seed::default();
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[16..24].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

#[inline]
fn extent<R: Rng>(rng: &mut R, cfg: &SampleCfg) -> f64 {
    rng.gen::<f64>() * cfg.max_extent.max(0.0)
}

pub fn draw_point<R: Rng>(rng: &mut R, cfg: &SampleCfg) -> Point2<f64> {
    let b = cfg.bounds;
    let x = b.min.x + rng.gen::<f64>() * (b.max.x - b.min.x);
    let y = b.min.y + rng.gen::<f64>() * (b.max.y - b.min.y);
    Point2::new(x, y)
}

pub fn draw_circle<R: Rng>(rng: &mut R, cfg: &SampleCfg) -> Circle {
    let center = draw_point(rng, cfg);
    Circle::new(center, extent(rng, cfg))
}

pub fn draw_ellipse<R: Rng>(rng: &mut R, cfg: &SampleCfg) -> Ellipse {
    let center = draw_point(rng, cfg);
    let w = extent(rng, cfg);
    let h = extent(rng, cfg);
    Ellipse::new(center, w, h)
}

pub fn draw_rect<R: Rng>(rng: &mut R, cfg: &SampleCfg) -> Rect {
    let origin = draw_point(rng, cfg);
    let size = Vector2::new(extent(rng, cfg), extent(rng, cfg));
    Rect::from_origin_size(origin, size)
}

/// Segment starting in bounds, with a random direction and span.
pub fn draw_segment<R: Rng>(rng: &mut R, cfg: &SampleCfg) -> Segment {
    let a = draw_point(rng, cfg);
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    let len = extent(rng, cfg);
    let b = a + Vector2::new(theta.cos(), theta.sin()) * len;
    Segment::new(a, b)
}

/// A batch of every shape kind, drawn from one replay token.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub points: Vec<Point2<f64>>,
    pub circles: Vec<Circle>,
    pub ellipses: Vec<Ellipse>,
    pub rects: Vec<Rect>,
    pub segments: Vec<Segment>,
}

impl Scene {
    /// `n` shapes of each kind.
    pub fn draw(cfg: SampleCfg, tok: ReplayToken, n: usize) -> Self {
        let mut rng = tok.to_std_rng();
        let mut scene = Scene {
            points: Vec::with_capacity(n),
            circles: Vec::with_capacity(n),
            ellipses: Vec::with_capacity(n),
            rects: Vec::with_capacity(n),
            segments: Vec::with_capacity(n),
        };
        for _ in 0..n {
            scene.points.push(draw_point(&mut rng, &cfg));
            scene.circles.push(draw_circle(&mut rng, &cfg));
            scene.ellipses.push(draw_ellipse(&mut rng, &cfg));
            scene.rects.push(draw_rect(&mut rng, &cfg));
            scene.segments.push(draw_segment(&mut rng, &cfg));
        }
        scene
    }
}
