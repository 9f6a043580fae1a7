//! Debug-draw collaborators for intersection points.
//!
//! Line tests that can report where they hit accept a `DebugSink`. Geometry
//! never depends on the sink: pass `NoDebug` (or call the untraced entry
//! point) and results are identical.

use nalgebra::Point2;

/// Receives "draw a marker of diameter `size` at `at`" commands.
pub trait DebugSink {
    fn marker(&mut self, at: Point2<f64>, size: f64);
}

impl<S: DebugSink + ?Sized> DebugSink for &mut S {
    #[inline]
    fn marker(&mut self, at: Point2<f64>, size: f64) {
        (**self).marker(at, size)
    }
}

/// Debug drawing off.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDebug;

impl DebugSink for NoDebug {
    #[inline]
    fn marker(&mut self, _at: Point2<f64>, _size: f64) {}
}

/// Emits one `tracing` debug event per marker.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceSink;

impl DebugSink for TraceSink {
    fn marker(&mut self, at: Point2<f64>, size: f64) {
        tracing::debug!(target: "collide2d::debug", x = at.x, y = at.y, size, "marker");
    }
}

/// A recorded marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub at: Point2<f64>,
    pub size: f64,
}

/// Collects markers so the caller can render them later in its own frame.
#[derive(Clone, Debug, Default)]
pub struct MarkerLog {
    pub markers: Vec<Marker>,
}

impl MarkerLog {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.markers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
    /// Drop all markers, e.g. at the start of a frame.
    pub fn clear(&mut self) {
        self.markers.clear();
    }
}

impl DebugSink for MarkerLog {
    fn marker(&mut self, at: Point2<f64>, size: f64) {
        self.markers.push(Marker { at, size });
    }
}
