//! Collect intersection markers for a seeded scene and print them.
//!
//! Usage:
//!   cargo run -p collide2d --example debug_markers -- [seed]
//!
//! A renderer would draw each marker as a small circle; here we just list
//! them so the debug path can be eyeballed without a window.

use collide2d::prelude::*;
use collide2d::sample::{ReplayToken, SampleCfg, Scene};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7u64);
    let scene = Scene::draw(SampleCfg::default(), ReplayToken::new(seed, 0), 8);
    let cfg = CollideCfg::default();
    let mut log = MarkerLog::new();
    for s in &scene.segments {
        for r in &scene.rects {
            line_rect_intersection_traced(s, r, &mut log, &cfg);
        }
    }
    println!("seed {seed}: {} markers", log.len());
    for m in &log.markers {
        println!("  ({:8.3}, {:8.3})  size {}", m.at.x, m.at.y, m.size);
    }
}
