//! Sample a few point sets and print input/hull sizes.
//!
//! Usage:
//!   cargo run -p hull2 --example hull_demo -- [num_points]

use hull2::prelude::*;

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);
    let cfg = HullCfg::default();
    let sampler = SamplerCfg {
        num_points: n,
        ..Default::default()
    };
    for index in 0..5 {
        let pts = draw_point_set(sampler, ReplayToken { seed: 2025, index });
        let hull = compute_hull(&pts, cfg);
        println!("sample {index}: points={} hull_vertices={}", pts.len(), hull.len());
    }
}
