//! Shared test/demo geometry: a rotating spiral of triangle-strip vertices.
//!
//! Reproduces, vertex for vertex, the rotating-spiral construction the
//! reference demo builds: vertex `i` sits at `(cx + x*f, cy + y*f)` with
//! `f = i/30 + 0.1` and `(x, y)` starting at `(0, 100)` and rotating by
//! `2*PI/16` per step. `cx, cy` place the spiral's origin at the image
//! center rather than hardcoding the reference's fixed `400, 250`, so both
//! demo binaries can render it at any size.

use std::f32::consts::PI;

/// Number of (x, y) vertex pairs the spiral produces.
pub const SPIRAL_VERTEX_COUNT: usize = 64;

/// Builds a flat `[x0, y0, x1, y1, ...]` triangle-strip vertex buffer
/// describing a spiral that grows outward from the center of a
/// `width` x `height` image, `frame` steps into its rotation.
pub fn spiral_vertices(width: f32, height: f32, frame: u32) -> Vec<f32> {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let (s, c) = (2.0 * PI / 16.0).sin_cos();

    let mut vb = Vec::with_capacity(SPIRAL_VERTEX_COUNT * 2);
    let mut x = 0.0f32;
    let mut y = 100.0f32;
    for i in 0..SPIRAL_VERTEX_COUNT {
        let f = (i as f32 + frame as f32) / 30.0 + 0.1;
        vb.push(cx + x * f);
        vb.push(cy + y * f);
        let (nx, ny) = (x * c - y * s, x * s + y * c);
        x = nx;
        y = ny;
    }
    vb
}
