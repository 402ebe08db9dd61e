//! Scalar per-pixel inner loop.
//!
//! One tile at a time: evaluate all three edge functions at the tile's
//! top-left pixel, then walk the tile incrementally, adding each edge's `a`
//! per column and `b` per row, exactly as the coefficients were built to
//! support in [`crate::edge::Edge`].

use crate::fixed::Vertex;
use crate::image::Image;
use crate::triangle::SetupTriangle;

pub(super) fn fill_tile(image: &mut Image, tri: &SetupTriangle, tx: i32, ty: i32, w: i32, h: i32) {
    let corner = Vertex::new(tx << 8, ty << 8);
    let row_start = [
        tri.edges[0].eval(corner),
        tri.edges[1].eval(corner),
        tri.edges[2].eval(corner),
    ];

    let mut row = row_start;
    for y in 0..h {
        let mut w_px = row;
        for x in 0..w {
            if w_px[0] < 0 && w_px[1] < 0 && w_px[2] < 0 {
                image.set((tx + x) as u32, (ty + y) as u32, tri.color);
            }
            w_px[0] += tri.edges[0].a;
            w_px[1] += tri.edges[1].a;
            w_px[2] += tri.edges[2].a;
        }
        row[0] += tri.edges[0].b;
        row[1] += tri.edges[1].b;
        row[2] += tri.edges[2].b;
    }
}
