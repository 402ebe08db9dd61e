//! A deliberately naive, whole-image brute-force rasterizer.
//!
//! Exists purely as a test oracle: it re-implements the inside test with no
//! tiling and no trivial-reject, so a disagreement between it and
//! [`super::rasterize`] can only be a bug in the tile traversal or the
//! trivial-reject test, never a coincidence of matching bugs in both.
//!
//! Exposed at the crate root as `microrast::testing`, a benchmarking/testing
//! internals module in the same spirit as other crates' `pub mod bench`.

use crate::fixed::Vertex;
use crate::image::Image;
use crate::triangle::SetupTriangle;

/// Fills every pixel of `image` inside `tri`'s bounding box by evaluating
/// all three edge functions at every pixel, independent of tiling.
pub fn rasterize_reference(image: &mut Image, tri: &SetupTriangle) {
    for y in tri.start_y..tri.end_y {
        for x in tri.start_x..tri.end_x {
            let p = Vertex::new(x << 8, y << 8);
            let inside = tri
                .edges
                .iter()
                .all(|e| e.eval(p) < 0);
            if inside {
                image.set(x as u32, y as u32, tri.color);
            }
        }
    }
}
