//! Tile traversal and the scalar/SIMD pixel-fill inner loops.

mod scalar;
#[cfg(feature = "simd")]
mod simd;

pub mod reference;

use crate::fixed::{Vertex, TILE};
use crate::image::Image;
use crate::triangle::SetupTriangle;

/// Selects which inner-loop implementation fills a tile's pixels.
///
/// Kept as a tagged enum matched at the call site rather than a trait
/// object, so hot-path dispatch is a single `match`, not a vtable call per
/// tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RasterMode {
    /// Per-pixel scalar inner loop, with the tile-level trivial-reject test.
    #[default]
    Scalar,
    /// Per-pixel scalar inner loop, trivial-reject disabled. Exists for
    /// benchmarking and for the reject-soundness property test, which needs
    /// a ground truth that only ever disagrees with `Scalar` on reject
    /// bugs, never on inner-loop bugs.
    ScalarNoReject,
    /// 8-wide packed inner loop, with the tile-level trivial-reject test.
    #[cfg(feature = "simd")]
    Simd,
}

/// Fills every pixel of `image` covered by `tri`, using `mode`'s inner loop.
///
/// Walks `tri`'s tile-aligned bounding box in `TILE`-pixel steps; for each
/// tile, a trivial-reject test (skipped only by
/// [`RasterMode::ScalarNoReject`]) asks whether any pixel in the tile could
/// possibly be inside all three edges before paying for the per-pixel loop.
pub fn rasterize(image: &mut Image, tri: &SetupTriangle, mode: RasterMode) {
    let mut ty = tri.start_y;
    while ty < tri.end_y {
        let mut tx = tri.start_x;
        while tx < tri.end_x {
            let corner = Vertex::new(tx << 8, ty << 8);
            let tile_min = [
                tri.edges[0].eval(corner) + tri.tile_delta[0],
                tri.edges[1].eval(corner) + tri.tile_delta[1],
                tri.edges[2].eval(corner) + tri.tile_delta[2],
            ];
            let reject = match mode {
                RasterMode::ScalarNoReject => false,
                _ => tile_min.iter().any(|&m| m >= 0),
            };
            if !reject {
                let w = (tri.end_x - tx).min(TILE);
                let h = (tri.end_y - ty).min(TILE);
                match mode {
                    #[cfg(feature = "simd")]
                    RasterMode::Simd => {
                        simd::fill_tile(image, tri, tx, ty, w, h);
                    }
                    _ => {
                        scalar::fill_tile(image, tri, tx, ty, w, h);
                    }
                }
            }
            tx += TILE;
        }
        ty += TILE;
    }
}
