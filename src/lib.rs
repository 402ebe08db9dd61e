//! A tiled, fixed-point triangle-strip rasterizer.
//!
//! The pipeline is three stages: [`strip::iter_strip`] walks a flat vertex
//! buffer into individual triangles, [`triangle::SetupTriangle::new`] builds
//! each triangle's edge functions and tile-aligned bounding box, and
//! [`raster::rasterize`] fills the pixels that bounding box's tiles cover.
//! [`render`] drives all three stages over an [`Image`].

pub mod color;
pub mod demo;
pub mod edge;
pub mod fixed;
pub mod image;
pub mod raster;
pub mod strip;
pub mod triangle;
pub mod window;

pub use color::{ColorSource, FixedColor, RandomColor};
pub use fixed::Vertex;
pub use image::{Image, ImageError};
pub use raster::RasterMode;
pub use strip::Topology;

use triangle::SetupTriangle;

/// Renders every triangle of `vb` (interpreted under `topology`) into
/// `image`, using `colors` to pick each triangle's fill color and `mode` to
/// select the tile-fill inner loop.
///
/// Does not clear `image` first; call [`Image::clear`] beforehand if a
/// fresh frame is wanted. Vertices that fail to snap to fixed point (NaN,
/// infinite, or out-of-range coordinates) drop their triangle rather than
/// aborting the whole render, matching [`triangle::SetupTriangle::new`]'s
/// treatment of degenerate and off-screen triangles.
pub fn render(
    image: &mut Image,
    topology: Topology,
    vb: &[f32],
    colors: &mut impl ColorSource,
    mode: RasterMode,
) {
    let w = image.width() as i32;
    let h = image.height() as i32;
    for (i, [p0, p1, p2]) in strip::iter_strip(topology, vb).enumerate() {
        let (Some(v0), Some(v1), Some(v2)) = (
            Vertex::snap(p0.0, p0.1),
            Vertex::snap(p1.0, p1.1),
            Vertex::snap(p2.0, p2.1),
        ) else {
            log::debug!("triangle {i} dropped: vertex failed to snap to fixed point");
            continue;
        };
        let color = colors.next_color();
        let Some(tri) = SetupTriangle::new(v0, v1, v2, w, h, color) else {
            continue;
        };
        raster::rasterize(image, &tri, mode);
    }
}

/// Brute-force reference rasterizer, exposed for property and scenario
/// tests external to this crate. Not part of the stable API.
pub mod testing {
    pub use crate::raster::reference::rasterize_reference;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_two_triangle_strip_paints_first_triangle() {
        let mut img = Image::new(32, 32).unwrap();
        let vb = [
            2.0, 2.0, // v0
            30.0, 2.0, // v1
            2.0, 30.0, // v2
            30.0, 30.0, // v3
        ];
        let mut colors = FixedColor(0x11223344);
        render(
            &mut img,
            Topology::TriangleStrip,
            &vb,
            &mut colors,
            RasterMode::Scalar,
        );
        assert_eq!(img.get(4, 4), 0x11223344);
    }

    #[test]
    fn render_drops_nan_triangle_without_panicking() {
        let mut img = Image::new(16, 16).unwrap();
        let vb = [f32::NAN, 0.0, 1.0, 0.0, 0.0, 1.0];
        let mut colors = FixedColor(0xFF0000FF);
        render(
            &mut img,
            Topology::TriangleStrip,
            &vb,
            &mut colors,
            RasterMode::Scalar,
        );
        assert!(img.pixels().iter().all(|&p| p == 0));
    }
}
