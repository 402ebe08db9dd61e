//! 8-wide packed inner loop, semantically identical to [`super::scalar`] but
//! evaluating one row of up to 8 pixels per step.

use wide::i32x8;

use crate::fixed::Vertex;
use crate::image::Image;
use crate::triangle::SetupTriangle;

const LANE_OFFSETS: [i32; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

pub(super) fn fill_tile(image: &mut Image, tri: &SetupTriangle, tx: i32, ty: i32, w: i32, h: i32) {
    let corner = Vertex::new(tx << 8, ty << 8);
    let base = [
        tri.edges[0].eval(corner),
        tri.edges[1].eval(corner),
        tri.edges[2].eval(corner),
    ];
    let a = [
        tri.edges[0].a,
        tri.edges[1].a,
        tri.edges[2].a,
    ];
    let b = [
        tri.edges[0].b,
        tri.edges[1].b,
        tri.edges[2].b,
    ];

    let lanes = i32x8::from(LANE_OFFSETS);
    let zero = i32x8::splat(0);

    let mut row = base;
    for y in 0..h {
        let w0 = i32x8::splat(row[0]) + lanes * i32x8::splat(a[0]);
        let w1 = i32x8::splat(row[1]) + lanes * i32x8::splat(a[1]);
        let w2 = i32x8::splat(row[2]) + lanes * i32x8::splat(a[2]);

        let inside = w0.cmp_lt(zero) & w1.cmp_lt(zero) & w2.cmp_lt(zero);
        let mask: [i32; 8] = inside.to_array();

        for x in 0..w {
            if mask[x as usize] != 0 {
                image.set((tx + x) as u32, (ty + y) as u32, tri.color);
            }
        }

        row[0] += b[0];
        row[1] += b[1];
        row[2] += b[2];
    }
}
