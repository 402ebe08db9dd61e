//! Triangle-strip iteration.
//!
//! Walks a flat `x0, y0, x1, y1, ...` vertex buffer and emits three float-pair
//! vertices per triangle. Winding is *not* pre-alternated by parity here —
//! [`crate::triangle::SetupTriangle::new`] re-orients any back-facing
//! triangle via its area-sign check, so the iterator stays a plain, dumb
//! sliding window over the buffer.

/// Selects how the vertex buffer is interpreted.
///
/// Modeled as a tagged enum matched in the iterator rather than a trait
/// object, so that adding `TriangleList`/`TriangleFan` later is a new match
/// arm, not a new vtable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Topology {
    #[default]
    TriangleStrip,
}

/// One triangle's worth of float pixel-space vertices.
pub type StripTriangle = [(f32, f32); 3];

/// Iterates the triangles of a vertex buffer under the given topology.
///
/// `vb` is a flat `[x0, y0, x1, y1, ...]` buffer; `Topology::TriangleStrip`
/// yields the triangle at vertex positions `(i, i+1, i+2)` for every `i` in
/// `0 .. vertex_count.saturating_sub(2)`. Fewer than 3 vertices yields
/// nothing.
pub fn iter_strip(topology: Topology, vb: &[f32]) -> impl Iterator<Item = StripTriangle> + '_ {
    let vertex_count = vb.len() / 2;
    let triangle_count = match topology {
        Topology::TriangleStrip => vertex_count.saturating_sub(2),
    };
    (0..triangle_count).map(move |i| {
        let at = |k: usize| (vb[2 * k], vb[2 * k + 1]);
        [at(i), at(i + 1), at(i + 2)]
    })
}
