use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use microrast::{demo, render, FixedColor, Image, RasterMode, Topology};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn small_triangle() -> [f32; 6] {
    [100.0, 100.0, 120.0, 100.0, 110.0, 120.0]
}

fn medium_triangle() -> [f32; 6] {
    [100.0, 100.0, 300.0, 100.0, 200.0, 300.0]
}

fn large_triangle() -> [f32; 6] {
    [50.0, 50.0, 750.0, 100.0, 400.0, 550.0]
}

fn modes() -> Vec<RasterMode> {
    let mut m = vec![RasterMode::Scalar];
    #[cfg(feature = "simd")]
    m.push(RasterMode::Simd);
    m
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    for (name, vb) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        for mode in modes() {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), name),
                &vb,
                |b, vb| {
                    let mut image = Image::new(BUFFER_WIDTH, BUFFER_HEIGHT).unwrap();
                    let mut colors = FixedColor(0xFFFF00FF);
                    b.iter(|| {
                        render(
                            &mut image,
                            Topology::TriangleStrip,
                            black_box(vb),
                            &mut colors,
                            mode,
                        );
                    });
                },
            );
        }
    }

    group.finish();
}

/// A triangle-strip grid: each column contributes a top and bottom vertex,
/// so adjacent columns share an edge, the way a real mesh's strips would.
fn grid_strip(rows: u32, cols: u32) -> Vec<f32> {
    let mut vb = Vec::new();
    for row in 0..rows {
        let y0 = row as f32 * 30.0;
        let y1 = y0 + 25.0;
        for col in 0..=cols {
            let x = col as f32 * 40.0;
            vb.push(x);
            vb.push(y0);
            vb.push(x);
            vb.push(y1);
        }
    }
    vb
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");
    let vb = grid_strip(20, 20);

    for mode in modes() {
        group.bench_with_input(BenchmarkId::new("grid", format!("{mode:?}")), &vb, |b, vb| {
            let mut image = Image::new(BUFFER_WIDTH, BUFFER_HEIGHT).unwrap();
            let mut colors = FixedColor(0xFFFF00FF);
            b.iter(|| {
                render(
                    &mut image,
                    Topology::TriangleStrip,
                    black_box(vb),
                    &mut colors,
                    mode,
                );
            });
        });
    }

    group.finish();
}

fn benchmark_spiral_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("spiral_scene");
    let vb = demo::spiral_vertices(800.0, 500.0, 0);

    for mode in modes() {
        group.bench_with_input(
            BenchmarkId::new("spiral", format!("{mode:?}")),
            &vb,
            |b, vb| {
                let mut image = Image::new(800, 500).unwrap();
                let mut colors = FixedColor(0xFF0000FF);
                b.iter(|| {
                    render(
                        &mut image,
                        Topology::TriangleStrip,
                        black_box(vb),
                        &mut colors,
                        mode,
                    );
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_spiral_scene
);
criterion_main!(benches);
