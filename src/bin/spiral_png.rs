//! Headless demo: renders the rotating-spiral test scene and writes it to a
//! PNG, optionally repeating the render to measure throughput.

use std::time::Instant;

use clap::Parser;
use microrast::{demo, render, Image, RandomColor, RasterMode, Topology};

#[derive(Parser, Debug)]
#[command(about = "Renders the rotating-spiral demo scene to a PNG file")]
struct Args {
    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Number of times to render the scene before writing the last frame out.
    #[arg(long, default_value_t = 1)]
    iterations: u32,

    #[arg(long, default_value = "spiral.png")]
    output: String,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, value_enum, default_value_t = ModeArg::Scalar)]
    mode: ModeArg,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum ModeArg {
    Scalar,
    ScalarNoReject,
    Simd,
}

impl From<ModeArg> for RasterMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Scalar => RasterMode::Scalar,
            ModeArg::ScalarNoReject => RasterMode::ScalarNoReject,
            #[cfg(feature = "simd")]
            ModeArg::Simd => RasterMode::Simd,
            #[cfg(not(feature = "simd"))]
            ModeArg::Simd => {
                log::warn!("simd feature not enabled, falling back to Scalar");
                RasterMode::Scalar
            }
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut img = match Image::new(args.width, args.height) {
        Ok(image) => image,
        Err(err) => {
            log::error!("failed to allocate image: {err}");
            std::process::exit(1);
        }
    };

    let mode = RasterMode::from(args.mode);
    let started = Instant::now();
    for frame in 0..args.iterations {
        img.clear(0);
        let vb = demo::spiral_vertices(args.width as f32, args.height as f32, frame);
        let mut colors = RandomColor::from_seed(args.seed);
        render(&mut img, Topology::TriangleStrip, &vb, &mut colors, mode);
    }
    let elapsed = started.elapsed();
    log::info!(
        "rendered {} iteration(s) of a {}x{} spiral in {:?} ({:.2} iterations/s)",
        args.iterations,
        args.width,
        args.height,
        elapsed,
        args.iterations as f64 / elapsed.as_secs_f64().max(f64::EPSILON),
    );

    if args.iterations == 1 {
        let buf: Vec<u8> = (0..img.height())
            .flat_map(|y| img.row(y).iter().copied())
            .flat_map(|p| p.to_be_bytes())
            .collect();
        match image::save_buffer(
            &args.output,
            &buf,
            img.width(),
            img.height(),
            image::ColorType::Rgba8,
        ) {
            Ok(()) => log::info!("wrote {}", args.output),
            Err(err) => {
                log::error!("failed to write {}: {err}", args.output);
                std::process::exit(1);
            }
        }
    }
}
