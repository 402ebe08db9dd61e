//! Interactive demo: renders the rotating spiral into an SDL2 window every
//! frame, with keys to switch the rasterizer mode and toggle trivial-reject.

use microrast::window::{FpsCounter, FrameLimiter, Key, Window, WindowEvent};
use microrast::{demo, render, Image, RandomColor, RasterMode, Topology};

fn mode_name(mode: RasterMode) -> &'static str {
    match mode {
        RasterMode::Scalar => "scalar",
        RasterMode::ScalarNoReject => "scalar (no tile reject)",
        #[cfg(feature = "simd")]
        RasterMode::Simd => "simd",
    }
}

/// Packs a `0xRRGGBBAA` pixel into the native-endian byte order SDL2's
/// `ARGB8888` streaming texture expects.
fn to_argb_bytes(pixels: impl Iterator<Item = u32>) -> Vec<u8> {
    let mut out = Vec::new();
    for p in pixels {
        let r = (p >> 24) & 0xff;
        let g = (p >> 16) & 0xff;
        let b = (p >> 8) & 0xff;
        let a = p & 0xff;
        let argb = (a << 24) | (r << 16) | (g << 8) | b;
        out.extend_from_slice(&argb.to_ne_bytes());
    }
    out
}

fn main() {
    env_logger::init();

    let mut window = match Window::new("microrast live demo", 800, 500) {
        Ok(w) => w,
        Err(err) => {
            log::error!("failed to open window: {err}");
            std::process::exit(1);
        }
    };

    let mut image = Image::new(window.width(), window.height()).expect("non-zero window size");
    let mut mode = RasterMode::Scalar;
    let mut colors = RandomColor::from_seed(42);
    let mut limiter = FrameLimiter::new(&window);
    let mut fps = FpsCounter::new();
    let mut frame = 0u32;

    log::info!(
        "controls: 1 = scalar, 2 = scalar/no-reject, 3 = simd, Esc/close = quit"
    );

    'running: loop {
        loop {
            match window.poll_events() {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(w, h) => {
                    if window.resize(w, h).is_ok() {
                        image = Image::new(w, h).expect("non-zero window size");
                    }
                }
                WindowEvent::KeyPress(Key::Num1) => mode = RasterMode::Scalar,
                WindowEvent::KeyPress(Key::Num2) => mode = RasterMode::ScalarNoReject,
                #[cfg(feature = "simd")]
                WindowEvent::KeyPress(Key::Num3) => mode = RasterMode::Simd,
                WindowEvent::None => break,
                _ => {}
            }
        }

        image.clear(0);
        let vb = demo::spiral_vertices(image.width() as f32, image.height() as f32, frame);
        render(&mut image, Topology::TriangleStrip, &vb, &mut colors, mode);

        let bytes = to_argb_bytes((0..image.height()).flat_map(|y| image.row(y).iter().copied()));
        if let Err(err) = window.present(&bytes) {
            log::error!("present failed: {err}");
            break;
        }

        if let Some(measured) = fps.tick() {
            window.set_title(&format!(
                "microrast live demo - {} - {:.1} fps",
                mode_name(mode),
                measured
            ));
        }

        limiter.wait_and_get_delta(&window);
        frame = frame.wrapping_add(1);
    }
}
