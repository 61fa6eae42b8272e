/// Demo entry point.
/// Builds a procedural scene, rasterizes it once, and presents the pixel
/// buffer in a window via softbuffer.
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use isovox::{scenes, SurfaceError, VoxelGeometry, VoxelPalette, VoxelSurface};
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

/// Integer upscale factor for the window blit; the rendered buffers are
/// small and crisp nearest-neighbor scaling is the voxel-art look.
const SCALE: usize = 4;

fn build_scene(surface: &mut VoxelSurface, scene: &str) -> Result<(), SurfaceError> {
    match scene {
        "pyramid" => scenes::fill_pyramid(surface, 1),
        "ellipsoid" => scenes::fill_ellipsoid(surface, 1),
        "terrain" => scenes::fill_terrain(surface, 1, 12345),
        _ => scenes::fill_box(surface, 1),
    }
}

fn main() {
    println!("=== isovox - isometric voxel rasterizer demo ===");
    println!("Usage: isovox [box|pyramid|ellipsoid|terrain] [width] [height] [depth]");
    println!("  ESC - Exit");
    println!();

    let mut args = std::env::args().skip(1);
    let scene = args.next().unwrap_or_else(|| "box".to_string());
    let width: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(12);
    let height: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(8);
    let depth: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(12);

    let geometry = VoxelGeometry::new(8, 2, 4).expect("demo geometry is valid");

    // Desert sand on a black backdrop
    let mut palette = VoxelPalette::new();
    palette.set_entry_shaded(0, 0x000000);
    palette.set_entry_shaded(1, 0xedc9af);

    let mut surface =
        VoxelSurface::new(geometry, width, height, depth).expect("demo grid extent is valid");
    build_scene(&mut surface, &scene).expect("scene builders stay inside the grid");

    let render_start = Instant::now();
    surface.update(&palette, false);
    println!(
        "Rendered '{}' {}x{}x{} -> {}x{} pixels in {:.2}ms",
        scene,
        width,
        height,
        depth,
        surface.pixel_width(),
        surface.pixel_height(),
        render_start.elapsed().as_secs_f64() * 1000.0
    );

    let window_width = (surface.pixel_width() * SCALE) as u32;
    let window_height = (surface.pixel_height() * SCALE) as u32;

    let event_loop = EventLoop::new().unwrap();
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("isovox")
            .with_inner_size(winit::dpi::PhysicalSize::new(window_width, window_height))
            .with_resizable(false)
            .build(&event_loop)
            .unwrap(),
    );

    let context = softbuffer::Context::new(window.clone()).unwrap();
    let mut presentation = softbuffer::Surface::new(&context, window.clone()).unwrap();

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        if event.state == ElementState::Pressed {
                            if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                                elwt.exit();
                            }
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        presentation
                            .resize(
                                NonZeroU32::new(window_width).unwrap(),
                                NonZeroU32::new(window_height).unwrap(),
                            )
                            .unwrap();

                        let mut buffer = presentation.buffer_mut().unwrap();
                        blit_scaled(
                            surface.pixels(),
                            surface.pixel_width(),
                            surface.pixel_height(),
                            &mut buffer,
                        );
                        buffer.present().unwrap();
                    }
                    _ => {}
                },
                _ => {}
            }
        })
        .unwrap();
}

/// Nearest-neighbor upscale from the RGBA8 pixel buffer into softbuffer's
/// 0RGB u32 layout.
fn blit_scaled(pixels: &[u8], width: usize, height: usize, target: &mut [u32]) {
    let target_width = width * SCALE;
    for y in 0..height {
        for x in 0..width {
            let src = (y * width + x) * 4;
            let color = ((pixels[src] as u32) << 16)
                | ((pixels[src + 1] as u32) << 8)
                | (pixels[src + 2] as u32);

            let base = y * SCALE * target_width + x * SCALE;
            for dy in 0..SCALE {
                let row = base + dy * target_width;
                target[row..row + SCALE].fill(color);
            }
        }
    }
}
