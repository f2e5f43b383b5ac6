use crate::canvas::Canvas;
use crate::config::SpeedometerConfig;
use crate::gauge::GaugeState;
use crate::renderer::GaugeRenderer;
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Opens the speedometer window and animates it until the window is closed.
///
/// The font is loaded before any window exists, so a missing font fails
/// without drawing anything.
pub fn run(config: SpeedometerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let renderer = GaugeRenderer::new(config)?;
    let config = renderer.config().clone();

    let logical_width = config.window_width;
    let logical_height = config.window_height;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(
            logical_width as f64,
            logical_height as f64,
        ))
        .with_resizable(false)
        .build(&event_loop)?;
    let window = Arc::new(window);

    // Buffer stays at the logical size; pixels scales it to the surface.
    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(
        logical_width as u32,
        logical_height as u32,
        surface_texture,
    )?;
    log::info!(
        "opened {}x{} window \"{}\" at {} fps",
        logical_width,
        logical_height,
        config.title,
        config.max_framerate
    );

    let mut state = GaugeState::from_config(&config);
    let frame_duration = Duration::from_secs_f64(1.0 / config.max_framerate);
    let mut next_frame = Instant::now();
    let window_clone = window.clone();

    event_loop.run(move |event, window_target| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested, exiting");
                window_target.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                    log::error!("failed to resize surface: {err}");
                    window_target.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                if state.advance(config.speed_step) {
                    log::debug!(
                        "sweep reversed at {:.1}, now {:?}",
                        state.speed(),
                        state.direction()
                    );
                }

                let mut canvas = Canvas::new(pixels.frame_mut(), logical_width, logical_height);
                renderer.draw(&state, &mut canvas);
                if let Err(err) = pixels.render() {
                    log::error!("failed to present frame: {err}");
                    window_target.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            if now >= next_frame {
                window_clone.request_redraw();
                next_frame = now + frame_duration;
            }
            window_target.set_control_flow(ControlFlow::WaitUntil(next_frame));
        }
        _ => {}
    })?;

    Ok(())
}
