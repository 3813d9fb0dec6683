// File: crates/chart-window/src/lib.rs
// Summary: Blocking window viewer that renders chart-core to a window via RGBA blit (CPU) using winit + softbuffer.

use std::num::NonZeroU32;

use chart_core::{Chart, RenderError, RenderOptions};
use thiserror::Error;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, KeyboardInput, StartCause, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

// Platform errors are flattened to text: softbuffer's carry a non-Send
// boxed source, and the viewer error has to cross into anyhow.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to open window: {0}")]
    Window(String),

    #[error("window surface error: {0}")]
    Surface(String),

    #[error("failed to render chart for display")]
    Render(#[from] RenderError),
}

/// Show `chart` in a window titled `title` and block until the window is
/// closed (close button, Escape or Q). The chart is re-rendered at the
/// window's physical size on every redraw.
pub fn show(chart: &Chart, opts: &RenderOptions, title: &str) -> Result<(), ViewerError> {
    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(LogicalSize::new(opts.width as f64, opts.height as f64))
        .build(&event_loop)
        .map_err(|e| ViewerError::Window(e.to_string()))?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(surface_err)?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(surface_err)?;
    tracing::debug!(size = ?window.inner_size(), "viewer window opened");

    let mut failure = None;
    event_loop.run_return(|event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::NewEvents(StartCause::Init) => window.request_redraw(),
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Escape | VirtualKeyCode::Q),
                            ..
                        },
                    ..
                } => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                if let Err(e) = present(&mut surface, chart, opts, window.inner_size()) {
                    failure = Some(e);
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
    tracing::debug!("viewer window closed");

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn present(
    surface: &mut softbuffer::Surface,
    chart: &Chart,
    base: &RenderOptions,
    size: PhysicalSize<u32>,
) -> Result<(), ViewerError> {
    // Minimized windows report a zero size; nothing to draw.
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(surface_err)?;

    let mut opts = base.clone();
    opts.width = w.get() as i32;
    opts.height = h.get() as i32;
    let (rgba, ..) = chart.render_to_rgba8(&opts)?;

    let mut frame = surface.buffer_mut().map_err(surface_err)?;
    blit_rgba(&mut frame, &rgba);
    frame.present().map_err(surface_err)?;
    Ok(())
}

fn surface_err(e: softbuffer::SoftBufferError) -> ViewerError {
    ViewerError::Surface(e.to_string())
}

/// Pack RGBA8 pixels into softbuffer's `0x00RRGGBB` words.
/// Copies as many pixels as both buffers hold.
pub fn blit_rgba(frame: &mut [u32], rgba: &[u8]) {
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        *dst = (r << 16) | (g << 8) | b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blit_packs_rgb_and_drops_alpha() {
        let rgba = [0x1f, 0x77, 0xb4, 0xff, 0xff, 0x7f, 0x0e, 0x80];
        let mut frame = [0u32; 2];
        blit_rgba(&mut frame, &rgba);
        assert_eq!(frame, [0x001f77b4, 0x00ff7f0e]);
    }

    #[test]
    fn blit_stops_at_shorter_buffer() {
        let rgba = [1, 2, 3, 4];
        let mut frame = [0xdeadbeef_u32; 3];
        blit_rgba(&mut frame, &rgba);
        assert_eq!(frame, [0x00010203, 0xdeadbeef, 0xdeadbeef]);
    }
}
