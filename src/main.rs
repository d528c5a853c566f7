mod cli;
mod clock;
mod display;
mod watch;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use display::{FrameBuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use watch::TimerEngine;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

/// The user facing controls of the stopwatch.
enum Control {
    /// Start, stop or resume, depending on the state.
    Primary,
    Reset,
    Quit,
}

impl Control {
    fn from_key(key: VirtualKeyCode) -> Option<Self> {
        match key {
            VirtualKeyCode::Space | VirtualKeyCode::Return => Some(Control::Primary),
            VirtualKeyCode::R | VirtualKeyCode::Back => Some(Control::Reset),
            VirtualKeyCode::Escape => Some(Control::Quit),
            _ => None,
        }
    }
}

fn create_window(args: &cli::Args) -> Result<(EventLoop<()>, Window, Pixels)> {
    let event_loop = EventLoop::new();

    let min_size = LogicalSize::new(DISPLAY_WIDTH as f64, DISPLAY_HEIGHT as f64);
    let size = LogicalSize::new(
        (DISPLAY_WIDTH as u32 * args.scale.max(1)) as f64,
        (DISPLAY_HEIGHT as u32 * args.scale.max(1)) as f64,
    );
    let window = WindowBuilder::new()
        .with_title("Stopwatch")
        .with_inner_size(size)
        .with_min_inner_size(min_size)
        .build(&event_loop)
        .context("Failed to create window")?;

    let size = window.inner_size();
    let surface = SurfaceTexture::new(size.width, size.height, &window);
    let pixels = Pixels::new(DISPLAY_WIDTH as u32, DISPLAY_HEIGHT as u32, surface)
        .context("Failed to create the pixel frame buffer")?;

    Ok((event_loop, window, pixels))
}

/// Sync the control labels on the display with the watch state.
fn update_controls(watch: &mut TimerEngine<FrameBuffer>) {
    let state = watch.state();
    watch
        .display_mut()
        .set_controls(state.primary_label(), state.reset_visible());
}

fn main() -> Result<()> {
    // Start logger
    env_logger::init();

    // Read command line arguments
    let args = cli::Args::parse();

    // Create window
    let (event_loop, window, mut pixels) = create_window(&args)?;

    // Create stopwatch
    let mut watch = TimerEngine::new(FrameBuffer::new(), args.hz);
    info!("Stopwatch ready ({} Hz)", args.hz);

    // Start the main loop
    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(key),
                        ..
                    },
                ..
            } => {
                match Control::from_key(key) {
                    Some(Control::Primary) => watch.toggle(Instant::now()),
                    // The reset control only exists once the watch was started
                    Some(Control::Reset) if watch.state().reset_visible() => watch.reset(),
                    Some(Control::Quit) => *control_flow = ControlFlow::Exit,
                    _ => return,
                }

                update_controls(&mut watch);
                window.set_title(&format!(
                    "Stopwatch - {} ({:?})",
                    watch.display().readout(),
                    watch.state()
                ));
            }
            WindowEvent::Resized(physical_size) => {
                pixels.resize_surface(physical_size.width, physical_size.height);
                window.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                pixels.resize_surface(new_inner_size.width, new_inner_size.height);
                window.request_redraw();
            }
            _ => (),
        },
        Event::RedrawRequested(window_id) if window_id == window.id() => {
            watch
                .display_mut()
                .draw(pixels.get_frame_mut(), args.foreground, args.background);

            if let Err(err) = pixels.render() {
                error!("Render failed: {}", err);
                *control_flow = ControlFlow::Exit;
            }
        }
        Event::MainEventsCleared => {
            if matches!(*control_flow, ControlFlow::ExitWithCode(_)) {
                return;
            }

            watch.poll(Instant::now());

            // Redraw the window if the readout or the controls have changed
            if watch.display().should_draw() {
                window.request_redraw();
            }

            // Wake up for the next tick while running, sleep until input otherwise
            *control_flow = match watch.deadline() {
                Some(deadline) => ControlFlow::WaitUntil(deadline),
                None => ControlFlow::Wait,
            };
        }
        _ => (),
    });
}
