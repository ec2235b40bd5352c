use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use platform_sim::game::BASE_STATS;
use platform_sim::{InputConfig, InputState, Level, TickClock};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting platform-sim...");

    // Optional level file as the first argument
    let level = match std::env::args().nth(1) {
        Some(path) => {
            Level::load(&path).with_context(|| format!("could not load level from {path}"))?
        }
        None => Level::default(),
    };
    let surface = level.surface_size as u32;

    let mut actor = level.spawn_actor("Alex", BASE_STATS);
    let mut input = InputState::new(InputConfig::default());
    let mut clock = TickClock::new();
    let mut death_reported = false;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("platform-sim")
        .with_inner_size(winit::dpi::LogicalSize::new(surface, surface))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created, {} obstacles loaded", actor.obstacles().len());

    event_loop
        .run(move |event, elwt| {
            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                Event::WindowEvent {
                    event: WindowEvent::KeyboardInput { event, .. },
                    ..
                } => {
                    input.process_keyboard_event(&event);
                    if input.quit_requested() {
                        info!("Quit requested, shutting down...");
                        elwt.exit();
                    }
                }
                Event::WindowEvent {
                    event: WindowEvent::Focused(false),
                    ..
                } => {
                    // Keys released while unfocused never reach us
                    input.clear();
                }
                Event::AboutToWait => {
                    // The actor only steps while alive; afterwards the frame
                    // just shows the death message
                    for _ in 0..clock.begin_frame() {
                        if !actor.is_alive() {
                            break;
                        }
                        input.apply(&mut actor);
                        actor.update();
                    }

                    if !actor.is_alive() && !death_reported {
                        info!("You died.");
                        debug!("{actor}");
                        death_reported = true;
                    }

                    elwt.set_control_flow(ControlFlow::WaitUntil(
                        Instant::now() + clock.tick_duration(),
                    ));
                    window.request_redraw();
                }
                _ => {}
            }
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
