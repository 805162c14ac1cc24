use anyhow::Result;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use noxy::engine::game_loop::FrameClock;
use noxy::engine::input::{window_to_world, Command, InputBindings, InputRouter};
use noxy::engine::save;
use noxy::game::{AvatarView, FrameUpdater, GameSettings};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Noxy...");

    let settings = GameSettings::standard();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(settings.title)
        .with_inner_size(winit::dpi::LogicalSize::new(
            settings.window_width,
            settings.window_height,
        ))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");
    info!("RMB: hold to move  |  LMB: attack  |  F5/F9: save/load  |  P: pause");

    let mut updater = FrameUpdater::new(settings.spawn_point());
    let mut router = InputRouter::new(InputBindings::default(), settings.attack_flash_time);
    let mut clock = FrameClock::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| {
            let command = match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => Some(Command::Quit),
                Event::WindowEvent {
                    event: WindowEvent::Resized(physical_size),
                    ..
                } => {
                    info!("Window resized to {:?}", physical_size);
                    None
                }
                Event::WindowEvent {
                    event: WindowEvent::CursorMoved { position, .. },
                    ..
                } => {
                    let world =
                        window_to_world(position, window.inner_size(), window.scale_factor());
                    router.on_cursor_moved(world, &mut updater);
                    None
                }
                Event::WindowEvent {
                    event: WindowEvent::MouseInput { state, button, .. },
                    ..
                } => router.process_mouse_button(button, state, &mut updater),
                Event::WindowEvent {
                    event: WindowEvent::KeyboardInput { event, .. },
                    ..
                } => router.process_keyboard_event(&event, &mut updater),
                Event::WindowEvent {
                    event: WindowEvent::RedrawRequested,
                    ..
                } => {
                    let dt = clock.begin_frame();
                    let snapshot = updater.tick(dt, settings.move_speed);
                    let view = AvatarView::from_snapshot(&snapshot);
                    log::trace!(
                        "Frame {} ({:.0} fps): {:?}",
                        clock.frame_count(),
                        clock.fps(),
                        view
                    );
                    None
                }
                Event::AboutToWait => {
                    // Request redraw on next frame
                    window.request_redraw();
                    None
                }
                _ => None,
            };

            match command {
                Some(Command::Save) => {
                    if let Err(e) = save::save_position(settings.save_path, updater.position()) {
                        log::warn!("Save failed: {}", e);
                    } else {
                        info!("Game saved to {}", settings.save_path);
                    }
                }
                Some(Command::Load) => match save::load_position(settings.save_path) {
                    Ok(position) => {
                        updater.set_position(position);
                        updater.on_input_cancel_move();
                        info!("Game loaded from {}", settings.save_path);
                    }
                    Err(e) => log::warn!("Load failed: {}", e),
                },
                Some(Command::TogglePause) => clock.toggle_pause(),
                Some(Command::Quit) => {
                    info!(
                        "Shutting down after {} frames ({:.1}s)...",
                        clock.frame_count(),
                        clock.elapsed_secs()
                    );
                    elwt.exit();
                }
                None => {}
            }
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
