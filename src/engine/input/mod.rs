// Input handling system
//
// Translates winit keyboard and mouse events into avatar intents.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `config`: Binding table and remapping
// - `router`: Feeds bound inputs to the `FrameUpdater`
//
// ## Usage Example
//
// ```rust
// let mut router = InputRouter::new(InputBindings::default(), 0.15);
//
// // In your event loop
// let world = window_to_world(position, window.inner_size(), window.scale_factor());
// router.on_cursor_moved(world, &mut updater);
// if let Some(command) = router.process_mouse_button(button, state, &mut updater) {
//     // Save, Load, TogglePause or Quit
// }
// ```

pub mod action;
pub mod config;
pub mod router;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::InputBindings;
pub use router::{window_to_world, Command, InputRouter};
