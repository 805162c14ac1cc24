// Input router - turns window events into avatar intents

use super::action::{Action, InputSource};
use super::config::InputBindings;
use crate::game::{FrameUpdater, Position, ATTACK_EFFECT};
use glam::Vec2;
use std::collections::HashSet;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Requests the router cannot satisfy itself; handled by the host loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Save,
    Load,
    TogglePause,
    Quit,
}

/// Routes bound inputs to a `FrameUpdater`.
///
/// While any Move source is held the avatar keeps seeking the cursor;
/// releasing the last one cancels the walk.
#[derive(Debug)]
pub struct InputRouter {
    bindings: InputBindings,

    /// Move sources currently held down
    held_move: HashSet<InputSource>,

    /// Last cursor position in world space
    cursor: Position,

    /// Duration handed to the attack effect
    attack_flash_time: f32,
}

impl InputRouter {
    pub fn new(bindings: InputBindings, attack_flash_time: f32) -> Self {
        Self {
            bindings,
            held_move: HashSet::new(),
            cursor: Vec2::ZERO,
            attack_flash_time,
        }
    }

    fn is_moving(&self) -> bool {
        !self.held_move.is_empty()
    }

    /// Track the cursor; retargets the avatar while Move is held
    pub fn on_cursor_moved(&mut self, world: Position, updater: &mut FrameUpdater) {
        self.cursor = world;
        if self.is_moving() {
            updater.on_input_move(world);
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(
        &mut self,
        event: &KeyEvent,
        updater: &mut FrameUpdater,
    ) -> Option<Command> {
        // Key repeats would re-trigger one-shot actions
        if event.repeat {
            return None;
        }
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return None;
        };
        self.handle(
            InputSource::key(key_code),
            event.state == ElementState::Pressed,
            updater,
        )
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
        updater: &mut FrameUpdater,
    ) -> Option<Command> {
        self.handle(
            InputSource::mouse(button),
            state == ElementState::Pressed,
            updater,
        )
    }

    /// Apply a press or release of `source`
    pub fn handle(
        &mut self,
        source: InputSource,
        pressed: bool,
        updater: &mut FrameUpdater,
    ) -> Option<Command> {
        let action = self.bindings.action_for(source)?;

        match (action, pressed) {
            (Action::Move, true) => {
                self.held_move.insert(source);
                updater.on_input_move(self.cursor);
                None
            }
            (Action::Move, false) => {
                if self.held_move.remove(&source) && !self.is_moving() {
                    updater.on_input_cancel_move();
                }
                None
            }
            (Action::Attack, true) => {
                let duration = self.attack_flash_time;
                if let Err(e) = updater.on_input_trigger_effect(ATTACK_EFFECT, duration) {
                    log::warn!("Attack ignored: {}", e);
                }
                None
            }
            (Action::Save, true) => Some(Command::Save),
            (Action::Load, true) => Some(Command::Load),
            (Action::Pause, true) => Some(Command::TogglePause),
            (Action::Quit, true) => Some(Command::Quit),
            (_, false) => None,
        }
    }
}

/// Convert a physical cursor position (origin top-left, y down) into world
/// space: logical pixels, origin bottom-left, y up
pub fn window_to_world(
    cursor: PhysicalPosition<f64>,
    inner_size: PhysicalSize<u32>,
    scale_factor: f64,
) -> Position {
    let cursor = cursor.to_logical::<f64>(scale_factor);
    let height = inner_size.to_logical::<f64>(scale_factor).height;
    Vec2::new(cursor.x as f32, (height - cursor.y) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSettings;
    use winit::dpi::LogicalSize;
    use winit::keyboard::KeyCode;

    fn router() -> InputRouter {
        InputRouter::new(InputBindings::default(), 0.15)
    }

    const RMB: InputSource = InputSource::Mouse(MouseButton::Right);
    const LMB: InputSource = InputSource::Mouse(MouseButton::Left);

    #[test]
    fn test_move_press_targets_cursor() {
        let mut router = router();
        let mut updater = FrameUpdater::new(Vec2::ZERO);
        router.on_cursor_moved(Vec2::new(300.0, 200.0), &mut updater);
        assert_eq!(updater.target(), None);

        router.handle(RMB, true, &mut updater);
        assert_eq!(updater.target(), Some(Vec2::new(300.0, 200.0)));
    }

    #[test]
    fn test_drag_retargets_and_release_cancels() {
        let mut router = router();
        let mut updater = FrameUpdater::new(Vec2::ZERO);
        router.handle(RMB, true, &mut updater);
        router.on_cursor_moved(Vec2::new(50.0, 60.0), &mut updater);
        assert_eq!(updater.target(), Some(Vec2::new(50.0, 60.0)));

        router.handle(RMB, false, &mut updater);
        assert_eq!(updater.target(), None);

        router.on_cursor_moved(Vec2::new(70.0, 80.0), &mut updater);
        assert_eq!(updater.target(), None);

        // The next press starts from the last tracked cursor position
        router.handle(RMB, true, &mut updater);
        assert_eq!(updater.target(), Some(Vec2::new(70.0, 80.0)));
    }

    #[test]
    fn test_walk_continues_while_another_move_source_held() {
        let mut bindings = InputBindings::default();
        let key_m = InputSource::key(KeyCode::KeyM);
        bindings.bind(key_m, Action::Move);
        let mut router = InputRouter::new(bindings, 0.15);
        let mut updater = FrameUpdater::new(Vec2::ZERO);

        router.on_cursor_moved(Vec2::new(40.0, 40.0), &mut updater);
        router.handle(RMB, true, &mut updater);
        router.handle(key_m, true, &mut updater);

        router.handle(RMB, false, &mut updater);
        assert_eq!(updater.target(), Some(Vec2::new(40.0, 40.0)));
        router.on_cursor_moved(Vec2::new(90.0, 10.0), &mut updater);
        assert_eq!(updater.target(), Some(Vec2::new(90.0, 10.0)));

        router.handle(key_m, false, &mut updater);
        assert_eq!(updater.target(), None);
    }

    #[test]
    fn test_release_without_press_keeps_target() {
        let mut router = router();
        let mut updater = FrameUpdater::new(Vec2::ZERO);
        updater.on_input_move(Vec2::new(5.0, 500.0));
        router.handle(RMB, false, &mut updater);
        assert_eq!(updater.target(), Some(Vec2::new(5.0, 500.0)));
    }

    #[test]
    fn test_attack_triggers_effect() {
        let mut router = router();
        let mut updater = FrameUpdater::new(Vec2::ZERO);
        assert_eq!(router.handle(LMB, true, &mut updater), None);

        let attack = updater.effect(ATTACK_EFFECT).unwrap();
        assert!(attack.is_active());
        assert_eq!(attack.duration(), 0.15);
    }

    #[test]
    fn test_bad_flash_time_is_logged_not_fatal() {
        let mut router = InputRouter::new(InputBindings::default(), 0.0);
        let mut updater = FrameUpdater::new(Vec2::ZERO);
        assert_eq!(router.handle(LMB, true, &mut updater), None);
        assert!(updater.effect(ATTACK_EFFECT).is_none());
    }

    #[test]
    fn test_meta_commands() {
        let mut router = router();
        let mut updater = FrameUpdater::new(Vec2::ZERO);
        let cases = [
            (KeyCode::F5, Command::Save),
            (KeyCode::F9, Command::Load),
            (KeyCode::KeyP, Command::TogglePause),
            (KeyCode::Escape, Command::Quit),
        ];
        for (key, command) in cases {
            let source = InputSource::key(key);
            assert_eq!(router.handle(source, true, &mut updater), Some(command));
            assert_eq!(router.handle(source, false, &mut updater), None);
        }
    }

    #[test]
    fn test_unbound_source_ignored() {
        let mut router = router();
        let mut updater = FrameUpdater::new(Vec2::ZERO);
        let source = InputSource::mouse(MouseButton::Middle);
        assert_eq!(router.handle(source, true, &mut updater), None);
        assert_eq!(updater.target(), None);
    }

    #[test]
    fn test_window_to_world_flips_y() {
        let size = PhysicalSize::new(1280, 720);
        assert_eq!(
            window_to_world(PhysicalPosition::new(100.0, 20.0), size, 1.0),
            Vec2::new(100.0, 700.0)
        );
        assert_eq!(
            window_to_world(PhysicalPosition::new(0.0, 720.0), size, 1.0),
            Vec2::ZERO
        );
    }

    #[test]
    fn test_window_to_world_uses_logical_pixels() {
        let settings = GameSettings::standard();
        let scale_factor = 2.0;
        let logical = LogicalSize::new(settings.window_width, settings.window_height);
        let size: PhysicalSize<u32> = logical.to_physical(scale_factor);
        let centre = PhysicalPosition::new(size.width as f64 / 2.0, size.height as f64 / 2.0);

        assert_eq!(
            window_to_world(centre, size, scale_factor),
            settings.spawn_point()
        );
    }
}
