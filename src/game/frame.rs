// Per-frame update of the avatar: motion plus transient effects

use std::collections::HashMap;

use super::effect::{EffectError, TimedEffect};
use super::motion::{MotionController, Position};

/// Read-only state of one effect for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectState {
    pub active: bool,
    pub progress: f32,
}

impl From<&TimedEffect> for EffectState {
    fn from(effect: &TimedEffect) -> Self {
        Self {
            active: effect.is_active(),
            progress: effect.progress(),
        }
    }
}

/// Everything a renderer needs after a tick
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// Authoritative avatar position
    pub position: Position,
    /// Whether the target was reached on this tick
    pub arrived: bool,
    /// Point still being sought, if any
    pub target: Option<Position>,
    /// Effect name -> state
    pub effects: HashMap<String, EffectState>,
}

impl FrameSnapshot {
    /// Look up an effect by name, treating unknown effects as inactive
    pub fn effect(&self, name: &str) -> EffectState {
        self.effects.get(name).copied().unwrap_or(EffectState {
            active: false,
            progress: 0.0,
        })
    }
}

/// Owns the avatar's position, its motion controller and its named effects.
///
/// Input methods only stage intent; nothing moves or counts down until `tick`.
#[derive(Debug, Clone)]
pub struct FrameUpdater {
    position: Position,
    motion: MotionController,
    effects: HashMap<String, TimedEffect>,
}

impl FrameUpdater {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            motion: MotionController::new(),
            effects: HashMap::new(),
        }
    }

    /// Start seeking `target`
    pub fn on_input_move(&mut self, target: Position) {
        self.motion.set_target(Some(target));
    }

    /// Stop seeking
    pub fn on_input_cancel_move(&mut self) {
        self.motion.set_target(None);
    }

    /// (Re)start the named effect, creating it on first use
    pub fn on_input_trigger_effect(
        &mut self,
        name: &str,
        duration: f32,
    ) -> Result<(), EffectError> {
        match self.effects.get_mut(name) {
            Some(effect) => effect.trigger(duration)?,
            None => {
                let mut effect = TimedEffect::new();
                effect.trigger(duration)?;
                self.effects.insert(name.to_string(), effect);
            }
        }
        log::debug!("Effect '{}' triggered for {}s", name, duration);
        Ok(())
    }

    /// Advance one frame of `dt` seconds moving at `speed` units/second
    pub fn tick(&mut self, dt: f32, speed: f32) -> FrameSnapshot {
        let (next, arrived) = self.motion.advance(self.position, dt, speed);
        self.position = next;
        if arrived {
            log::debug!("Arrived at ({:.1}, {:.1})", next.x, next.y);
        }

        for effect in self.effects.values_mut() {
            effect.advance(dt);
        }

        FrameSnapshot {
            position: self.position,
            arrived,
            target: self.motion.target(),
            effects: self
                .effects
                .iter()
                .map(|(name, effect)| (name.clone(), EffectState::from(effect)))
                .collect(),
        }
    }

    /// Get the avatar's current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Place the avatar (e.g. after loading a save); the current target is kept
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn target(&self) -> Option<Position> {
        self.motion.target()
    }

    pub fn effect(&self, name: &str) -> Option<&TimedEffect> {
        self.effects.get(name)
    }
}
