// Seek-and-stop movement toward a clicked point

use glam::Vec2;

use crate::core::math::sanitize_dt;

/// A point in world space (pixels, y up)
pub type Position = Vec2;

/// Distance (in world units) at which the avatar is considered to have arrived
pub const STOP_DISTANCE: f32 = 5.0;

/// Moves a position toward an optional target, one time step at a time
#[derive(Debug, Clone, Default)]
pub struct MotionController {
    target: Option<Position>,
}

impl MotionController {
    pub fn new() -> Self {
        Self { target: None }
    }

    /// Replace the current target, or clear it with `None`
    pub fn set_target(&mut self, target: Option<Position>) {
        self.target = target;
    }

    /// Get the point currently being sought
    pub fn target(&self) -> Option<Position> {
        self.target
    }

    /// Advance `current` toward the target by at most `speed * dt`.
    ///
    /// Returns the next position and whether the target was reached on this
    /// step. Within `STOP_DISTANCE` the result snaps exactly onto the target
    /// and the target is cleared. A step never overshoots.
    pub fn advance(&mut self, current: Position, dt: f32, speed: f32) -> (Position, bool) {
        let Some(target) = self.target else {
            return (current, false);
        };

        let dt = sanitize_dt(dt);
        if dt == 0.0 {
            return (current, false);
        }

        let delta = target - current;
        let dist = delta.length();
        if dist <= STOP_DISTANCE || dist == 0.0 {
            self.target = None;
            return (target, true);
        }

        let step = (speed.max(0.0) * dt).min(dist);
        let direction = delta / dist;
        (current + direction * step, false)
    }
}
