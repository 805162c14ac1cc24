// What the renderer should draw for the avatar this frame

use crate::core::math::lerp;

use super::frame::FrameSnapshot;
use super::motion::Position;
use super::settings::ATTACK_EFFECT;

/// Avatar body radius
pub const AVATAR_RADIUS: f32 = 14.0;
/// Attack ring radius right after the attack
pub const ATTACK_RING_START: f32 = 18.0;
/// Attack ring radius just before the flash ends
pub const ATTACK_RING_END: f32 = 38.0;
/// Half length of the target cross-hair arms
pub const TARGET_MARKER_SIZE: f32 = 14.0;

/// Presentation model derived from a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarView {
    pub position: Position,
    /// Where to draw the move-target marker
    pub target_marker: Option<Position>,
    /// Radius of the expanding attack ring, while the flash is showing
    pub attack_ring_radius: Option<f32>,
}

impl AvatarView {
    pub fn from_snapshot(snapshot: &FrameSnapshot) -> Self {
        let attack = snapshot.effect(ATTACK_EFFECT);
        let attack_ring_radius = attack
            .active
            .then(|| lerp(ATTACK_RING_START, ATTACK_RING_END, attack.progress));

        Self {
            position: snapshot.position,
            target_marker: snapshot.target,
            attack_ring_radius,
        }
    }
}
