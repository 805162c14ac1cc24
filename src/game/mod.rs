// Avatar simulation
//
// Pure game logic with no rendering or I/O:
// - Seek-and-stop motion toward a clicked point
// - Countdown timers for transient effects (attack flash)
// - The per-frame updater composing both
// - Presentation model consumed by a renderer
// - Fixed game settings

pub mod effect;
pub mod frame;
pub mod motion;
pub mod settings;
pub mod view;

// Re-export commonly used types
pub use effect::{EffectError, TimedEffect};
pub use frame::{EffectState, FrameSnapshot, FrameUpdater};
pub use motion::{MotionController, Position, STOP_DISTANCE};
pub use settings::{GameSettings, ATTACK_EFFECT};
pub use view::AvatarView;
