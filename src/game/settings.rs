// Game settings - fixed for now, tuned for the single avatar prototype

/// Window and gameplay tuning values
#[derive(Debug, Clone)]
pub struct GameSettings {
    // Window
    /// Window title
    pub title: &'static str,
    /// Initial window width in logical pixels
    pub window_width: u32,
    /// Initial window height in logical pixels
    pub window_height: u32,

    // Avatar
    /// Movement speed (units/second)
    pub move_speed: f32,
    /// How long the attack flash lasts (seconds)
    pub attack_flash_time: f32,

    // Persistence
    /// Where F5/F9 save and load the avatar position
    pub save_path: &'static str,
}

/// Name of the effect triggered by the attack input
pub const ATTACK_EFFECT: &str = "attack";

pub const DEFAULT_SETTINGS: GameSettings = GameSettings {
    title: "Noxy",
    window_width: 1280,
    window_height: 720,

    move_speed: 220.0,
    attack_flash_time: 0.15,

    save_path: "saves/noxy.json",
};

impl Default for GameSettings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

impl GameSettings {
    /// Get the standard settings
    pub fn standard() -> Self {
        DEFAULT_SETTINGS
    }

    /// Where the avatar starts: the centre of the window
    pub fn spawn_point(&self) -> glam::Vec2 {
        glam::Vec2::new(
            self.window_width as f32 * 0.5,
            self.window_height as f32 * 0.5,
        )
    }
}
