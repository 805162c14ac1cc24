// Save/load of the avatar position
//
// The file is a flat JSON record: {"x": 640.0, "y": 360.0}

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::game::Position;

/// Save file errors
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed save file: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Save file holds a non-finite position ({x}, {y})")]
    NonFinite { x: f32, y: f32 },
}

/// On-disk representation of a saved position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub x: f32,
    pub y: f32,
}

impl From<Position> for SaveRecord {
    fn from(position: Position) -> Self {
        Self {
            x: position.x,
            y: position.y,
        }
    }
}

impl SaveRecord {
    /// Convert back to a position, rejecting NaN/infinite coordinates
    pub fn into_position(self) -> Result<Position, SaveError> {
        let position = Vec2::new(self.x, self.y);
        if !position.is_finite() {
            return Err(SaveError::NonFinite {
                x: self.x,
                y: self.y,
            });
        }
        Ok(position)
    }
}

/// Write `position` to `path`, creating parent directories as needed
pub fn save_position(path: impl AsRef<Path>, position: Position) -> Result<(), SaveError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(&SaveRecord::from(position))?;
    fs::write(path, json)?;
    log::debug!(
        "Saved position ({:.1}, {:.1}) to {}",
        position.x,
        position.y,
        path.display()
    );
    Ok(())
}

/// Read a position previously written by `save_position`
pub fn load_position(path: impl AsRef<Path>) -> Result<Position, SaveError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let record: SaveRecord = serde_json::from_str(&content)?;
    let position = record.into_position()?;
    log::debug!(
        "Loaded position ({:.1}, {:.1}) from {}",
        position.x,
        position.y,
        path.display()
    );
    Ok(position)
}
