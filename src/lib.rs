//! Noxy: a top-down action game prototype.
//!
//! The avatar walks toward a mouse-selected point and flashes on attack.
//! `game` holds the pure per-frame simulation; `engine` holds the glue the
//! window loop needs around it (frame timing, input routing, save files).

pub mod core;
pub mod engine;
pub mod game;
