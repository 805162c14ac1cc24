// Engine modules: frame timing, input, save files

pub mod game_loop;
pub mod input;
pub mod save;
