// src/game/mod.rs
pub mod events;
pub mod plugin;
pub mod resources;
pub mod state;
pub mod systems;

pub use plugin::PuzzlePlugin;
