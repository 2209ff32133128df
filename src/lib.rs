pub mod debug;
pub mod game;
pub mod input;
pub mod math;
pub mod puzzle;
pub mod setup;
