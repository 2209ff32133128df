use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum PuzzleState {
    #[default] // Startzustand, noch kein Puzzle erzeugt
    Empty,
    Playing,
    Completed,
}
