use crate::math::types::Point2D;
use crate::puzzle::{Difficulty, PuzzleConfig, PuzzleSession, ShapeStrategy};
use bevy::prelude::*;

/// Einstellungen, mit denen neue Puzzles erzeugt werden.
#[derive(Resource, Debug, Clone)]
pub struct PuzzleSettings {
    pub config: PuzzleConfig,
    // --- Auswahl im UI ---
    pub difficulty: Difficulty,
    pub strategy: ShapeStrategy,
    /// Größe des (gedachten) Quellbilds in Pixeln.
    pub image_size: Point2D,
    /// Freitext, aus dem per Hash ein neuer Seed wird.
    pub seed_text: String,

    // --- Visualisierung & Debug ---
    pub show_adjacency: bool,
    pub show_board: bool,
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self {
            config: PuzzleConfig::default(),
            difficulty: Difficulty::default(),
            strategy: ShapeStrategy::default(),
            image_size: Point2D::new(640.0, 480.0),
            seed_text: String::new(),
            show_adjacency: false,
            show_board: true,
        }
    }
}

/// Das laufende Puzzle. `None`, solange noch keins erzeugt wurde.
#[derive(Resource, Debug, Default)]
pub struct ActivePuzzle {
    pub session: Option<PuzzleSession>,
}

impl ActivePuzzle {
    pub fn is_complete(&self) -> bool {
        self.session.as_ref().is_some_and(PuzzleSession::is_complete)
    }
}
