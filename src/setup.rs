// ./src/setup.rs
use crate::game::events::RegeneratePuzzleEvent;
use crate::game::resources::PuzzleSettings;
use bevy::prelude::*;

/// Kamera und erstes Puzzle.
pub fn setup_scene(
    mut commands: Commands,
    settings: Res<PuzzleSettings>,
    mut regenerate_writer: EventWriter<RegeneratePuzzleEvent>,
) {
    commands.spawn(Camera2dBundle::default());

    regenerate_writer.send(RegeneratePuzzleEvent {
        image_size: settings.image_size,
        difficulty: settings.difficulty,
        strategy: settings.strategy,
    });
}
