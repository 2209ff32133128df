use super::events::*;
use super::resources::{ActivePuzzle, PuzzleSettings};
use super::state::PuzzleState;
use super::systems::*;
use crate::math::probability::SeedResource;
use bevy::prelude::*;

/// Registriert Puzzle-Zustand, Events und die verarbeitenden Systeme.
///
/// Alle Änderungen am Puzzle laufen in `Update` in fester Reihenfolge, ein
/// Snap-Versuch sieht also immer den vollständigen Zustand.
pub struct PuzzlePlugin;

impl Plugin for PuzzlePlugin {
    fn build(&self, app: &mut App) {
        if !app.world.contains_resource::<SeedResource>() {
            app.init_resource::<SeedResource>();
        }
        app.init_resource::<PuzzleSettings>()
            .init_resource::<ActivePuzzle>()
            .init_state::<PuzzleState>()
            .add_event::<RegeneratePuzzleEvent>()
            .add_event::<GroupDraggedEvent>()
            .add_event::<GroupReleasedEvent>()
            .add_event::<ShufflePiecesEvent>()
            .add_event::<ResetPuzzleEvent>()
            .add_event::<ShardsSnappedEvent>()
            .add_event::<PuzzleCompletedEvent>()
            .add_systems(
                Update,
                (
                    handle_regenerate_system,
                    handle_drag_system,
                    handle_release_system,
                    handle_shuffle_reset_system,
                    tick_snap_highlight_system,
                )
                    .chain(),
            );
    }
}
