use super::events::*;
use super::resources::{ActivePuzzle, PuzzleSettings};
use super::state::PuzzleState;
use crate::math::probability::SeedResource;
use crate::puzzle::{PuzzleSession, SnapOutcome};
use bevy::prelude::*;

/// Erzeugt bei jedem `RegeneratePuzzleEvent` ein komplett neues Puzzle.
///
/// Schlägt die Erzeugung fehl, bleibt das alte Puzzle bestehen.
pub fn handle_regenerate_system(
    mut events: EventReader<RegeneratePuzzleEvent>,
    settings: Res<PuzzleSettings>,
    mut seed_resource: ResMut<SeedResource>,
    mut active: ResMut<ActivePuzzle>,
    mut next_state: ResMut<NextState<PuzzleState>>,
) {
    for event in events.read() {
        let result = match active.session.as_mut() {
            Some(session) => session.regenerate(
                event.image_size.x,
                event.image_size.y,
                event.difficulty,
                event.strategy,
                &mut seed_resource,
            ),
            None => PuzzleSession::new(
                settings.config.clone(),
                event.image_size.x,
                event.image_size.y,
                event.difficulty,
                event.strategy,
                &mut seed_resource,
            )
            .map(|session| active.session = Some(session)),
        };

        match result {
            Ok(()) => {
                let has_pieces = active
                    .session
                    .as_ref()
                    .is_some_and(|s| !s.shard_set().is_empty());
                next_state.set(if has_pieces {
                    PuzzleState::Playing
                } else {
                    PuzzleState::Empty
                });
            }
            Err(e) => error!("Failed to regenerate puzzle: {}", e),
        }
    }
}

pub fn handle_drag_system(
    mut events: EventReader<GroupDraggedEvent>,
    mut active: ResMut<ActivePuzzle>,
) {
    let Some(session) = active.session.as_mut() else {
        events.clear();
        return;
    };
    for event in events.read() {
        if let Err(e) = session.drag(event.group, event.delta) {
            error!("Drag of group {} rejected: {}", event.group, e);
        }
    }
}

/// Wendet das Loslassen an, meldet Einrasten und Fertigstellung.
pub fn handle_release_system(
    mut events: EventReader<GroupReleasedEvent>,
    mut active: ResMut<ActivePuzzle>,
    mut snapped_writer: EventWriter<ShardsSnappedEvent>,
    mut completed_writer: EventWriter<PuzzleCompletedEvent>,
    mut next_state: ResMut<NextState<PuzzleState>>,
) {
    let Some(session) = active.session.as_mut() else {
        events.clear();
        return;
    };
    for event in events.read() {
        let was_complete = session.is_complete();
        let outcome = match session.release(event.group, event.delta) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Release of group {} rejected: {}", event.group, e);
                continue;
            }
        };

        if let Some(shard) = outcome.snapped_shard() {
            let group = match outcome {
                SnapOutcome::Merged { target_group, .. } => Some(target_group),
                _ => None,
            };
            snapped_writer.send(ShardsSnappedEvent { shard, group });
        }
        if session.is_complete() && !was_complete {
            completed_writer.send(PuzzleCompletedEvent {
                piece_count: session.shard_set().len(),
            });
            next_state.set(PuzzleState::Completed);
        }
    }
}

pub fn handle_shuffle_reset_system(
    mut shuffle_events: EventReader<ShufflePiecesEvent>,
    mut reset_events: EventReader<ResetPuzzleEvent>,
    mut seed_resource: ResMut<SeedResource>,
    mut active: ResMut<ActivePuzzle>,
    mut next_state: ResMut<NextState<PuzzleState>>,
) {
    let Some(session) = active.session.as_mut() else {
        shuffle_events.clear();
        reset_events.clear();
        return;
    };
    for _ in shuffle_events.read() {
        if let Err(e) = session.shuffle(&mut seed_resource) {
            error!("Shuffle failed: {}", e);
        }
    }
    for _ in reset_events.read() {
        session.reset(&mut seed_resource);
        if !session.shard_set().is_empty() {
            next_state.set(PuzzleState::Playing);
        }
    }
}

/// Zählt die Anzeigedauer der Snap-Markierung herunter.
pub fn tick_snap_highlight_system(time: Res<Time>, mut active: ResMut<ActivePuzzle>) {
    if let Some(session) = active.session.as_mut() {
        session.tick(time.delta());
    }
}
