// src/game/events.rs
use crate::math::types::Point2D;
use crate::puzzle::{Difficulty, GroupId, ShapeStrategy};
use bevy::prelude::*;

/// Baut ein neues Puzzle für ein Bild der Größe `image_size`.
#[derive(Event, Debug, Clone, Copy)]
pub struct RegeneratePuzzleEvent {
    pub image_size: Point2D,
    pub difficulty: Difficulty,
    pub strategy: ShapeStrategy,
}

/// Zwischenschritt beim Ziehen einer Gruppe (Puzzlekoordinaten).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GroupDraggedEvent {
    pub group: GroupId,
    pub delta: Point2D,
}

/// Letzte Verschiebung beim Loslassen; löst den Snap-Versuch aus.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GroupReleasedEvent {
    pub group: GroupId,
    pub delta: Point2D,
}

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ShufflePiecesEvent;

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetPuzzleEvent;

/// Ein Teil ist eingerastet. `group` ist nur bei Dreieckspuzzles gesetzt.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ShardsSnappedEvent {
    pub shard: usize,
    pub group: Option<GroupId>,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleCompletedEvent {
    pub piece_count: usize,
}
