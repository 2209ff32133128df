// src/puzzle/error.rs
use super::groups::GroupId;
use crate::math::MathError;
use thiserror::Error;

/// Verletzte Vorbedingungen der Puzzle-Engine.
///
/// Diese Fehler deuten auf eine Desynchronisation zwischen Darstellungsschicht
/// und Engine-Zustand hin; sie werden sofort zurückgegeben, ohne dass der
/// Zustand teilweise verändert wurde.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    #[error("Unknown group {group}: no shard currently carries this id")]
    UnknownGroup { group: GroupId },

    #[error("Shard index {index} out of range for a set of {len} shards")]
    ShardOutOfRange { index: usize, len: usize },

    #[error("Piece {index} is already placed on the board and cannot be moved")]
    PiecePlaced { index: usize },

    #[error(transparent)]
    Math(#[from] MathError),
}

pub type PuzzleResult<T> = Result<T, PuzzleError>;
