// src/puzzle/snap.rs

use super::adjacency::AdjacencyGraph;
use super::config::PuzzleConfig;
use super::error::{PuzzleError, PuzzleResult};
use super::groups::{GroupId, GroupStore};
use super::placement::Placement;
use super::shard::ShardSet;
use crate::math::{
    geometry::{EndpointPairing, edge_alignment, edges_match},
    types::Point2D,
};
use bevy::log::{debug, trace};

/// Gefundene Kantenübereinstimmung zwischen gezogener und ruhender Gruppe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapMatch {
    /// Teil der gezogenen Gruppe, dessen Kante gepasst hat.
    pub anchor_shard: usize,
    /// Ruhendes Nachbarteil mit der Gegenkante.
    pub neighbor_shard: usize,
    pub pairing: EndpointPairing,
    /// Verschiebung, die auf alle Teile der gezogenen Gruppe angewendet wird.
    pub translation: Point2D,
    /// Gruppe, in der die gezogene Gruppe aufgeht.
    pub target_group: GroupId,
}

/// Ergebnis eines Snap-Versuchs nach dem Loslassen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapOutcome {
    /// Keine passende Kante bzw. Zielposition; die Ablageposition bleibt.
    NoSnap,
    /// Gezogene Gruppe wurde ausgerichtet und in `target_group` übernommen.
    Merged {
        translation: Point2D,
        target_group: GroupId,
        anchor_shard: usize,
    },
    /// Rasterteil liegt jetzt exakt auf seiner Zielposition.
    Placed { shard: usize, translation: Point2D },
}

impl SnapOutcome {
    pub fn is_snapped(&self) -> bool {
        !matches!(self, SnapOutcome::NoSnap)
    }

    /// Teil, das nach dem Einrasten hervorgehoben wird.
    pub fn snapped_shard(&self) -> Option<usize> {
        match *self {
            SnapOutcome::NoSnap => None,
            SnapOutcome::Merged { anchor_shard, .. } => Some(anchor_shard),
            SnapOutcome::Placed { shard, .. } => Some(shard),
        }
    }

    pub fn translation(&self) -> Point2D {
        match *self {
            SnapOutcome::NoSnap => Point2D::ZERO,
            SnapOutcome::Merged { translation, .. } | SnapOutcome::Placed { translation, .. } => {
                translation
            }
        }
    }
}

/// Snapping für beide Strategien.
///
/// Dreiecke: Kanten der gezogenen Gruppe gegen Kanten ihrer Nachbarn.
/// Suchreihenfolge ist fest: Teile der Gruppe aufsteigend, deren Kanten,
/// Nachbarn aufsteigend (ohne Teile der eigenen Gruppe), deren Kanten.
/// Der erste Treffer gewinnt.
///
/// Raster: ein einzelnes Teil rastet ein, wenn seine Position relativ zum
/// Brett auf beiden Achsen strikt näher als `grid_tolerance` an der
/// Zielposition liegt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapEngine {
    pub edge_threshold: f32,
    pub grid_tolerance: f32,
}

impl SnapEngine {
    pub fn new(edge_threshold: f32, grid_tolerance: f32) -> Self {
        Self {
            edge_threshold,
            grid_tolerance,
        }
    }

    pub fn from_config(config: &PuzzleConfig) -> Self {
        Self::new(config.edge_snap_threshold, config.grid_snap_tolerance)
    }

    /// Sucht die erste passende Kante, ohne etwas zu verändern.
    pub fn find_snap(
        &self,
        dragged: GroupId,
        placement: &Placement,
        shard_set: &ShardSet,
        adjacency: &AdjacencyGraph,
        groups: &GroupStore,
    ) -> PuzzleResult<Option<SnapMatch>> {
        let members = groups.members(dragged)?;

        for &anchor in &members {
            let anchor_shard = shard_set.get(anchor)?;
            let anchor_offset = placement.offset(anchor)?;
            let neighbors = adjacency.neighbors(anchor)?;

            for edge in anchor_shard.edges() {
                let moving = edge.translated(anchor_offset);

                for &neighbor in neighbors {
                    let neighbor_group = groups.group_of(neighbor)?;
                    if neighbor_group == dragged {
                        continue;
                    }
                    let neighbor_offset = placement.offset(neighbor)?;

                    for target in shard_set.get(neighbor)?.edges() {
                        let target = target.translated(neighbor_offset);
                        if !edges_match(&moving, &target, self.edge_threshold) {
                            continue;
                        }
                        let alignment = edge_alignment(&moving, &target);
                        trace!(
                            "find_snap: shard {} edge {} matches shard {} edge {} ({:?})",
                            anchor,
                            moving.key(),
                            neighbor,
                            target.key(),
                            alignment.pairing
                        );
                        return Ok(Some(SnapMatch {
                            anchor_shard: anchor,
                            neighbor_shard: neighbor,
                            pairing: alignment.pairing,
                            translation: alignment.translation,
                            target_group: neighbor_group,
                        }));
                    }
                }
            }
        }
        Ok(None)
    }

    /// Sucht eine passende Kante und wendet sie an: Verschiebung der ganzen
    /// gezogenen Gruppe, danach Zusammenführung in die Zielgruppe.
    pub fn attempt_snap(
        &self,
        dragged: GroupId,
        placement: &mut Placement,
        shard_set: &ShardSet,
        adjacency: &AdjacencyGraph,
        groups: &mut GroupStore,
    ) -> PuzzleResult<SnapOutcome> {
        let Some(found) = self.find_snap(dragged, placement, shard_set, adjacency, groups)? else {
            return Ok(SnapOutcome::NoSnap);
        };

        let members = groups.members(dragged)?;
        placement.translate_members(&members, found.translation)?;
        groups.merge(dragged, found.target_group)?;

        debug!(
            "attempt_snap: group {} ({} shards) merged into {} via shards {}/{}",
            dragged,
            members.len(),
            found.target_group,
            found.anchor_shard,
            found.neighbor_shard
        );
        Ok(SnapOutcome::Merged {
            translation: found.translation,
            target_group: found.target_group,
            anchor_shard: found.anchor_shard,
        })
    }

    /// Rastet ein Rasterteil auf dem Brett ein, falls es nah genug liegt.
    ///
    /// Bereits platzierte Teile sind ein Fehler; sie dürfen nicht mehr
    /// bewegt werden.
    pub fn snap_piece(
        &self,
        index: usize,
        placement: &mut Placement,
        shard_set: &ShardSet,
        placed: &mut [bool],
    ) -> PuzzleResult<SnapOutcome> {
        let shard = shard_set.get(index)?;
        let offset = placement.offset(index)?;
        let is_placed = placed.get(index).copied().ok_or(PuzzleError::ShardOutOfRange {
            index,
            len: placed.len(),
        })?;
        if is_placed {
            return Err(PuzzleError::PiecePlaced { index });
        }
        let (Some(cell), Some(board)) = (shard.grid_cell, shard_set.board()) else {
            return Ok(SnapOutcome::NoSnap);
        };

        let board_relative = shard.bounds().min + offset - board.origin;
        let diff = board_relative - cell.correct_offset;
        if diff.x.abs() < self.grid_tolerance && diff.y.abs() < self.grid_tolerance {
            // Teilpolygon liegt in Brettkoordinaten, Brettursprung als Offset
            // legt es exakt auf die Zielposition.
            let translation = board.origin - offset;
            placement.set_offset(index, board.origin)?;
            placed[index] = true;
            debug!(
                "snap_piece: piece {} (row {}, col {}) placed",
                index, cell.row, cell.col
            );
            return Ok(SnapOutcome::Placed {
                shard: index,
                translation,
            });
        }
        Ok(SnapOutcome::NoSnap)
    }
}
