// src/puzzle/completion.rs

use super::groups::GroupStore;

/// Dreieckspuzzle: fertig, sobald alle Teile in einer einzigen Gruppe liegen.
/// Eine leere Menge ist nie fertig.
pub fn is_complete(groups: &GroupStore, shard_count: usize) -> bool {
    shard_count > 0 && groups.len() == shard_count && groups.group_count() == 1
}

/// Rasterpuzzle: fertig, sobald jedes Teil auf dem Brett liegt.
pub fn all_placed(placed: &[bool]) -> bool {
    !placed.is_empty() && placed.iter().all(|&p| p)
}
