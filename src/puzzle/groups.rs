// src/puzzle/groups.rs

use super::error::{PuzzleError, PuzzleResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Kennung einer Gruppe fest verbundener Teile.
///
/// Startwert ist der Index des Teils; nach Zusammenführungen trägt eine
/// Gruppe die Kennung der Gruppe, in die sie aufgegangen ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub usize);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Zuordnung Teil → Gruppe.
///
/// Jedes Teil gehört genau einer Gruppe an. Gruppen werden nur
/// zusammengeführt, nie geteilt; ausgenommen ist `reset`, das alle Teile
/// wieder in Einzelgruppen legt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStore {
    group_of: Vec<GroupId>,
}

impl GroupStore {
    /// Jedes Teil `i` bildet seine eigene Gruppe `GroupId(i)`.
    pub fn new(shard_count: usize) -> Self {
        Self {
            group_of: (0..shard_count).map(GroupId).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.group_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group_of.is_empty()
    }

    pub fn group_of(&self, shard: usize) -> PuzzleResult<GroupId> {
        self.group_of
            .get(shard)
            .copied()
            .ok_or(PuzzleError::ShardOutOfRange {
                index: shard,
                len: self.group_of.len(),
            })
    }

    pub fn contains(&self, group: GroupId) -> bool {
        self.group_of.contains(&group)
    }

    /// Alle Teile einer Gruppe, aufsteigend sortiert.
    pub fn members(&self, group: GroupId) -> PuzzleResult<Vec<usize>> {
        let members: Vec<usize> = self
            .group_of
            .iter()
            .enumerate()
            .filter(|&(_, &g)| g == group)
            .map(|(idx, _)| idx)
            .collect();
        if members.is_empty() {
            return Err(PuzzleError::UnknownGroup { group });
        }
        Ok(members)
    }

    /// Legt `absorbed` in `surviving` zusammen.
    ///
    /// Ist beides dieselbe Gruppe, passiert nichts. Danach trägt kein Teil
    /// mehr die Kennung `absorbed`.
    pub fn merge(&mut self, absorbed: GroupId, surviving: GroupId) -> PuzzleResult<()> {
        for group in [absorbed, surviving] {
            if !self.contains(group) {
                return Err(PuzzleError::UnknownGroup { group });
            }
        }
        if absorbed == surviving {
            return Ok(());
        }
        for g in self.group_of.iter_mut().filter(|g| **g == absorbed) {
            *g = surviving;
        }
        Ok(())
    }

    /// Alle aktuell existierenden Gruppen, aufsteigend.
    pub fn all_groups(&self) -> BTreeSet<GroupId> {
        self.group_of.iter().copied().collect()
    }

    pub fn group_count(&self) -> usize {
        self.all_groups().len()
    }

    pub fn is_singleton(&self, group: GroupId) -> bool {
        self.group_of.iter().filter(|&&g| g == group).count() == 1
    }

    /// Alle Teile zurück in Einzelgruppen.
    pub fn reset(&mut self) {
        *self = Self::new(self.group_of.len());
    }
}
