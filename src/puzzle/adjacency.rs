// src/puzzle/adjacency.rs

use super::error::{PuzzleError, PuzzleResult};
use super::shard::ShardSet;
use crate::math::geometry::EdgeKey;
use bevy::log::debug;
use std::collections::{BTreeSet, HashMap};

/// Nachbarschaft der Teile über gemeinsame Kanten.
///
/// Wird einmal pro `ShardSet` gebaut und danach nicht mehr verändert.
/// Nachbarn sind aufsteigend sortiert; die Snap-Suche nutzt genau diese
/// Reihenfolge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighbors: Vec<BTreeSet<usize>>,
}

impl AdjacencyGraph {
    /// Baut den Graphen aus den exakten Kantenschlüsseln aller Teile.
    pub fn build(shard_set: &ShardSet) -> Self {
        let mut edge_owners: HashMap<EdgeKey, Vec<usize>> = HashMap::new();
        for (idx, shard) in shard_set.iter().enumerate() {
            for edge in shard.edges() {
                edge_owners.entry(edge.key()).or_default().push(idx);
            }
        }

        let mut neighbors = vec![BTreeSet::new(); shard_set.len()];
        for owners in edge_owners.values() {
            for &a in owners {
                for &b in owners {
                    if a != b {
                        neighbors[a].insert(b);
                    }
                }
            }
        }

        let graph = Self { neighbors };
        debug!(
            "AdjacencyGraph::build: {} shards, {} distinct edges, {} adjacent pairs",
            shard_set.len(),
            edge_owners.len(),
            graph.pair_count()
        );
        graph
    }

    pub fn neighbors(&self, index: usize) -> PuzzleResult<&BTreeSet<usize>> {
        self.neighbors.get(index).ok_or(PuzzleError::ShardOutOfRange {
            index,
            len: self.neighbors.len(),
        })
    }

    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors.get(a).is_some_and(|set| set.contains(&b))
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Anzahl ungeordneter Nachbarpaare.
    pub fn pair_count(&self) -> usize {
        self.neighbors.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Alle ungeordneten Paare `(a, b)` mit `a < b`, z.B. für Debug-Darstellungen.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(a, set)| {
            set.iter().copied().filter(move |&b| a < b).map(move |b| (a, b))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{probability::SeedResource, types::Point2D};
    use crate::puzzle::{
        config::{Difficulty, PuzzleConfig, ShapeStrategy},
        generator::ShapeGenerator,
        shard::Shard,
    };

    fn two_triangles() -> ShardSet {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(10.0, 0.0);
        let c = Point2D::new(10.0, 10.0);
        let d = Point2D::new(0.0, 10.0);
        ShardSet::new(
            ShapeStrategy::Triangulated,
            crate::math::types::Bounds2D::from_size(10.0, 10.0),
            vec![Shard::triangle(a, b, c), Shard::triangle(a, c, d)],
            None,
        )
    }

    #[test]
    fn test_shared_edge_makes_neighbors() {
        let graph = AdjacencyGraph::build(&two_triangles());
        assert!(graph.are_adjacent(0, 1));
        assert!(graph.are_adjacent(1, 0));
        assert_eq!(graph.pair_count(), 1);
        assert_eq!(graph.pairs().collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn test_touching_corner_is_not_an_edge() {
        let set = ShardSet::new(
            ShapeStrategy::Triangulated,
            crate::math::types::Bounds2D::from_size(20.0, 20.0),
            vec![
                Shard::triangle(
                    Point2D::new(0.0, 0.0),
                    Point2D::new(10.0, 0.0),
                    Point2D::new(10.0, 10.0),
                ),
                Shard::triangle(
                    Point2D::new(10.0, 10.0),
                    Point2D::new(20.0, 10.0),
                    Point2D::new(20.0, 20.0),
                ),
            ],
            None,
        );
        let graph = AdjacencyGraph::build(&set);
        assert!(!graph.are_adjacent(0, 1));
        assert!(graph.neighbors(0).unwrap().is_empty());
    }

    #[test]
    fn test_adjacency_is_symmetric_for_generated_sets() {
        let generator = ShapeGenerator::new(PuzzleConfig::default()).unwrap();
        for seed in 0..5 {
            for strategy in ShapeStrategy::ALL {
                let set = generator
                    .generate(
                        900.0,
                        600.0,
                        Difficulty::Hard,
                        strategy,
                        &mut SeedResource::from_seed(seed),
                    )
                    .unwrap();
                let graph = AdjacencyGraph::build(&set);
                for i in 0..graph.len() {
                    assert!(!graph.neighbors(i).unwrap().is_empty());
                    for &j in graph.neighbors(i).unwrap() {
                        assert!(graph.are_adjacent(j, i), "{} -> {} not symmetric", i, j);
                    }
                }
            }
        }
    }

    #[test]
    fn test_grid_neighbors_are_orthogonal() {
        let generator = ShapeGenerator::new(PuzzleConfig::default()).unwrap();
        let set = generator
            .generate(
                300.0,
                300.0,
                Difficulty::Easy,
                ShapeStrategy::Grid,
                &mut SeedResource::from_seed(1),
            )
            .unwrap();
        let graph = AdjacencyGraph::build(&set);
        // Mitte eines 3x3-Rasters hat vier Nachbarn
        assert_eq!(
            graph.neighbors(4).unwrap().iter().copied().collect::<Vec<_>>(),
            vec![1, 3, 5, 7]
        );
        assert_eq!(graph.pair_count(), 12);
    }

    #[test]
    fn test_unknown_index_is_reported() {
        let graph = AdjacencyGraph::build(&two_triangles());
        assert_eq!(
            graph.neighbors(5),
            Err(PuzzleError::ShardOutOfRange { index: 5, len: 2 })
        );
    }
}
