// src/puzzle/placement.rs

use super::config::{PuzzleConfig, ShapeStrategy};
use super::error::{PuzzleError, PuzzleResult};
use super::shard::{Shard, ShardSet};
use crate::math::{
    probability::SeedResource,
    types::{Bounds2D, Point2D},
};
use bevy::log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Aktuelle Verschiebung jedes Teils in der Spielfläche.
///
/// Die Bildschirmlage eines Teils ist `vertex + offset` für jeden seiner
/// Eckpunkte. Teile derselben Gruppe werden immer gemeinsam verschoben.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    offsets: Vec<Point2D>,
}

impl Placement {
    /// Alle Teile an ihrer Ursprungslage.
    pub fn identity(shard_count: usize) -> Self {
        Self {
            offsets: vec![Point2D::ZERO; shard_count],
        }
    }

    pub fn from_offsets(offsets: Vec<Point2D>) -> Self {
        Self { offsets }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn offsets(&self) -> &[Point2D] {
        &self.offsets
    }

    pub fn offset(&self, shard: usize) -> PuzzleResult<Point2D> {
        self.offsets
            .get(shard)
            .copied()
            .ok_or(PuzzleError::ShardOutOfRange {
                index: shard,
                len: self.offsets.len(),
            })
    }

    pub fn set_offset(&mut self, shard: usize, offset: Point2D) -> PuzzleResult<()> {
        let len = self.offsets.len();
        let slot = self
            .offsets
            .get_mut(shard)
            .ok_or(PuzzleError::ShardOutOfRange { index: shard, len })?;
        *slot = offset;
        Ok(())
    }

    /// Verschiebt alle genannten Teile um `delta`.
    ///
    /// Indizes werden vorab geprüft; bei einem ungültigen Index bleibt die
    /// Lage unverändert.
    pub fn translate_members(&mut self, members: &[usize], delta: Point2D) -> PuzzleResult<()> {
        if let Some(&index) = members.iter().find(|&&i| i >= self.offsets.len()) {
            return Err(PuzzleError::ShardOutOfRange {
                index,
                len: self.offsets.len(),
            });
        }
        for &i in members {
            self.offsets[i] += delta;
        }
        Ok(())
    }

    /// Eckpunkte eines Teils in Weltkoordinaten.
    pub fn world_vertices(&self, shard_set: &ShardSet, shard: usize) -> PuzzleResult<Vec<Point2D>> {
        Ok(shard_set.get(shard)?.translated_vertices(self.offset(shard)?))
    }

    /// Oberstes Teil (höchster Index) unter einem Weltpunkt.
    pub fn shard_at(&self, shard_set: &ShardSet, point: Point2D) -> Option<usize> {
        shard_set
            .iter()
            .zip(&self.offsets)
            .enumerate()
            .rev()
            .find(|(_, (shard, offset))| shard.contains_world_point(**offset, point))
            .map(|(idx, _)| idx)
    }
}

/// Verteilt alle Teile zufällig in der Spielfläche.
pub fn scatter_all(
    shard_set: &ShardSet,
    config: &PuzzleConfig,
    seed_resource: &mut SeedResource,
) -> Placement {
    let offsets = shard_set
        .iter()
        .map(|shard| scatter_offset(shard_set, shard, config, seed_resource))
        .collect();
    debug!("scatter_all: {} shards scattered", shard_set.len());
    Placement::from_offsets(offsets)
}

/// Verteilt nur die genannten Teile neu, alle anderen behalten ihre Lage.
pub fn rescatter(
    placement: &mut Placement,
    shard_set: &ShardSet,
    indices: &[usize],
    config: &PuzzleConfig,
    seed_resource: &mut SeedResource,
) -> PuzzleResult<()> {
    let mut updates = Vec::with_capacity(indices.len());
    for &index in indices {
        placement.offset(index)?;
        let shard = shard_set.get(index)?;
        updates.push((index, scatter_offset(shard_set, shard, config, seed_resource)));
    }
    for (index, offset) in updates {
        placement.set_offset(index, offset)?;
    }
    Ok(())
}

/// Zufällige Verschiebung für ein einzelnes Teil, je nach Strategie.
pub fn scatter_offset(
    shard_set: &ShardSet,
    shard: &Shard,
    config: &PuzzleConfig,
    seed_resource: &mut SeedResource,
) -> Point2D {
    match (shard_set.strategy(), shard_set.board()) {
        (ShapeStrategy::Grid, Some(board)) => {
            let top_left = scatter_outside_board(
                shard.bounds().size(),
                &board.screen_bounds(),
                config,
                seed_resource,
            );
            top_left - shard.bounds().min
        }
        _ => scatter_inside_play_area(&shard.bounds(), config, seed_resource),
    }
}

/// Verschiebung, bei der die Bounding Box vollständig in der Spielfläche liegt.
///
/// Ist das Teil breiter als die Fläche, bleibt ein Spielraum von einer Einheit.
fn scatter_inside_play_area(
    bounds: &Bounds2D,
    config: &PuzzleConfig,
    seed_resource: &mut SeedResource,
) -> Point2D {
    let play = config.play_area_size;
    let lo = -bounds.min;
    let span = Point2D::new(
        (play.x - bounds.width()).max(1.0),
        (play.y - bounds.height()).max(1.0),
    );
    seed_resource.next_point_in(lo, lo + span)
}

/// Linke obere Ecke für ein Rasterteil außerhalb des (erweiterten) Bretts.
///
/// Verwirft Kandidaten, deren Rechteck das Brett plus Freiraum schneidet.
/// Nach `scatter_attempts` Fehlversuchen wird der letzte Kandidat genommen.
fn scatter_outside_board(
    piece_size: Point2D,
    board: &Bounds2D,
    config: &PuzzleConfig,
    seed_resource: &mut SeedResource,
) -> Point2D {
    let max = config.play_area_size - Point2D::splat(config.scatter_padding) - piece_size;
    let max = max.max(Point2D::ZERO);
    let keep_out = board.expand(config.board_clearance);

    let mut candidate = Point2D::ZERO;
    for _ in 0..config.scatter_attempts {
        candidate = seed_resource.next_point_in(Point2D::ZERO, max);
        let rect = Bounds2D::from_points(candidate, candidate + piece_size);
        if !rect.intersects(&keep_out) {
            return candidate;
        }
    }
    warn!(
        "scatter_outside_board: no free spot after {} attempts, using {:?}",
        config.scatter_attempts, candidate
    );
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::config::Difficulty;
    use crate::puzzle::generator::ShapeGenerator;

    fn generate(strategy: ShapeStrategy, difficulty: Difficulty) -> ShardSet {
        ShapeGenerator::new(PuzzleConfig::default())
            .unwrap()
            .generate(600.0, 400.0, difficulty, strategy, &mut SeedResource::from_seed(3))
            .unwrap()
    }

    #[test]
    fn test_translate_members_moves_only_members() {
        let mut placement = Placement::identity(3);
        placement
            .translate_members(&[0, 2], Point2D::new(5.0, -1.0))
            .unwrap();
        assert_eq!(placement.offset(0).unwrap(), Point2D::new(5.0, -1.0));
        assert_eq!(placement.offset(1).unwrap(), Point2D::ZERO);
        assert_eq!(placement.offset(2).unwrap(), Point2D::new(5.0, -1.0));
    }

    #[test]
    fn test_translate_members_rejects_bad_index_without_change() {
        let mut placement = Placement::identity(2);
        let result = placement.translate_members(&[0, 4], Point2D::ONE);
        assert_eq!(result, Err(PuzzleError::ShardOutOfRange { index: 4, len: 2 }));
        assert_eq!(placement, Placement::identity(2));
    }

    #[test]
    fn test_triangulated_scatter_stays_in_play_area() {
        let config = PuzzleConfig::default();
        let set = generate(ShapeStrategy::Triangulated, Difficulty::Hard);
        let mut seed = SeedResource::from_seed(10);
        let play = config.play_area().expand(1e-3);
        for _ in 0..10 {
            let placement = scatter_all(&set, &config, &mut seed);
            for i in 0..set.len() {
                for v in placement.world_vertices(&set, i).unwrap() {
                    assert!(play.contains_point(v), "vertex {:?} outside play area", v);
                }
            }
        }
    }

    #[test]
    fn test_grid_scatter_avoids_board() {
        let config = PuzzleConfig::default();
        let set = generate(ShapeStrategy::Grid, Difficulty::Easy);
        let keep_out = set
            .board()
            .unwrap()
            .screen_bounds()
            .expand(config.board_clearance);
        let placement = scatter_all(&set, &config, &mut SeedResource::from_seed(4));
        for i in 0..set.len() {
            let world = Bounds2D::from_points_iter(placement.world_vertices(&set, i).unwrap())
                .unwrap();
            assert!(!world.intersects(&keep_out), "piece {} lies on the board", i);
            assert!(world.min.x >= 0.0 && world.min.y >= 0.0);
        }
    }

    #[test]
    fn test_rescatter_keeps_other_offsets() {
        let config = PuzzleConfig::default();
        let set = generate(ShapeStrategy::Triangulated, Difficulty::Medium);
        let mut seed = SeedResource::from_seed(8);
        let mut placement = scatter_all(&set, &config, &mut seed);
        let before = placement.clone();
        rescatter(&mut placement, &set, &[1], &config, &mut seed).unwrap();
        for i in (0..set.len()).filter(|&i| i != 1) {
            assert_eq!(placement.offset(i), before.offset(i));
        }
        assert!(rescatter(&mut placement, &set, &[99], &config, &mut seed).is_err());
    }

    #[test]
    fn test_shard_at_prefers_topmost() {
        let set = ShardSet::new(
            ShapeStrategy::Triangulated,
            Bounds2D::from_size(10.0, 10.0),
            vec![
                Shard::triangle(Point2D::ZERO, Point2D::new(10.0, 0.0), Point2D::new(0.0, 10.0)),
                Shard::triangle(Point2D::ZERO, Point2D::new(10.0, 0.0), Point2D::new(0.0, 10.0)),
            ],
            None,
        );
        let placement = Placement::identity(2);
        assert_eq!(placement.shard_at(&set, Point2D::new(1.0, 1.0)), Some(1));
        assert_eq!(placement.shard_at(&set, Point2D::new(9.0, 9.0)), None);
    }
}
