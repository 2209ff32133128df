// src/puzzle/generator/mod.rs

pub mod grid;
pub mod triangulated;

use crate::math::{error::MathResult, probability::SeedResource, types::Bounds2D, types::Point2D};
use crate::puzzle::{
    config::{Difficulty, PuzzleConfig, ShapeStrategy},
    shard::ShardSet,
};
use bevy::log::{debug, warn};

/// Erzeugt die Teile eines Puzzles für eine Bildgröße, Schwierigkeit und Strategie.
///
/// Reine Funktion ihrer Eingaben und der übergebenen Zufallsquelle.
pub struct ShapeGenerator {
    config: PuzzleConfig,
}

impl ShapeGenerator {
    pub fn new(config: PuzzleConfig) -> MathResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Degenerierte Bildgrößen (nicht endlich, ≤ 0) ergeben eine leere Menge.
    pub fn generate(
        &self,
        width: f32,
        height: f32,
        difficulty: Difficulty,
        strategy: ShapeStrategy,
        seed_resource: &mut SeedResource,
    ) -> MathResult<ShardSet> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            warn!(
                "ShapeGenerator::generate: degenerate image size {}x{}, no shards generated",
                width, height
            );
            return Ok(ShardSet::empty(strategy));
        }

        let shard_set = match strategy {
            ShapeStrategy::Triangulated => {
                let bounds = Bounds2D::from_size(width, height);
                let margin = self.config.margin_fraction * width;
                let shards = triangulated::generate_triangles(
                    &bounds,
                    difficulty.interior_point_count(),
                    margin,
                    seed_resource,
                )?;
                ShardSet::new(strategy, bounds, shards, None)
            }
            ShapeStrategy::Grid => {
                let image_size = Point2D::new(width, height);
                let layout = grid::board_layout(
                    image_size,
                    difficulty.grid_size(),
                    self.config.max_board_size,
                    self.config.play_area_size,
                );
                let shards = grid::generate_cells(&layout, image_size);
                let bounds = Bounds2D::from_points(Point2D::ZERO, layout.board_size);
                ShardSet::new(strategy, bounds, shards, Some(layout))
            }
        };

        debug!(
            "ShapeGenerator::generate: {:?} / {:?} on {}x{} -> {} shards",
            strategy,
            difficulty,
            width,
            height,
            shard_set.len()
        );
        Ok(shard_set)
    }
}
