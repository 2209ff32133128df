// src/puzzle/shard.rs

use super::config::ShapeStrategy;
use super::error::{PuzzleError, PuzzleResult};
use crate::math::{
    geometry::{Edge, polygon, polygon_edges},
    types::{Bounds2D, Point2D},
};
use serde::{Deserialize, Serialize};

/// Zusatzinformationen eines Rasterteils.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    /// Korrekte Position (linke obere Ecke) relativ zum Brett.
    pub correct_offset: Point2D,
    /// Ausschnitt im Quellbild (Pixel), den das Teil zeigt.
    pub source_origin: Point2D,
    pub source_size: Point2D,
}

/// Ein einzelnes Puzzleteil: einfaches Polygon mit mindestens drei Eckpunkten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shard {
    pub vertices: Vec<Point2D>,
    pub grid_cell: Option<GridCell>,
}

impl Shard {
    pub fn triangle(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Self {
            vertices: vec![a, b, c],
            grid_cell: None,
        }
    }

    /// Achsenparalleles Rechteck, Eckpunkte im Uhrzeigersinn ab oben links
    /// (Bildkoordinaten, y zeigt nach unten).
    pub fn rectangle(rect: Bounds2D, cell: GridCell) -> Self {
        Self {
            vertices: vec![
                rect.min,
                Point2D::new(rect.max.x, rect.min.y),
                rect.max,
                Point2D::new(rect.min.x, rect.max.y),
            ],
            grid_cell: Some(cell),
        }
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        polygon_edges(&self.vertices)
    }

    pub fn bounds(&self) -> Bounds2D {
        polygon::bounds(&self.vertices).unwrap_or_else(Bounds2D::empty)
    }

    pub fn area(&self) -> f64 {
        polygon::area(&self.vertices)
    }

    pub fn translated_vertices(&self, offset: Point2D) -> Vec<Point2D> {
        self.vertices.iter().map(|&v| v + offset).collect()
    }

    /// Trefferprüfung in Weltkoordinaten bei gegebener Verschiebung.
    pub fn contains_world_point(&self, offset: Point2D, point: Point2D) -> bool {
        polygon::contains_point(&self.vertices, point - offset)
    }
}

/// Lage des Bretts im Rastermodus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub rows: usize,
    pub cols: usize,
    pub board_size: Point2D,
    pub piece_size: Point2D,
    /// Feste Bildschirmposition der linken oberen Brettecke in der Spielfläche.
    pub origin: Point2D,
}

impl BoardLayout {
    /// Brett in Bildschirmkoordinaten.
    pub fn screen_bounds(&self) -> Bounds2D {
        Bounds2D::from_points(self.origin, self.origin + self.board_size)
    }
}

/// Geordnete Menge aller Teile eines Puzzles. Der Index ist die Identität.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShardSet {
    strategy: ShapeStrategy,
    /// Das Rechteck, das die Teile lückenlos überdecken.
    bounds: Bounds2D,
    shards: Vec<Shard>,
    board: Option<BoardLayout>,
}

impl ShardSet {
    pub fn new(
        strategy: ShapeStrategy,
        bounds: Bounds2D,
        shards: Vec<Shard>,
        board: Option<BoardLayout>,
    ) -> Self {
        Self {
            strategy,
            bounds,
            shards,
            board,
        }
    }

    pub fn empty(strategy: ShapeStrategy) -> Self {
        Self::new(strategy, Bounds2D::empty(), Vec::new(), None)
    }

    pub fn strategy(&self) -> ShapeStrategy {
        self.strategy
    }

    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    pub fn board(&self) -> Option<&BoardLayout> {
        self.board.as_ref()
    }

    pub fn shards(&self) -> &[Shard] {
        &self.shards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shard> {
        self.shards.iter()
    }

    pub fn len(&self) -> usize {
        self.shards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }

    pub fn get(&self, index: usize) -> PuzzleResult<&Shard> {
        self.shards.get(index).ok_or(PuzzleError::ShardOutOfRange {
            index,
            len: self.shards.len(),
        })
    }

    pub fn total_area(&self) -> f64 {
        self.shards.iter().map(Shard::area).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangle_shard_layout() {
        let rect = Bounds2D::from_points(Point2D::new(10.0, 20.0), Point2D::new(30.0, 50.0));
        let cell = GridCell {
            row: 0,
            col: 1,
            correct_offset: rect.min,
            source_origin: Point2D::ZERO,
            source_size: Point2D::new(20.0, 30.0),
        };
        let shard = Shard::rectangle(rect, cell);
        assert_eq!(shard.vertices.len(), 4);
        assert_eq!(shard.bounds(), rect);
        assert_relative_eq!(shard.area(), 600.0);
        assert_eq!(shard.edges().count(), 4);
    }

    #[test]
    fn test_contains_world_point_respects_offset() {
        let shard = Shard::triangle(
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(0.0, 10.0),
        );
        let offset = Point2D::new(100.0, 0.0);
        assert!(shard.contains_world_point(offset, Point2D::new(102.0, 2.0)));
        assert!(!shard.contains_world_point(offset, Point2D::new(2.0, 2.0)));
    }

    #[test]
    fn test_out_of_range_index_is_reported() {
        let set = ShardSet::empty(ShapeStrategy::Triangulated);
        assert_eq!(
            set.get(3),
            Err(PuzzleError::ShardOutOfRange { index: 3, len: 0 })
        );
    }
}
