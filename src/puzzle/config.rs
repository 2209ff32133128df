// src/puzzle/config.rs

use crate::math::{
    error::{MathError, MathResult},
    types::{Bounds2D, Point2D},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Schwierigkeitsstufe eines Puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Anzahl zufälliger Innenpunkte für die Dreieckszerlegung.
    /// Streng monoton steigend, mehr Punkte ergeben mehr Scherben.
    pub fn interior_point_count(self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 8,
        }
    }

    /// Zeilen bzw. Spalten des quadratischen Rasters.
    pub fn grid_size(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Zerlegungsstrategie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeStrategy {
    /// Delaunay-Dreiecke ("Broken Glass"), Zusammensetzen über Kanten-Snapping.
    #[default]
    Triangulated,
    /// Gleichmäßiges Raster ("Classic"), jedes Teil rastet einzeln auf dem Brett ein.
    Grid,
}

impl ShapeStrategy {
    pub const ALL: [ShapeStrategy; 2] = [ShapeStrategy::Triangulated, ShapeStrategy::Grid];

    pub fn label(self) -> &'static str {
        match self {
            ShapeStrategy::Triangulated => "Broken Glass",
            ShapeStrategy::Grid => "Classic Grid",
        }
    }
}

/// Konfiguration für Generierung, Verteilung und Snapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Größe der Spielfläche, in der die Teile verteilt werden.
    pub play_area_size: Point2D,
    /// Abstand zum rechten/unteren Rand der Spielfläche beim Verteilen der Rasterteile.
    pub scatter_padding: f32,
    /// Freiraum um das Brett, in den beim Verteilen keine Rasterteile fallen.
    pub board_clearance: f32,
    /// Maximale Brettgröße für die Rasterzerlegung (Seitenverhältnis bleibt erhalten).
    pub max_board_size: Point2D,
    /// Randabstand der Innenpunkte als Anteil der Bildbreite.
    pub margin_fraction: f32,
    /// Maximaler Endpunktabstand, bei dem zwei Kanten zusammenschnappen.
    pub edge_snap_threshold: f32,
    /// Toleranz pro Achse, mit der ein Rasterteil auf seiner Zielposition einrastet.
    pub grid_snap_tolerance: f32,
    /// Anzeigedauer der "gerade eingerastet"-Markierung in Millisekunden.
    pub snap_highlight_ms: u64,
    /// Maximale Versuche beim Ziehen einer Position außerhalb des Bretts.
    pub scatter_attempts: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            play_area_size: Point2D::new(1200.0, 800.0),
            scatter_padding: 40.0,
            board_clearance: 50.0,
            max_board_size: Point2D::new(500.0, 500.0),
            margin_fraction: 0.15,
            edge_snap_threshold: 75.0,
            grid_snap_tolerance: 40.0,
            snap_highlight_ms: 300,
            scatter_attempts: 64,
        }
    }
}

impl PuzzleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_play_area(mut self, width: f32, height: f32) -> Self {
        self.play_area_size = Point2D::new(width, height);
        self
    }

    pub fn with_max_board_size(mut self, width: f32, height: f32) -> Self {
        self.max_board_size = Point2D::new(width, height);
        self
    }

    pub fn with_margin_fraction(mut self, fraction: f32) -> Self {
        self.margin_fraction = fraction;
        self
    }

    pub fn with_edge_snap_threshold(mut self, threshold: f32) -> Self {
        self.edge_snap_threshold = threshold;
        self
    }

    pub fn with_grid_snap_tolerance(mut self, tolerance: f32) -> Self {
        self.grid_snap_tolerance = tolerance;
        self
    }

    pub fn with_snap_highlight_ms(mut self, millis: u64) -> Self {
        self.snap_highlight_ms = millis;
        self
    }

    pub fn play_area(&self) -> Bounds2D {
        Bounds2D::from_size(self.play_area_size.x, self.play_area_size.y)
    }

    pub fn snap_highlight_duration(&self) -> Duration {
        Duration::from_millis(self.snap_highlight_ms)
    }

    pub fn validate(&self) -> MathResult<()> {
        let play_area = self.play_area();
        if !play_area.is_valid() || play_area.area() <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Play area must be non-empty, got {:?}", self.play_area_size),
            });
        }
        if !(self.max_board_size.x > 0.0 && self.max_board_size.y > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Maximum board size must be positive, got {:?}",
                    self.max_board_size
                ),
            });
        }
        if !(0.0..0.5).contains(&self.margin_fraction) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Margin fraction must lie in [0, 0.5), got {}",
                    self.margin_fraction
                ),
            });
        }
        if !(self.edge_snap_threshold > 0.0 && self.grid_snap_tolerance > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: "Snap thresholds must be positive.".to_string(),
            });
        }
        if self.scatter_attempts == 0 {
            return Err(MathError::InvalidConfiguration {
                message: "At least one scatter attempt is required.".to_string(),
            });
        }
        Ok(())
    }
}
