// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> MathResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box aus zwei beliebigen Punkten
    pub fn from_points(p1: Point2D, p2: Point2D) -> Self {
        Self {
            min: Point2D::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Point2D::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    /// Bounding Box mit Ursprung (0,0) und gegebener Größe
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::from_points(Point2D::ZERO, Point2D::new(width, height))
    }

    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Leere Bounding Box (ungültig)
    pub fn empty() -> Self {
        Self {
            min: Point2D::new(f32::INFINITY, f32::INFINITY),
            max: Point2D::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Prüft ob die Bounding Box gültig ist
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.x.is_finite()
            && self.min.y.is_finite()
            && self.max.x.is_finite()
            && self.max.y.is_finite()
    }

    /// Prüft ob die Bounding Box leer ist
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Größe der Bounding Box
    pub fn size(&self) -> Point2D {
        Point2D::new(self.width(), self.height())
    }

    /// Zentrum der Bounding Box
    pub fn center(&self) -> Point2D {
        (self.min + self.max) * 0.5
    }

    /// Fläche der Bounding Box
    pub fn area(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.width() * self.height()
        }
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Prüft ob sich zwei Bounding Boxes überschneiden
    pub fn intersects(&self, other: &Bounds2D) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Erweitert die Bounding Box um einen Margin
    pub fn expand(&self, margin: f32) -> Self {
        if self.is_empty() {
            return *self;
        }

        Self {
            min: Point2D::new(self.min.x - margin, self.min.y - margin),
            max: Point2D::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Schrumpft die Bounding Box um einen Margin.
    ///
    /// Pro Achse wird höchstens bis zur Mittellinie geschrumpft, die Box
    /// bleibt also immer gültig (ggf. mit Breite oder Höhe 0).
    pub fn inset(&self, margin: f32) -> Self {
        if self.is_empty() {
            return *self;
        }

        let margin_x = margin.clamp(0.0, self.width() * 0.5);
        let margin_y = margin.clamp(0.0, self.height() * 0.5);
        Self {
            min: Point2D::new(self.min.x + margin_x, self.min.y + margin_y),
            max: Point2D::new(self.max.x - margin_x, self.max.y - margin_y),
        }
    }

    /// Erzeugt die vier Eckpunkte der Bounding Box
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,                             // unten links
            Point2D::new(self.max.x, self.min.y), // unten rechts
            self.max,                             // oben rechts
            Point2D::new(self.min.x, self.max.y), // oben links
        ]
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Bounds2D(empty)")
        } else {
            write!(f, "Bounds2D({:?} to {:?})", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_points_iter() {
        let bounds = Bounds2D::from_points_iter(vec![
            Point2D::new(3.0, -1.0),
            Point2D::new(-2.0, 4.0),
            Point2D::new(1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, Point2D::new(-2.0, -1.0));
        assert_eq!(bounds.max, Point2D::new(3.0, 4.0));
        assert!(Bounds2D::from_points_iter(Vec::<Point2D>::new()).is_none());
    }

    #[test]
    fn test_inset_clamps_per_axis() {
        let bounds = Bounds2D::from_size(1000.0, 100.0);
        let inset = bounds.inset(150.0);
        assert!(inset.is_valid());
        assert_relative_eq!(inset.min.x, 150.0);
        assert_relative_eq!(inset.max.x, 850.0);
        // Höhe zu klein für den Margin: kollabiert auf die Mittellinie
        assert_relative_eq!(inset.min.y, 50.0);
        assert_relative_eq!(inset.max.y, 50.0);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        assert!(Bounds2D::new(Point2D::new(1.0, 0.0), Point2D::new(0.0, 1.0)).is_err());
        assert!(Bounds2D::empty().is_empty());
        assert_relative_eq!(Bounds2D::empty().area(), 0.0);
    }
}
