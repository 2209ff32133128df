// src/math/types/mod.rs
pub mod bounds;

pub use bounds::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::Vec2;
pub use spade::Point2;

// Einheitliche Typen für das gesamte Modul
pub type Point2D = Vec2;
pub type SpadePoint = Point2<f64>;

/// Konvertiert Bevy-Punkte verlustfrei in Spade-Punkte (f32 -> f64 ist exakt).
pub fn bevy_to_spade_points(points: &[Point2D]) -> Vec<SpadePoint> {
    points
        .iter()
        .map(|p| SpadePoint::new(p.x as f64, p.y as f64))
        .collect()
}

/// Rückkonvertierung eines Spade-Punktes.
///
/// Exakt, solange der Punkt ursprünglich aus einem `f32` stammt. Die
/// Kantenerkennung der Nachbarschaft verlässt sich darauf.
pub fn spade_to_bevy_point(point: SpadePoint) -> Point2D {
    Point2D::new(point.x as f32, point.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spade_round_trip_is_exact() {
        let points = vec![
            Point2D::new(0.1, 0.2),
            Point2D::new(123.456_79, 987.654_3),
            Point2D::new(1e-7, 4096.125),
        ];
        for (original, converted) in points.iter().zip(bevy_to_spade_points(&points)) {
            let back = spade_to_bevy_point(converted);
            assert_eq!(original.x.to_bits(), back.x.to_bits());
            assert_eq!(original.y.to_bits(), back.y.to_bits());
        }
    }
}
