// src/math/geometry/polygon.rs

use crate::math::types::{Bounds2D, Point2D};
use geo::{Contains, Coord, LineString, Polygon};

/// Vorzeichenbehaftete Fläche (Gaußsche Trapezformel), in f64 gerechnet.
/// Positiv für gegen den Uhrzeigersinn orientierte Polygone.
pub fn signed_area(vertices: &[Point2D]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut area_sum = 0.0;
    for i in 0..vertices.len() {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % vertices.len()];
        area_sum += (p1.x as f64 * p2.y as f64) - (p2.x as f64 * p1.y as f64);
    }
    0.5 * area_sum
}

pub fn area(vertices: &[Point2D]) -> f64 {
    signed_area(vertices).abs()
}

/// Konvertiert eine Eckpunktliste in ein `geo::Polygon<f64>`.
pub fn to_geo_polygon(vertices: &[Point2D]) -> Polygon<f64> {
    let coords: Vec<Coord<f64>> = vertices
        .iter()
        .map(|p| Coord {
            x: p.x as f64,
            y: p.y as f64,
        })
        .collect();
    // LineString wird von Polygon::new automatisch geschlossen
    Polygon::new(LineString::new(coords), vec![])
}

/// Punkt-im-Polygon-Test (Randpunkte zählen nicht als enthalten).
pub fn contains_point(vertices: &[Point2D], point: Point2D) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    to_geo_polygon(vertices).contains(&geo::Point::new(point.x as f64, point.y as f64))
}

pub fn bounds(vertices: &[Point2D]) -> Option<Bounds2D> {
    Bounds2D::from_points_iter(vertices.iter().copied())
}
