// src/puzzle/generator/triangulated.rs

use crate::math::{
    error::{MathError, MathResult},
    probability::SeedResource,
    types::{Bounds2D, Point2D, SpadePoint, bevy_to_spade_points, spade_to_bevy_point},
};
use crate::puzzle::shard::Shard;
use bevy::log::debug;
use spade::{DelaunayTriangulation, Triangulation};

/// Erzeugt die Scherben der "Broken Glass"-Zerlegung.
///
/// `interior_points` Zufallspunkte werden im um `margin` eingerückten
/// Rechteck gezogen, danach kommen die vier Ecken dazu, damit die
/// Triangulation das ganze Bild überdeckt.
pub fn generate_triangles(
    bounds: &Bounds2D,
    interior_points: usize,
    margin: f32,
    seed_resource: &mut SeedResource,
) -> MathResult<Vec<Shard>> {
    let sample_bounds = bounds.inset(margin);
    let mut points = Vec::with_capacity(interior_points + 4);
    for _ in 0..interior_points {
        points.push(seed_resource.next_point_in(sample_bounds.min, sample_bounds.max));
    }
    points.extend_from_slice(&[
        bounds.min,
        Point2D::new(bounds.max.x, bounds.min.y),
        bounds.max,
        Point2D::new(bounds.min.x, bounds.max.y),
    ]);
    debug!(
        "generate_triangles: {} interior points in {}, {} points total",
        interior_points,
        sample_bounds,
        points.len()
    );

    triangulate(&points)
}

/// Delaunay-Triangulation einer Punktmenge; jedes innere Dreieck wird eine Scherbe.
///
/// Die Eckpunkte der Scherben sind exakt die Eingabepunkte, benachbarte
/// Dreiecke teilen sich also bitgleiche Koordinaten. Weniger als drei Punkte
/// ergeben eine leere Liste.
pub fn triangulate(points: &[Point2D]) -> MathResult<Vec<Shard>> {
    if points.len() < 3 {
        return Ok(Vec::new());
    }
    if let Some(invalid) = points.iter().find(|p| !p.is_finite()) {
        return Err(MathError::TriangulationFailed {
            reason: format!("Non-finite input point {:?}", invalid),
        });
    }

    let spade_points = bevy_to_spade_points(points);
    let triangulation = DelaunayTriangulation::<SpadePoint>::bulk_load_stable(spade_points).map_err(
        |e| MathError::TriangulationFailed {
            reason: format!(
                "Spade's bulk_load_stable failed: {:?}. Input point count: {}",
                e,
                points.len()
            ),
        },
    )?;

    let shards: Vec<Shard> = triangulation
        .inner_faces()
        .map(|face| {
            let [a, b, c] = face.vertices();
            Shard::triangle(
                spade_to_bevy_point(a.position()),
                spade_to_bevy_point(b.position()),
                spade_to_bevy_point(c.position()),
            )
        })
        .collect();

    debug!(
        "triangulate: {} vertices -> {} triangles",
        triangulation.num_vertices(),
        shards.len()
    );
    Ok(shards)
}
