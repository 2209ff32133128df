// src/math/geometry/edge.rs

use crate::math::types::Point2D;
use std::fmt;

/// Eine gerichtete Polygonkante zwischen zwei Eckpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point2D,
    pub end: Point2D,
}

impl Edge {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Verschiebt beide Endpunkte um `offset`.
    pub fn translated(&self, offset: Point2D) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Kanonischer, richtungsunabhängiger Schlüssel dieser Kante.
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.start, self.end)
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Richtungsunabhängiger Schlüssel einer Kante.
///
/// Jeder Endpunkt wird als exakter Koordinaten-String formatiert (kürzeste
/// verlustfreie Darstellung), die beiden Strings werden lexikographisch
/// sortiert. Zwei Kanten sind genau dann identisch, wenn ihre Schlüssel es
/// sind. Das funktioniert nur, weil benachbarte Shards dieselben
/// Eckpunkt-Werte aus der Generierung teilen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    first: String,
    second: String,
}

impl EdgeKey {
    pub fn new(a: Point2D, b: Point2D) -> Self {
        let key_a = point_key(a);
        let key_b = point_key(b);
        if key_a <= key_b {
            Self {
                first: key_a,
                second: key_b,
            }
        } else {
            Self {
                first: key_b,
                second: key_a,
            }
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.first, self.second)
    }
}

/// Exakte Textdarstellung eines Punktes, z.B. `"12.5,0"`.
pub fn point_key(point: Point2D) -> String {
    format!("{},{}", point.x, point.y)
}

/// Alle Randkanten eines Polygons als aufeinanderfolgende Eckpunktpaare,
/// inklusive der schließenden Kante vom letzten zum ersten Punkt.
pub fn polygon_edges(vertices: &[Point2D]) -> impl Iterator<Item = Edge> + '_ {
    let count = vertices.len();
    (0..count).map(move |i| Edge::new(vertices[i], vertices[(i + 1) % count]))
}

/// Strikter Abstandstest: `true` wenn `a` und `b` näher als `threshold` liegen.
pub fn points_close(a: Point2D, b: Point2D, threshold: f32) -> bool {
    a.distance(b) < threshold
}

/// Welche Endpunkte zweier Kanten einander zugeordnet werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointPairing {
    /// start↔start, end↔end
    Direct,
    /// start↔end, end↔start
    Crossed,
}

/// Prüft ob zwei Kanten in einer der beiden Zuordnungen zusammenpassen.
pub fn edges_match(a: &Edge, b: &Edge, threshold: f32) -> bool {
    (points_close(a.start, b.start, threshold) && points_close(a.end, b.end, threshold))
        || (points_close(a.start, b.end, threshold) && points_close(a.end, b.start, threshold))
}

/// Ergebnis der Ausrichtung einer bewegten Kante auf eine Zielkante.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAlignment {
    pub pairing: EndpointPairing,
    /// Verschiebung, die den Startpunkt der bewegten Kante auf den
    /// zugeordneten Endpunkt der Zielkante legt.
    pub translation: Point2D,
    /// Summe der beiden Endpunkt-Abstände in der gewählten Zuordnung.
    pub distance_sum: f32,
}

/// Wählt die Zuordnung mit der kleineren Abstandssumme.
///
/// Die direkte Zuordnung gewinnt nur bei strikt kleinerer Summe, sonst wird
/// die gekreuzte genommen. Damit ist die Windungsrichtung der Dreiecke egal.
pub fn edge_alignment(moving: &Edge, target: &Edge) -> EdgeAlignment {
    let direct_sum = moving.start.distance(target.start) + moving.end.distance(target.end);
    let crossed_sum = moving.start.distance(target.end) + moving.end.distance(target.start);

    if direct_sum < crossed_sum {
        EdgeAlignment {
            pairing: EndpointPairing::Direct,
            translation: target.start - moving.start,
            distance_sum: direct_sum,
        }
    } else {
        EdgeAlignment {
            pairing: EndpointPairing::Crossed,
            translation: target.end - moving.start,
            distance_sum: crossed_sum,
        }
    }
}
