// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Toleranz für Flächenvergleiche in Bildkoordinaten (Pixel²)
    pub const AREA_EPSILON: f64 = 1e-3;
}
