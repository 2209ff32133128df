// src/math/geometry/mod.rs
pub mod edge;
pub mod polygon;

pub use edge::{
    Edge, EdgeAlignment, EdgeKey, EndpointPairing, edge_alignment, edges_match, point_key,
    points_close, polygon_edges,
};
