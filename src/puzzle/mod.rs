// src/puzzle/mod.rs

pub mod adjacency;
pub mod completion;
pub mod config;
pub mod error;
pub mod generator;
pub mod groups;
pub mod placement;
pub mod session;
pub mod shard;
pub mod snap;

pub use adjacency::AdjacencyGraph;
pub use config::{Difficulty, PuzzleConfig, ShapeStrategy};
pub use error::{PuzzleError, PuzzleResult};
pub use generator::ShapeGenerator;
pub use groups::{GroupId, GroupStore};
pub use placement::Placement;
pub use session::{PuzzleSession, SnapHighlight};
pub use shard::{BoardLayout, GridCell, Shard, ShardSet};
pub use snap::{SnapEngine, SnapMatch, SnapOutcome};
