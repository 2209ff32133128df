pub mod shards;
pub mod svg;
