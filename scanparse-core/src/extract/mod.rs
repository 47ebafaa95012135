// Main extraction module - delegates to the extraction passes
// This file coordinates the passes but actual implementations are in:
// - summary.rs: severity summary table extraction
// - blocks.rs: marker-based issue block segmentation
// - fields.rs: label-driven field parsing within one block

pub mod blocks;
pub mod fields;
pub mod summary;

pub use blocks::split_blocks;
pub use fields::parse_block;
pub use summary::extract_summary;
