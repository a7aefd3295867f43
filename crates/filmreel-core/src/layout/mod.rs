//! Two-column masonry layout.
//!
//! - `masonry` - pure shortest-column-first placement
//! - `cache` - memoized placements with per-column vertical offsets
//! - `fill` - repeats short item lists until they overflow the viewport

pub mod cache;
pub mod fill;
pub mod masonry;

pub use cache::{ColumnOffsets, MasonryCache};
pub use fill::{ensure_minimum_fill, MAX_FILL_REPEATS};
pub use masonry::{compute_layout, Column, LayoutResult, MasonryParams, Placement};
