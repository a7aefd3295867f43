use crate::item::ReelItem;

use super::masonry::{compute_layout, MasonryParams};

/// Upper bound on how many extra copies of the item list get appended
pub const MAX_FILL_REPEATS: usize = 20;

/// Repeat `items` end to end until their masonry layout is at least
/// `min_height` tall, giving up after [`MAX_FILL_REPEATS`] extra copies.
///
/// Returns a new sequence; `items` itself is untouched.
pub fn ensure_minimum_fill(
    items: &[ReelItem],
    min_height: f64,
    width: f64,
    params: &MasonryParams,
) -> Vec<ReelItem> {
    let mut output = items.to_vec();
    if items.is_empty() {
        return output;
    }

    let mut heights: Vec<f64> = items.iter().map(|item| item.height).collect();
    let mut content_height = compute_layout(&heights, width, params).content_height;
    let mut repeats = 0;

    while content_height < min_height && repeats < MAX_FILL_REPEATS {
        output.extend_from_slice(items);
        heights.extend(items.iter().map(|item| item.height));
        content_height = compute_layout(&heights, width, params).content_height;
        repeats += 1;
    }

    if repeats > 0 {
        tracing::debug!(
            source = items.len(),
            display = output.len(),
            repeats,
            content_height,
            min_height,
            "Padded reel content"
        );
    }
    output
}
