use serde::{Deserialize, Serialize};

use crate::geometry::{Insets, Rect};

/// Which of the two columns an item landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Left,
    Right,
}

impl Column {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Column::Left => 0,
            Column::Right => 1,
        }
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        if index == 0 {
            Column::Left
        } else {
            Column::Right
        }
    }
}

/// Spacing parameters shared by every layout pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MasonryParams {
    pub insets: Insets,
    pub column_spacing: f64,
    pub item_spacing: f64,
}

/// Where one item sits, before any reel offset is applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub rect: Rect,
    pub column: Column,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    pub placements: Vec<Placement>,
    pub content_height: f64,
    /// Running bottom of each column (including the trailing item spacing)
    pub column_heights: [f64; 2],
}

/// Lay out `heights` in two columns, always appending to the shorter column.
///
/// Ties go to the left column. Identical input always yields identical output.
pub fn compute_layout(heights: &[f64], container_width: f64, params: &MasonryParams) -> LayoutResult {
    if container_width <= 0.0 {
        return LayoutResult::default();
    }

    let MasonryParams {
        insets,
        column_spacing,
        item_spacing,
    } = *params;

    let available_width = container_width - insets.left - insets.right - column_spacing;
    let column_width = (available_width / 2.0).max(0.0);

    let mut column_heights = [insets.top, insets.top];
    let mut placements = Vec::with_capacity(heights.len());

    for &height in heights {
        let chosen = if column_heights[0] <= column_heights[1] { 0 } else { 1 };
        let x = insets.left + chosen as f64 * (column_width + column_spacing);
        let y = column_heights[chosen];
        let rect = Rect::new(x, y, column_width, height);
        column_heights[chosen] = rect.max_y() + item_spacing;
        placements.push(Placement {
            rect,
            column: Column::from_index(chosen),
        });
    }

    let content_height = if heights.is_empty() {
        insets.top + insets.bottom
    } else {
        // The last item's trailing spacing is not content
        column_heights[0].max(column_heights[1]) - item_spacing + insets.bottom
    };

    LayoutResult {
        placements,
        content_height,
        column_heights,
    }
}
