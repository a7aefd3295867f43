use crate::geometry::{Rect, Size};

use super::masonry::{compute_layout, Column, MasonryParams, Placement};

/// Virtual scroll position applied to each column during the reel phase
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnOffsets {
    pub left: f64,
    pub right: f64,
}

impl ColumnOffsets {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Same offset on both columns
    pub fn uniform(offset: f64) -> Self {
        Self::new(offset, offset)
    }

    #[inline]
    pub fn for_column(&self, column: Column) -> f64 {
        match column {
            Column::Left => self.left,
            Column::Right => self.right,
        }
    }

    /// Left minus right
    #[inline]
    pub fn skew(&self) -> f64 {
        self.left - self.right
    }
}

/// Memoized masonry placements plus the column offsets applied on read.
///
/// Placements are rebuilt wholesale when the container size or the item
/// count changes. Offsets are only ever changed through [`set_offsets`];
/// rebuilding leaves them untouched.
///
/// [`set_offsets`]: MasonryCache::set_offsets
#[derive(Debug, Clone, Default)]
pub struct MasonryCache {
    params: MasonryParams,
    /// Container size of the last build; `None` until the first build
    last_size: Option<Size>,
    last_item_count: usize,
    placements: Vec<Placement>,
    content_height: f64,
    offsets: ColumnOffsets,
}

impl MasonryCache {
    pub fn new(params: MasonryParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    pub fn params(&self) -> &MasonryParams {
        &self.params
    }

    /// Swap layout parameters; the next `rebuild_if_needed` recomputes.
    pub fn set_params(&mut self, params: MasonryParams) {
        if self.params != params {
            self.params = params;
            self.invalidate();
        }
    }

    /// Force the next `rebuild_if_needed` to recompute
    pub fn invalidate(&mut self) {
        self.last_size = None;
    }

    /// Recompute placements when the size or item count changed since the
    /// last build. Returns true if a rebuild happened.
    pub fn rebuild_if_needed(&mut self, heights: &[f64], container: Size) -> bool {
        if self.last_size == Some(container) && self.last_item_count == heights.len() {
            return false;
        }

        let result = compute_layout(heights, container.width, &self.params);
        self.last_size = Some(container);
        self.last_item_count = heights.len();
        self.placements = result.placements;
        self.content_height = result.content_height;

        tracing::debug!(
            items = heights.len(),
            width = container.width,
            height = container.height,
            content_height = self.content_height,
            "Rebuilt masonry cache"
        );
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Total height of the laid-out content, ignoring offsets
    #[inline]
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Scrollable size for the host container
    pub fn content_size(&self) -> Size {
        let width = self.last_size.map_or(0.0, |size| size.width);
        Size::new(width, self.content_height)
    }

    /// Largest offset that still keeps the viewport inside the content
    pub fn max_offset(&self, viewport_height: f64) -> f64 {
        (self.content_height - viewport_height).max(0.0)
    }

    #[inline]
    pub fn offsets(&self) -> ColumnOffsets {
        self.offsets
    }

    pub fn set_offsets(&mut self, offsets: ColumnOffsets) {
        self.offsets = offsets;
    }

    /// Items whose offset-adjusted rectangle intersects `viewport`.
    ///
    /// Evaluated lazily against the current offsets on every call.
    pub fn query(&self, viewport: Rect) -> impl Iterator<Item = (usize, Rect)> + '_ {
        let offsets = self.offsets;
        self.placements
            .iter()
            .enumerate()
            .map(move |(index, placement)| {
                (index, placement.rect.shifted_up(offsets.for_column(placement.column)))
            })
            .filter(move |(_, rect)| rect.intersects(&viewport))
    }

    /// Offset-adjusted rectangle for one item
    pub fn rect_for(&self, index: usize) -> Option<Rect> {
        self.placements
            .get(index)
            .map(|placement| placement.rect.shifted_up(self.offsets.for_column(placement.column)))
    }

    pub fn column_of(&self, index: usize) -> Option<Column> {
        self.placements.get(index).map(|placement| placement.column)
    }
}
