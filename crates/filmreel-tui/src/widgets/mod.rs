mod masonry;
mod status_bar;

pub use masonry::{card_cells, CardCells, MasonryWidget};
pub use status_bar::StatusBarWidget;
