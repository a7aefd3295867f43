pub mod app;
pub mod event;
pub mod input;
pub mod scroll;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use scroll::{Mode, ReelController};
pub use theme::Theme;
