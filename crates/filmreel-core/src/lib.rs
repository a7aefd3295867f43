pub mod config;
pub mod error;
pub mod geometry;
pub mod item;
pub mod layout;

pub use config::{AppConfig, GeneralConfig, ReelConfig, UiConfig};
pub use error::{Error, Result};
pub use geometry::{Insets, Rect, Size};
pub use item::{heights_of, ItemSource, ReelItem};
