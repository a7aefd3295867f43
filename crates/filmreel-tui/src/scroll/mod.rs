//! Reel scrolling system for Filmreel
//!
//! Two columns drift apart on a frame clock ("reel"), then hand over to a
//! single user-driven scroll position ("unified") without a visible jump.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing curves
//! - `timing` - Clocks, frame driver, progress and interpolation
//! - `countdown` - One-shot cancelable timer
//!
//! ## L3 Molecular Layer
//! - `animation` - Frame-stepped value animator
//!
//! ## L2 Organism Layer
//! - `controller` - Reel/unified state machine
//!
//! # Usage
//!
//! ```ignore
//! use filmreel_tui::scroll::{ManualClock, ReelController};
//!
//! let clock = ManualClock::new();
//! let mut reel = ReelController::new(config.reel.clone(), clock.clone());
//! reel.set_viewport(Size::new(390.0, 844.0));
//! reel.set_items(items);
//! reel.start();
//!
//! // Each display frame
//! clock.advance(Duration::from_millis(16));
//! reel.tick();
//! for (index, rect) in reel.visible_cells(viewport) { /* draw */ }
//! ```

// L4 Atomic Layer
pub mod countdown;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

// L2 Organism Layer
pub mod controller;

// Re-exports for convenient access
pub use animation::{TweenFrame, ValueAnimator};
pub use controller::{Mode, ReelController};
pub use countdown::Countdown;
pub use easing::EasingType;
pub use timing::{Clock, FrameDriver, ManualClock, SystemClock};
