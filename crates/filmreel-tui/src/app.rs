use filmreel_core::{AppConfig, Rect, ReelItem, Size, UiConfig};

use crate::event::ReelEvent;
use crate::input::Action;
use crate::scroll::{Clock, Mode, ReelController, SystemClock};

/// Terminal host for the reel. Plays the part of the scroll container:
/// it owns the shared scroll position range, turns key and mouse input
/// into touch/drag/scroll events, and converts between terminal cells and
/// layout units.
pub struct App<C: Clock = SystemClock> {
    pub reel: ReelController<C>,
    pub ui: UiConfig,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl App<SystemClock> {
    pub fn new(config: &AppConfig, items: Vec<ReelItem>) -> Self {
        Self::with_clock(config, items, SystemClock::new())
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(config: &AppConfig, items: Vec<ReelItem>, clock: C) -> Self {
        let mut reel = ReelController::new(config.reel.clone(), clock);
        reel.set_items(items);
        Self {
            reel,
            ui: config.ui.clone(),
            should_quit: false,
            status_message: None,
        }
    }

    /// Terminal cells per layout unit, falling back to 1 for unusable values
    #[inline]
    pub fn cell_scale(&self) -> f64 {
        if self.ui.cell_scale.is_finite() && self.ui.cell_scale > 0.0 {
            self.ui.cell_scale
        } else {
            1.0
        }
    }

    /// Layout units covered by one terminal cell
    #[inline]
    pub fn units_per_cell(&self) -> f64 {
        1.0 / self.cell_scale()
    }

    /// Report the list area in terminal cells
    pub fn set_list_area(&mut self, width: u16, height: u16) {
        let units = self.units_per_cell();
        self.reel.handle(ReelEvent::Resized(Size::new(
            width as f64 * units,
            height as f64 * units,
        )));
    }

    /// Viewport in content coordinates at the current scroll position
    pub fn viewport_rect(&self) -> Rect {
        let viewport = self.reel.viewport();
        Rect::new(0.0, self.reel.scroll_position(), viewport.width, viewport.height)
    }

    /// Prepare and start the reel
    pub fn start(&mut self) {
        self.reel.handle(ReelEvent::Prepare);
        self.reel.handle(ReelEvent::Start);
    }

    /// One frame of the main loop
    pub fn tick(&mut self) {
        self.reel.handle(ReelEvent::Frame);
    }

    pub fn handle_action(&mut self, action: Action) {
        let row = self.units_per_cell();
        let half_page = (self.reel.viewport().height / 2.0).max(row);
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroll_by(row),
            Action::ScrollUp => self.scroll_by(-row),
            Action::ScrollHalfPageDown => self.scroll_by(half_page),
            Action::ScrollHalfPageUp => self.scroll_by(-half_page),
            Action::JumpToTop => {
                self.begin_drag();
                self.scroll_to(0.0);
            }
            Action::Touch => self.reel.handle(ReelEvent::TouchBegan),
            Action::StopReel => {
                self.reel.handle(ReelEvent::Stop);
                self.set_status("Reel stopped");
            }
            Action::ResumeReel => {
                self.reel.handle(ReelEvent::Resume);
                self.set_status("Reel resumed");
            }
            Action::None => {}
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    fn begin_drag(&mut self) {
        if self.reel.mode() == Mode::Reel {
            self.reel.handle(ReelEvent::DragBegan);
        }
    }

    fn scroll_by(&mut self, delta: f64) {
        self.begin_drag();
        let target = self.reel.scroll_position() + delta;
        self.scroll_to(target);
    }

    /// Move the shared scroll position, clamped to the scrollable range
    fn scroll_to(&mut self, position: f64) {
        if !self.reel.scroll_enabled() {
            return;
        }
        let position = position.clamp(0.0, self.reel.max_offset());
        self.reel.handle(ReelEvent::Scrolled(position));
    }
}
