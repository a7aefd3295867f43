//! L2 Organism Layer: Reel / unified scroll state machine
//!
//! Owns the items, the masonry cache, the per-column offsets, the frame
//! driver and the countdown. The host feeds it viewport sizes, frames,
//! touches and scroll positions; it answers layout queries.
//!
//! Coordinates: cache rectangles are in content space with column offsets
//! already applied. The host subtracts `scroll_position()` to get screen y.

use std::time::Duration;

use filmreel_core::layout::{ensure_minimum_fill, Column, ColumnOffsets, MasonryCache};
use filmreel_core::{heights_of, Rect, ReelConfig, ReelItem, Size};

use super::animation::ValueAnimator;
use super::countdown::Countdown;
use super::timing::{Clock, FrameDriver, SystemClock};
use crate::event::ReelEvent;

/// Which scroll regime is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Columns drift apart on their own, native scrolling is off
    Reel,
    /// One shared scroll position driven by the user
    Unified,
}

/// Residual skew carried from the reel into unified scrolling
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct UnifiedState {
    anchor: f64,
    left: f64,
    right: f64,
    /// Set once the user reaches the top; cleared only by a new reel phase
    locked: bool,
}

pub struct ReelController<C: Clock = SystemClock> {
    config: ReelConfig,
    clock: C,
    cache: MasonryCache,
    /// Items as supplied by the host
    items: Vec<ReelItem>,
    /// Items actually laid out, possibly repeated to fill the viewport
    display_items: Vec<ReelItem>,
    viewport: Size,
    needs_rebuild: bool,
    prepared: bool,
    visible: bool,
    mode: Mode,
    is_transitioning: bool,
    scroll_position: f64,
    unified: UnifiedState,
    driver: FrameDriver,
    countdown: Countdown,
    align_animator: ValueAnimator,
}

impl<C: Clock> ReelController<C> {
    pub fn new(config: ReelConfig, clock: C) -> Self {
        let cache = MasonryCache::new(config.masonry_params());
        Self {
            config,
            clock,
            cache,
            items: Vec::new(),
            display_items: Vec::new(),
            viewport: Size::default(),
            needs_rebuild: true,
            prepared: false,
            visible: false,
            mode: Mode::Reel,
            is_transitioning: false,
            scroll_position: 0.0,
            unified: UnifiedState::default(),
            driver: FrameDriver::new(),
            countdown: Countdown::new(),
            align_animator: ValueAnimator::new(),
        }
    }

    // ---------------------------------------------------------------------
    // Host inputs
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &ReelConfig {
        &self.config
    }

    /// Apply new tunables; layout is recomputed and the reel must be prepared again
    pub fn set_config(&mut self, config: ReelConfig) {
        self.cache.set_params(config.masonry_params());
        self.config = config;
        self.needs_rebuild = true;
        self.prepared = false;
        self.rebuild_display_items(true);
    }

    /// Replace the item source. The list stays hidden until the next `prepare()`.
    pub fn set_items(&mut self, items: Vec<ReelItem>) {
        self.items = items;
        self.needs_rebuild = true;
        self.prepared = false;
        self.visible = false;
        self.rebuild_display_items(false);
    }

    /// Report the viewport size; call on every layout pass
    pub fn set_viewport(&mut self, size: Size) {
        if size == self.viewport {
            return;
        }
        self.viewport = size;
        self.needs_rebuild = true;
        self.rebuild_display_items(false);
        if self.mode == Mode::Reel && !self.is_transitioning {
            self.reset_offsets_for_reel();
        } else if self.mode == Mode::Unified {
            let clamped = self.scroll_position.clamp(0.0, self.max_offset());
            if clamped != self.scroll_position {
                self.scroll_position = clamped;
                self.apply_unified_decay();
            }
        }
    }

    /// Dispatch one host event
    pub fn handle(&mut self, event: ReelEvent) {
        match event {
            ReelEvent::Frame => self.tick(),
            ReelEvent::TouchBegan | ReelEvent::DragBegan => self.on_touch_began(),
            ReelEvent::Scrolled(position) => self.on_scroll(position),
            ReelEvent::Resized(size) => self.set_viewport(size),
            ReelEvent::Prepare => self.prepare(),
            ReelEvent::Start => self.start(),
            ReelEvent::Stop => self.stop(),
            ReelEvent::Resume => self.resume(),
        }
    }

    // ---------------------------------------------------------------------
    // Mode control
    // ---------------------------------------------------------------------

    /// Put the columns at the start offset without starting the clock, so the
    /// first visible frame is already in place.
    pub fn prepare(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.enter_reel();
        self.rebuild_display_items(true);
        self.reset_offsets_for_reel();
        self.scroll_position = 0.0;
        self.visible = true;
        self.prepared = true;
    }

    /// Enter the reel phase and start the frame driver and countdown.
    /// Coming from unified mode, the scroll position is folded into the
    /// offsets first, as `resume()` does.
    pub fn start(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if !self.prepared {
            self.prepare();
        } else if self.mode == Mode::Unified {
            self.countdown.cancel();
            self.driver.stop();
            self.fold_scroll_into_offsets();
            self.visible = true;
        } else {
            self.enter_reel();
            // A prepare that ran before the viewport was known left both columns at 0
            let offsets = self.cache.offsets();
            if self.config.reel_start_offset > 0.0 && offsets.left == 0.0 && offsets.right == 0.0 {
                self.reset_offsets_for_reel();
            }
            self.visible = true;
        }
        self.start_countdown();
        self.driver.start();
    }

    /// Leave the reel phase now
    pub fn stop(&mut self) {
        self.transition_to_unified();
    }

    /// Continue the reel from what is on screen. In unified mode the shared
    /// scroll position is folded into both column offsets and reset to 0 in
    /// the same call; in reel mode only the countdown restarts.
    pub fn resume(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.align_animator.stop();
        self.countdown.cancel();
        self.driver.stop();

        if self.mode == Mode::Reel {
            self.start_countdown();
            self.driver.start();
            return;
        }

        self.fold_scroll_into_offsets();
        self.start_countdown();
        self.driver.start();
    }

    /// Switch to unified scrolling without moving anything on screen.
    ///
    /// The common part of both offsets becomes the shared scroll position;
    /// what is left over stays on the columns and decays as the user
    /// scrolls toward the top. Runs at most once per reel phase.
    pub fn transition_to_unified(&mut self) {
        if self.items.is_empty() || self.mode != Mode::Reel || self.is_transitioning {
            return;
        }
        self.is_transitioning = true;
        self.driver.stop();
        self.countdown.cancel();
        self.align_animator.stop();

        let offsets = self.cache.offsets();
        let anchor = offsets.left.min(offsets.right);
        self.unified = UnifiedState {
            anchor,
            left: offsets.left - anchor,
            right: offsets.right - anchor,
            locked: false,
        };
        self.cache
            .set_offsets(ColumnOffsets::new(self.unified.left, self.unified.right));
        self.scroll_position = anchor;

        self.mode = Mode::Unified;
        self.is_transitioning = false;

        tracing::debug!(
            anchor,
            left = self.unified.left,
            right = self.unified.right,
            "Reel switched to unified scrolling"
        );
    }

    /// Touch or drag started somewhere on the list
    pub fn on_touch_began(&mut self) {
        if self.mode == Mode::Reel && !self.is_transitioning {
            self.transition_to_unified();
        }
    }

    /// Scroll container moved to `position` (unified mode only)
    pub fn on_scroll(&mut self, position: f64) {
        if self.items.is_empty() || self.mode != Mode::Unified {
            return;
        }
        self.scroll_position = position;
        self.apply_unified_decay();
    }

    // ---------------------------------------------------------------------
    // Clock
    // ---------------------------------------------------------------------

    /// Process one display frame: advance the reel and fire the countdown
    pub fn tick(&mut self) {
        let now = self.clock.now();
        if let Some(dt) = self.driver.step(now) {
            self.advance(dt);
        }
        // Reserved for offset smoothing; idle unless started
        self.align_animator.step(now);
        if self.countdown.poll(now) {
            tracing::debug!("Reel countdown expired");
            self.transition_to_unified();
        }
    }

    /// Move the columns apart by `reel_speed * dt`, bounded by the content
    /// edges and `max_column_skew`.
    pub fn advance(&mut self, dt: Duration) {
        if self.mode != Mode::Reel || self.is_transitioning {
            return;
        }
        let max_offset = self.max_offset();
        if max_offset <= 0.0 {
            return;
        }

        let mut step = self.config.reel_speed * dt.as_secs_f64();
        let max_skew = self.config.max_column_skew.max(0.0);
        if max_skew > 0.0 {
            let offsets = self.cache.offsets();
            let remaining = max_skew - offsets.skew();
            // Only the widening is limited; an over-wide skew is frozen, not pulled back
            step = if remaining <= 0.0 {
                0.0
            } else {
                // Both columns move, so the skew grows by twice the step
                step.min(remaining * 0.5)
            };
        }
        if step <= 0.0 {
            return;
        }

        let offsets = self.cache.offsets();
        let next = ColumnOffsets::new(
            (offsets.left + step).min(max_offset),
            (offsets.right - step).max(0.0),
        );
        self.cache.set_offsets(next);
        tracing::trace!(left = next.left, right = next.right, "Reel advanced");
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    #[inline]
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Whether the host should show the list yet
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Native scrolling is only allowed in unified mode
    #[inline]
    pub fn scroll_enabled(&self) -> bool {
        self.mode == Mode::Unified
    }

    /// Shared scroll position the host container should show
    #[inline]
    pub fn scroll_position(&self) -> f64 {
        self.scroll_position
    }

    #[inline]
    pub fn offsets(&self) -> ColumnOffsets {
        self.cache.offsets()
    }

    /// True once the residual skew has been pinned to zero
    #[inline]
    pub fn offsets_locked(&self) -> bool {
        self.unified.locked
    }

    /// Whether the host needs to keep delivering frames
    #[inline]
    pub fn needs_frames(&self) -> bool {
        self.driver.is_running()
            || self.countdown.is_pending()
            || self.align_animator.is_animating()
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn content_height(&self) -> f64 {
        self.cache.content_height()
    }

    pub fn content_size(&self) -> Size {
        self.cache.content_size()
    }

    /// Largest scroll position / column offset for the current viewport
    pub fn max_offset(&self) -> f64 {
        self.cache.max_offset(self.viewport.height)
    }

    pub fn cell_count(&self) -> usize {
        self.cache.len()
    }

    pub fn item(&self, index: usize) -> Option<&ReelItem> {
        if index < self.cache.len() {
            self.display_items.get(index)
        } else {
            None
        }
    }

    pub fn rect_for(&self, index: usize) -> Option<Rect> {
        self.cache.rect_for(index)
    }

    pub fn column_of(&self, index: usize) -> Option<Column> {
        self.cache.column_of(index)
    }

    /// Cells intersecting `viewport`, given in content coordinates
    pub fn visible_cells(&self, viewport: Rect) -> impl Iterator<Item = (usize, Rect)> + '_ {
        self.cache.query(viewport)
    }

    /// Time left before the reel ends on its own
    pub fn countdown_remaining(&self) -> Option<Duration> {
        self.countdown.remaining(self.clock.now())
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    fn enter_reel(&mut self) {
        self.mode = Mode::Reel;
        self.is_transitioning = false;
        self.align_animator.stop();
        self.unified = UnifiedState::default();
    }

    /// Leave unified mode keeping every cell where it is on screen: the
    /// shared scroll position moves onto both columns and drops to 0.
    fn fold_scroll_into_offsets(&mut self) {
        self.align_animator.stop();
        self.apply_unified_decay();
        let position = self.scroll_position;
        let max_offset = self.max_offset();
        let offsets = self.cache.offsets();
        let next = ColumnOffsets::new(
            (offsets.left + position).clamp(0.0, max_offset),
            (offsets.right + position).clamp(0.0, max_offset),
        );

        self.mode = Mode::Reel;
        self.is_transitioning = false;
        self.scroll_position = 0.0;
        self.cache.set_offsets(next);
        self.unified = UnifiedState::default();

        tracing::debug!(
            position,
            left = next.left,
            right = next.right,
            "Reel restarted from unified scroll"
        );
    }

    fn start_countdown(&mut self) {
        self.countdown
            .schedule(self.clock.now(), self.config.countdown());
    }

    fn reset_offsets_for_reel(&mut self) {
        let start = self.config.reel_start_offset.max(0.0).min(self.max_offset());
        self.cache.set_offsets(ColumnOffsets::uniform(start));
    }

    /// Scale the residual skew by how far the shared position still is from the top
    fn apply_unified_decay(&mut self) {
        if self.mode != Mode::Unified || self.unified.locked {
            return;
        }
        if self.scroll_position <= 0.0 {
            self.cache.set_offsets(ColumnOffsets::default());
            self.unified.locked = true;
            tracing::debug!("Reached top, column skew locked at zero");
            return;
        }
        if self.unified.anchor <= 0.0 {
            self.cache.set_offsets(ColumnOffsets::default());
            return;
        }
        let factor = (self.scroll_position / self.unified.anchor).clamp(0.0, 1.0);
        self.cache.set_offsets(ColumnOffsets::new(
            self.unified.left * factor,
            self.unified.right * factor,
        ));
    }

    fn rebuild_display_items(&mut self, force: bool) {
        if self.viewport.is_empty() {
            return;
        }
        if self.items.is_empty() {
            self.display_items.clear();
            self.cache.invalidate();
            self.cache.rebuild_if_needed(&[], self.viewport);
            return;
        }
        if !force && !self.needs_rebuild {
            return;
        }

        let min_height = self.viewport.height * self.config.min_fill_multiplier;
        self.display_items = ensure_minimum_fill(
            &self.items,
            min_height,
            self.viewport.width,
            self.cache.params(),
        );
        // Same count with different heights would otherwise hit the cache
        self.cache.invalidate();
        self.cache
            .rebuild_if_needed(&heights_of(&self.display_items), self.viewport);
        self.needs_rebuild = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::timing::ManualClock;
    use filmreel_core::Insets;
    use proptest::prelude::*;

    const VIEWPORT: Size = Size {
        width: 224.0,
        height: 400.0,
    };

    fn config() -> ReelConfig {
        ReelConfig {
            countdown_secs: 3.5,
            reel_speed: 60.0,
            reel_start_offset: 360.0,
            max_column_skew: 0.0,
            min_fill_multiplier: 1.3,
            content_insets: Insets::uniform(16.0),
            column_spacing: 12.0,
            item_spacing: 12.0,
            ..Default::default()
        }
    }

    fn items(count: usize) -> Vec<ReelItem> {
        (0..count)
            .map(|i| ReelItem::new(80.0 + (i % 4) as f64 * 40.0, format!("card {i}")))
            .collect()
    }

    fn controller_with(config: ReelConfig) -> (ReelController<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let mut controller = ReelController::new(config, clock.clone());
        controller.set_viewport(VIEWPORT);
        controller.set_items(items(30));
        (controller, clock)
    }

    fn controller() -> (ReelController<ManualClock>, ManualClock) {
        controller_with(config())
    }

    /// Run `frames` frames of `frame_ms` each, priming the driver first
    fn run_frames(
        controller: &mut ReelController<ManualClock>,
        clock: &ManualClock,
        frames: usize,
        frame_ms: u64,
    ) {
        controller.tick();
        for _ in 0..frames {
            clock.advance(Duration::from_millis(frame_ms));
            controller.tick();
        }
    }

    /// Absolute screen y of every cell
    fn screen_positions(controller: &ReelController<ManualClock>) -> Vec<f64> {
        (0..controller.cell_count())
            .map(|i| controller.rect_for(i).unwrap().y - controller.scroll_position())
            .collect()
    }

    #[test]
    fn test_prepare_places_start_offset_without_clock() {
        let (mut controller, _clock) = controller();
        assert!(!controller.is_visible());

        controller.prepare();
        assert!(controller.is_prepared());
        assert!(controller.is_visible());
        assert_eq!(controller.mode(), Mode::Reel);
        assert_eq!(controller.offsets(), ColumnOffsets::uniform(360.0));
        assert!(!controller.needs_frames());
        assert_eq!(controller.countdown_remaining(), None);
    }

    #[test]
    fn test_start_offset_is_clamped_to_max() {
        let (mut controller, _clock) = controller_with(ReelConfig {
            reel_start_offset: 1.0e7,
            ..config()
        });
        controller.prepare();
        let max = controller.max_offset();
        assert!(max > 0.0);
        assert_eq!(controller.offsets(), ColumnOffsets::uniform(max));
    }

    #[test]
    fn test_start_runs_clock_and_countdown() {
        let (mut controller, _clock) = controller();
        controller.start();
        assert!(controller.is_prepared());
        assert!(controller.needs_frames());
        assert_eq!(
            controller.countdown_remaining(),
            Some(Duration::from_millis(3500))
        );
    }

    #[test]
    fn test_ticks_drift_columns_apart() {
        let (mut controller, clock) = controller();
        controller.start();
        // Priming frame moves nothing
        controller.tick();
        assert_eq!(controller.offsets(), ColumnOffsets::uniform(360.0));

        clock.advance(Duration::from_millis(500));
        controller.tick();
        let offsets = controller.offsets();
        assert!((offsets.left - 390.0).abs() < 1e-9);
        assert!((offsets.right - 330.0).abs() < 1e-9);
    }

    #[test]
    fn test_advance_stops_at_bounds() {
        let (mut controller, _clock) = controller();
        controller.start();
        let max = controller.max_offset();
        controller.advance(Duration::from_secs(3600));
        assert_eq!(controller.offsets(), ColumnOffsets::new(max, 0.0));
    }

    #[test]
    fn test_no_overflow_means_no_motion() {
        let clock = ManualClock::new();
        let mut controller = ReelController::new(
            ReelConfig {
                min_fill_multiplier: 0.0,
                ..config()
            },
            clock,
        );
        controller.set_viewport(Size::new(224.0, 5000.0));
        controller.set_items(items(2));
        controller.start();
        assert_eq!(controller.max_offset(), 0.0);
        controller.advance(Duration::from_secs(1));
        assert_eq!(controller.offsets(), ColumnOffsets::default());
    }

    #[test]
    fn test_skew_cap_freezes_widening() {
        let (mut controller, clock) = controller_with(ReelConfig {
            max_column_skew: 40.0,
            ..config()
        });
        controller.start();
        run_frames(&mut controller, &clock, 120, 16);
        let offsets = controller.offsets();
        assert!((offsets.skew() - 40.0).abs() < 1e-9);
        assert!((offsets.left - 380.0).abs() < 1e-9);
        assert!((offsets.right - 340.0).abs() < 1e-9);
    }

    #[test]
    fn test_countdown_expiry_switches_to_unified() {
        let (mut controller, clock) = controller();
        controller.start();
        run_frames(&mut controller, &clock, 10, 100);
        assert_eq!(controller.mode(), Mode::Reel);

        clock.advance(Duration::from_millis(2600));
        controller.tick();
        assert_eq!(controller.mode(), Mode::Unified);
        assert!(controller.scroll_enabled());
        assert!(!controller.needs_frames());
        assert_eq!(controller.countdown_remaining(), None);

        // Frames after the switch change nothing
        let before = controller.offsets();
        clock.advance(Duration::from_secs(1));
        controller.tick();
        assert_eq!(controller.offsets(), before);
    }

    #[test]
    fn test_transition_is_seamless() {
        let (mut controller, clock) = controller();
        controller.start();
        run_frames(&mut controller, &clock, 30, 16);

        let before_offsets = controller.offsets();
        let before = screen_positions(&controller);
        controller.on_touch_began();
        let after = screen_positions(&controller);

        assert_eq!(controller.mode(), Mode::Unified);
        for (a, b) in before.iter().zip(&after) {
            assert!((a - b).abs() < 1e-9);
        }
        let anchor = controller.scroll_position();
        let after_offsets = controller.offsets();
        assert!((anchor + after_offsets.left - before_offsets.left).abs() < 1e-9);
        assert!((anchor + after_offsets.right - before_offsets.right).abs() < 1e-9);
        assert_eq!(anchor, before_offsets.right);
        assert_eq!(after_offsets.right, 0.0);
    }

    #[test]
    fn test_transition_fires_once() {
        let (mut controller, clock) = controller();
        controller.start();
        run_frames(&mut controller, &clock, 30, 16);
        controller.stop();
        let anchor = controller.scroll_position();
        let offsets = controller.offsets();

        controller.on_touch_began();
        controller.handle(ReelEvent::DragBegan);
        controller.stop();
        assert_eq!(controller.scroll_position(), anchor);
        assert_eq!(controller.offsets(), offsets);
    }

    #[test]
    fn test_unified_decay_is_linear() {
        let (mut controller, clock) = controller();
        controller.start();
        run_frames(&mut controller, &clock, 60, 16);
        controller.stop();

        let anchor = controller.scroll_position();
        let residual = controller.offsets();
        assert!(residual.left > 0.0);

        controller.on_scroll(anchor / 2.0);
        let half = controller.offsets();
        assert!((half.left - residual.left / 2.0).abs() < 1e-9);
        assert_eq!(half.right, 0.0);

        // Scrolling past the anchor never grows the skew beyond the residual
        controller.on_scroll(anchor * 3.0);
        assert_eq!(controller.offsets(), residual);
    }

    #[test]
    fn test_top_lock_is_permanent() {
        let (mut controller, clock) = controller();
        controller.start();
        run_frames(&mut controller, &clock, 60, 16);
        controller.stop();
        let anchor = controller.scroll_position();

        controller.on_scroll(0.0);
        assert!(controller.offsets_locked());
        for position in [anchor, anchor / 3.0, anchor * 2.0, -5.0] {
            controller.on_scroll(position);
            assert_eq!(controller.offsets(), ColumnOffsets::default());
        }
    }

    #[test]
    fn test_zero_anchor_snaps_on_scroll() {
        let (mut controller, _clock) = controller();
        controller.start();
        // Run right column into the top edge so the anchor becomes 0
        controller.advance(Duration::from_secs(60));
        controller.stop();
        assert_eq!(controller.scroll_position(), 0.0);
        assert!(controller.offsets().left > 0.0);

        controller.on_scroll(25.0);
        assert_eq!(controller.offsets(), ColumnOffsets::default());
        assert!(!controller.offsets_locked());
    }

    #[test]
    fn test_resume_folds_scroll_into_offsets() {
        let (mut controller, clock) = controller();
        controller.start();
        run_frames(&mut controller, &clock, 30, 16);
        controller.stop();

        let anchor = controller.scroll_position();
        let position = anchor + 100.0;
        controller.on_scroll(position);
        let before = screen_positions(&controller);

        controller.resume();
        assert_eq!(controller.mode(), Mode::Reel);
        assert_eq!(controller.scroll_position(), 0.0);
        assert!(!controller.offsets_locked());
        assert!(controller.needs_frames());
        assert_eq!(
            controller.countdown_remaining(),
            Some(Duration::from_millis(3500))
        );

        let after = screen_positions(&controller);
        for (a, b) in before.iter().zip(&after) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_resume_clamps_to_max_offset() {
        let (mut controller, _clock) = controller();
        controller.start();
        controller.stop();
        let max = controller.max_offset();
        controller.on_scroll(max * 5.0);
        controller.resume();
        let offsets = controller.offsets();
        assert!(offsets.left <= max && offsets.right <= max);
        assert!(offsets.left >= 0.0 && offsets.right >= 0.0);
    }

    #[test]
    fn test_resume_in_reel_restarts_countdown() {
        let (mut controller, clock) = controller();
        controller.start();
        run_frames(&mut controller, &clock, 10, 100);
        let offsets = controller.offsets();

        controller.resume();
        assert_eq!(controller.mode(), Mode::Reel);
        assert_eq!(controller.offsets(), offsets);
        assert_eq!(
            controller.countdown_remaining(),
            Some(Duration::from_millis(3500))
        );
    }

    #[test]
    fn test_scroll_ignored_in_reel() {
        let (mut controller, _clock) = controller();
        controller.start();
        controller.on_scroll(120.0);
        assert_eq!(controller.scroll_position(), 0.0);
        assert_eq!(controller.offsets(), ColumnOffsets::uniform(360.0));
    }

    #[test]
    fn test_empty_items_are_no_ops() {
        let clock = ManualClock::new();
        let mut controller = ReelController::new(config(), clock.clone());
        controller.set_viewport(VIEWPORT);

        controller.prepare();
        controller.start();
        assert!(!controller.is_prepared());
        assert!(!controller.needs_frames());
        controller.stop();
        controller.on_touch_began();
        controller.resume();
        assert_eq!(controller.mode(), Mode::Reel);
        assert_eq!(controller.cell_count(), 0);
        assert_eq!(controller.rect_for(0), None);
        assert_eq!(controller.column_of(0), None);
        assert_eq!(controller.item(0), None);
        assert_eq!(
            controller
                .visible_cells(Rect::new(0.0, 0.0, 224.0, 400.0))
                .count(),
            0
        );
    }

    #[test]
    fn test_short_list_is_padded() {
        let clock = ManualClock::new();
        let mut controller = ReelController::new(config(), clock);
        controller.set_viewport(VIEWPORT);
        controller.set_items(items(2));
        assert!(controller.cell_count() > 2);
        assert!(controller.content_height() >= VIEWPORT.height * 1.3);
        assert_eq!(controller.item(2).unwrap().title, "card 0");
    }

    #[test]
    fn test_resize_resets_offsets_in_reel() {
        let (mut controller, clock) = controller();
        controller.start();
        run_frames(&mut controller, &clock, 30, 16);
        assert_ne!(controller.offsets(), ColumnOffsets::uniform(360.0));

        controller.handle(ReelEvent::Resized(Size::new(300.0, 400.0)));
        assert_eq!(controller.offsets(), ColumnOffsets::uniform(360.0));
        assert_eq!(controller.content_size().width, 300.0);
    }

    #[test]
    fn test_resize_keeps_unified_offsets() {
        let (mut controller, clock) = controller();
        controller.start();
        run_frames(&mut controller, &clock, 30, 16);
        controller.stop();
        let offsets = controller.offsets();
        controller.set_viewport(Size::new(300.0, 400.0));
        assert_eq!(controller.offsets(), offsets);
    }

    #[test]
    fn test_resize_clamps_unified_scroll_position() {
        let (mut controller, clock) = controller();
        controller.start();
        run_frames(&mut controller, &clock, 30, 16);
        controller.stop();
        let max = controller.max_offset();
        controller.on_scroll(max);

        controller.set_viewport(Size::new(224.0, 1200.0));
        let new_max = controller.max_offset();
        assert!(new_max < max);
        assert_eq!(controller.scroll_position(), new_max);
        let offsets = controller.offsets();
        assert!(offsets.left >= 0.0 && offsets.left <= new_max);
        assert!(offsets.right >= 0.0 && offsets.right <= new_max);
    }

    #[test]
    fn test_restart_from_unified_keeps_cells_in_place() {
        let (mut controller, clock) = controller();
        controller.start();
        controller.tick();
        clock.advance(Duration::from_secs(1));
        controller.tick();
        controller.stop();
        let position = controller.scroll_position() + 200.0;
        controller.on_scroll(position);

        let before_start = screen_positions(&controller);
        controller.start();
        assert_eq!(controller.mode(), Mode::Reel);
        assert_eq!(controller.scroll_position(), 0.0);
        assert!(controller.needs_frames());
        let after_start = screen_positions(&controller);
        for (a, b) in before_start.iter().zip(&after_start) {
            assert!((a - b).abs() < 1e-9);
        }

        controller.on_touch_began();
        assert_eq!(controller.mode(), Mode::Unified);
        let after_touch = screen_positions(&controller);
        for (a, b) in after_start.iter().zip(&after_touch) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_start_after_blind_prepare_applies_start_offset() {
        let clock = ManualClock::new();
        let mut controller = ReelController::new(config(), clock);
        controller.set_items(items(30));
        // No viewport yet: nothing to lay out, offsets stay at 0
        controller.prepare();
        assert_eq!(controller.offsets(), ColumnOffsets::default());

        controller.set_viewport(VIEWPORT);
        controller.set_items(items(30));
        controller.prepare();
        controller.transition_to_unified();
        controller.on_scroll(0.0);
        assert_eq!(controller.offsets(), ColumnOffsets::default());

        // Prepared, zero offsets, positive start offset: start puts them back
        controller.start();
        assert_eq!(controller.mode(), Mode::Reel);
        assert!(!controller.offsets_locked());
        assert_eq!(controller.offsets(), ColumnOffsets::uniform(360.0));
    }

    #[test]
    fn test_set_config_requires_new_prepare() {
        let (mut controller, _clock) = controller();
        controller.prepare();
        let height = controller.content_height();
        controller.set_config(ReelConfig {
            item_spacing: 40.0,
            ..config()
        });
        assert!(!controller.is_prepared());
        assert!(controller.content_height() > height);
    }

    proptest! {
        #[test]
        fn prop_offsets_stay_in_bounds(
            frames in prop::collection::vec(0u64..250, 1..200),
            speed in 0.0f64..2000.0,
            skew in prop_oneof![Just(0.0f64), 1.0f64..300.0],
        ) {
            let (mut controller, clock) = controller_with(ReelConfig {
                reel_speed: speed,
                max_column_skew: skew,
                countdown_secs: 1.0e6,
                ..config()
            });
            controller.start();
            controller.tick();
            let max = controller.max_offset();
            for ms in frames {
                clock.advance(Duration::from_millis(ms));
                controller.tick();
                let offsets = controller.offsets();
                prop_assert!(offsets.left >= 0.0 && offsets.left <= max);
                prop_assert!(offsets.right >= 0.0 && offsets.right <= max);
                if skew > 0.0 {
                    prop_assert!(offsets.skew() <= skew + 1e-9);
                }
            }
        }

        #[test]
        fn prop_top_lock_holds(positions in prop::collection::vec(-100.0f64..5000.0, 1..30)) {
            let (mut controller, clock) = controller();
            controller.start();
            run_frames(&mut controller, &clock, 20, 16);
            controller.stop();
            controller.on_scroll(0.0);
            for position in positions {
                controller.on_scroll(position);
                prop_assert_eq!(controller.offsets(), ColumnOffsets::default());
            }
        }
    }
}
