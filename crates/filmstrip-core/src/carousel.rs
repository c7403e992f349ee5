//! Infinite carousel state machine.
//!
//! A carousel shows a window of `cards_per_view` cards out of a larger strip
//! and fakes infinite scrolling by padding the strip with clones of the head
//! and tail. The controller owns the scroll offset (in fractional terminal
//! cells), the clone layout, and the page indicator, and corrects the offset
//! whenever it drifts into clone territory once motion has settled.
//!
//! The machine is pure: time is passed in as integer milliseconds and layout
//! measurements arrive through [`Geometry`], so every transition is
//! deterministic and testable without a terminal.

use crate::pager::Pager;

/// Fixed per-instance tuning for a carousel.
#[derive(Debug, Clone, Copy)]
pub struct CarouselConfig {
    /// Cards visible at once; also the clone count on each side.
    pub cards_per_view: usize,
    /// Tolerance (in cells) before a boundary correction kicks in.
    pub epsilon: f32,
    /// Quiet window after free scrolling before the boundary check runs.
    pub scroll_settle_ms: u64,
    /// Delay after a prev/next step before the boundary check runs.
    pub advance_settle_ms: u64,
    /// Delay after a marker jump before the boundary check runs.
    pub jump_settle_ms: u64,
    /// Duration of a smooth scroll animation.
    pub glide_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            cards_per_view: 6,
            epsilon: 2.0,
            scroll_settle_ms: 120,
            advance_settle_ms: 280,
            jump_settle_ms: 300,
            glide_ms: 240,
        }
    }
}

/// Scroll-axis measurements supplied by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    /// Width of one card in cells.
    pub card_width: f32,
    /// Gap between adjacent cards in cells.
    pub gap: f32,
    /// Width of the visible window in cells.
    pub viewport_width: f32,
}

/// One position in the virtual (clone-padded) strip.
///
/// Clones point back at a real item but are pure visual echoes: they are
/// never the target of likes or selection, and enumerating real items must
/// skip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub real_index: usize,
    pub is_clone: bool,
}

impl Slot {
    fn real(real_index: usize) -> Self {
        Self {
            real_index,
            is_clone: false,
        }
    }

    /// Produce a non-interactive visual duplicate of a real item.
    fn clone_of(real_index: usize) -> Self {
        Self {
            real_index,
            is_clone: true,
        }
    }
}

/// An in-flight smooth scroll.
#[derive(Debug, Clone, Copy)]
struct Glide {
    from: f32,
    to: f32,
    start_ms: u64,
    duration_ms: u64,
}

impl Glide {
    fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    fn sample(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * smoothstep(t)
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Always-non-negative modulo. Plain `%` would round toward zero and hand
/// back negative indices for positions left of the first real card.
fn modulo(value: i64, m: i64) -> i64 {
    value.rem_euclid(m)
}

/// The infinite carousel controller.
pub struct Carousel {
    config: CarouselConfig,
    geometry: Geometry,
    item_count: usize,
    slots: Vec<Slot>,
    scroll: f32,
    glide: Option<Glide>,
    settle_at: Option<u64>,
    resize_pending: bool,
    /// When a marker row with a fixed number of dots exists, its count
    /// overrides the computed page count.
    fixed_marker_count: Option<usize>,
    pager: Pager,
}

impl Carousel {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            geometry: Geometry::default(),
            item_count: 0,
            slots: Vec::new(),
            scroll: 0.0,
            glide: None,
            settle_at: None,
            resize_pending: false,
            fixed_marker_count: None,
            pager: Pager::new(0),
        }
    }

    /// Pin the marker count to an externally supplied number of dots.
    pub fn with_marker_count(mut self, count: usize) -> Self {
        self.fixed_marker_count = Some(count);
        self
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// The virtual strip: tail clones, then the real items, then head clones.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn active_page(&self) -> Option<usize> {
        self.pager.active_index()
    }

    fn clone_count(&self) -> usize {
        self.config.cards_per_view
    }

    /// Scroll-axis distance occupied by one card including its trailing gap.
    ///
    /// Falls back to the viewport width when no cards exist; that is a
    /// defensive default, not a normal path.
    pub fn slot_size(&self) -> f32 {
        if self.item_count == 0 {
            self.geometry.viewport_width
        } else {
            self.geometry.card_width + self.geometry.gap
        }
    }

    /// Marker count when dots exist, otherwise `ceil(N / P)`.
    pub fn page_count(&self) -> usize {
        if let Some(count) = self.fixed_marker_count {
            if count > 0 {
                return count;
            }
        }
        self.item_count
            .div_ceil(self.config.cards_per_view)
            .max(1)
    }

    /// Rebuild clones and reset the strip to its canonical start.
    ///
    /// Idempotent: calling this twice with unchanged content yields the same
    /// scroll offset and page state. With zero items it degrades to an empty
    /// strip with nothing active.
    pub fn initialize(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.glide = None;
        self.settle_at = None;
        self.rebuild_slots();
        self.rebuild_pager();

        if item_count == 0 {
            self.scroll = 0.0;
            return;
        }

        // Instant (non-animated) jump so the first real card sits at the
        // visible origin.
        self.scroll = self.clone_count() as f32 * self.slot_size();
        self.publish_active_page(self.current_page());
    }

    fn rebuild_slots(&mut self) {
        self.slots.clear();
        let n = self.item_count;
        if n == 0 {
            return;
        }
        let k = self.clone_count();

        // Tail clones first so the strip can be scrolled left of item 0.
        // Indices wrap so the invariant len == N + 2K holds even when N < K.
        for i in 0..k {
            let idx = modulo(n as i64 - k as i64 + i as i64, n as i64) as usize;
            self.slots.push(Slot::clone_of(idx));
        }
        for i in 0..n {
            self.slots.push(Slot::real(i));
        }
        for i in 0..k {
            self.slots.push(Slot::clone_of(i % n));
        }
    }

    fn rebuild_pager(&mut self) {
        let count = match self.fixed_marker_count {
            Some(count) => count,
            None if self.item_count == 0 => 0,
            None => self.item_count.div_ceil(self.config.cards_per_view),
        };
        self.pager = Pager::new(count);
    }

    /// Page derived from the current scroll offset.
    ///
    /// Returns 0 for an empty strip or a degenerate zero-width slot.
    pub fn current_page(&self) -> usize {
        let s = self.slot_size();
        let n = self.item_count;
        if n == 0 || s <= 0.0 {
            return 0;
        }

        let left_boundary = self.clone_count() as f32 * s;
        let virtual_index = ((self.scroll - left_boundary) / s).round() as i64;
        let real_index = modulo(virtual_index, n as i64) as usize;
        let page = (real_index / self.config.cards_per_view) as i64;
        modulo(page, self.page_count() as i64) as usize
    }

    /// Light exactly one marker; no-op when no markers are configured.
    pub fn publish_active_page(&mut self, page: usize) {
        self.pager.set_active(page);
    }

    /// Index of the real item currently at the visible origin.
    pub fn leading_real_index(&self) -> Option<usize> {
        let s = self.slot_size();
        if self.item_count == 0 || s <= 0.0 {
            return None;
        }
        let left_boundary = self.clone_count() as f32 * s;
        let virtual_index = ((self.scroll - left_boundary) / s).round() as i64;
        Some(modulo(virtual_index, self.item_count as i64) as usize)
    }

    /// Smoothly step one full page forward (`+1`) or back (`-1`).
    pub fn advance(&mut self, direction: i32, now_ms: u64) {
        let s = self.slot_size();
        if self.item_count == 0 || s <= 0.0 {
            return;
        }
        let step = direction as f32 * self.config.cards_per_view as f32 * s;
        let from = self.current_scroll(now_ms);
        self.glide = Some(Glide::new(from, from + step, now_ms, self.config.glide_ms));
        self.settle_at = Some(now_ms + self.config.advance_settle_ms);
    }

    /// Smoothly scroll to the start of page `index`.
    pub fn jump_to_page(&mut self, index: usize, now_ms: u64) {
        let s = self.slot_size();
        if self.item_count == 0 || s <= 0.0 {
            return;
        }
        let left_boundary = self.clone_count() as f32 * s;
        let target = left_boundary + index as f32 * self.config.cards_per_view as f32 * s;
        let from = self.current_scroll(now_ms);
        self.glide = Some(Glide::new(from, target, now_ms, self.config.glide_ms));
        self.settle_at = Some(now_ms + self.config.jump_settle_ms);
    }

    /// Free scrolling (wheel/drag analogue): move instantly and reschedule
    /// the settle check. Each call replaces any pending check, so a storm of
    /// scroll events results in a single correction once things go quiet.
    pub fn scroll_by(&mut self, delta: f32, now_ms: u64) {
        if self.item_count == 0 {
            return;
        }
        // Sample any in-flight glide first so an interrupt between frames
        // starts from where the animation actually is.
        self.scroll = self.current_scroll(now_ms) + delta;
        self.glide = None;
        self.settle_at = Some(now_ms + self.config.scroll_settle_ms);
    }

    /// Record a viewport change. Corrections are coalesced: however many
    /// resize events arrive before the next tick, only one pass runs.
    pub fn on_resize(&mut self, geometry: Geometry) {
        self.geometry = geometry;
        self.resize_pending = true;
    }

    /// Drive pending animation and deferred work. Call once per frame.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(glide) = self.glide {
            self.scroll = glide.sample(now_ms);
            if glide.is_done(now_ms) {
                self.glide = None;
            }
        }

        if self.resize_pending {
            self.resize_pending = false;
            self.apply_resize();
        }

        if let Some(deadline) = self.settle_at {
            if now_ms >= deadline {
                self.settle_at = None;
                self.settle_boundary();
            }
        }
    }

    /// Whether a deferred boundary check is scheduled.
    pub fn has_pending_settle(&self) -> bool {
        self.settle_at.is_some()
    }

    /// Whether a smooth scroll is still in flight.
    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    /// Teleport back into real territory if the offset has drifted into the
    /// clones, then republish the page. The jump is instant and moves by a
    /// whole number of logical-strip widths, so the cards on screen do not
    /// visibly change.
    pub fn settle_boundary(&mut self) {
        let s = self.slot_size();
        let n = self.item_count;
        if n == 0 || s <= 0.0 {
            return;
        }

        let k = self.clone_count() as f32;
        let left_boundary = k * s;
        let right_boundary = (k + n as f32) * s - self.geometry.viewport_width;
        let span = n as f32 * s;

        if self.scroll < left_boundary - self.config.epsilon
            || self.scroll > right_boundary + self.config.epsilon
        {
            self.glide = None;
            // The drift can exceed one lap, so normalize instead of
            // stepping once.
            self.scroll = left_boundary + (self.scroll - left_boundary).rem_euclid(span);
            tracing::trace!(scroll = self.scroll, "wrapped back into real territory");
        }

        self.publish_active_page(self.current_page());
    }

    fn apply_resize(&mut self) {
        let s = self.slot_size();
        // Best-effort: remember roughly which card was at the origin so the
        // rebuild does not yank the view back to the start.
        let approx_index = if s > 0.0 {
            (self.scroll / s).round().max(0.0) as usize
        } else {
            0
        };

        let item_count = self.item_count;
        self.initialize(item_count);
        if item_count == 0 {
            return;
        }

        let s = self.slot_size();
        if s > 0.0 {
            self.scroll = self.clone_count().max(approx_index) as f32 * s;
        }
        self.publish_active_page(self.current_page());
    }

    fn current_scroll(&self, now_ms: u64) -> f32 {
        match self.glide {
            Some(glide) => glide.sample(now_ms),
            None => self.scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: f32 = 20.0;
    const GAP: f32 = 2.0;
    const SLOT: f32 = CARD + GAP;

    fn carousel_with(items: usize) -> Carousel {
        let mut carousel = Carousel::new(CarouselConfig::default());
        carousel.set_geometry(Geometry {
            card_width: CARD,
            gap: GAP,
            viewport_width: 6.0 * SLOT,
        });
        carousel.initialize(items);
        carousel
    }

    /// Run the animation and any scheduled settle to completion.
    fn settle(carousel: &mut Carousel, mut now_ms: u64) -> u64 {
        for _ in 0..60 {
            now_ms += 16;
            carousel.tick(now_ms);
        }
        now_ms
    }

    #[test]
    fn test_initialize_builds_clone_padded_strip() {
        let carousel = carousel_with(18);

        // N + 2K slots, clones on both ends.
        assert_eq!(carousel.slots().len(), 18 + 2 * 6);
        assert!(carousel.slots()[..6].iter().all(|s| s.is_clone));
        assert!(carousel.slots()[6..24].iter().all(|s| !s.is_clone));
        assert!(carousel.slots()[24..].iter().all(|s| s.is_clone));

        // Tail clones mirror the last K items, head clones the first K.
        let tail: Vec<usize> = carousel.slots()[..6].iter().map(|s| s.real_index).collect();
        assert_eq!(tail, vec![12, 13, 14, 15, 16, 17]);
        let head: Vec<usize> = carousel.slots()[24..].iter().map(|s| s.real_index).collect();
        assert_eq!(head, vec![0, 1, 2, 3, 4, 5]);

        // First real card at the visible origin, page 0 active.
        assert_eq!(carousel.scroll(), 6.0 * SLOT);
        assert_eq!(carousel.active_page(), Some(0));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut carousel = carousel_with(18);
        let scroll = carousel.scroll();
        let page = carousel.active_page();

        carousel.initialize(18);
        assert_eq!(carousel.scroll(), scroll);
        assert_eq!(carousel.active_page(), page);
        assert_eq!(carousel.slots().len(), 30);
    }

    #[test]
    fn test_empty_strip_degrades_to_noops() {
        let mut carousel = carousel_with(0);

        assert!(carousel.slots().is_empty());
        assert_eq!(carousel.current_page(), 0);
        assert!(carousel.active_page().is_none());
        assert!(carousel.leading_real_index().is_none());

        // Every operation is a silent no-op.
        carousel.advance(1, 0);
        carousel.jump_to_page(2, 0);
        carousel.scroll_by(50.0, 0);
        carousel.settle_boundary();
        assert_eq!(carousel.scroll(), 0.0);
        assert!(!carousel.has_pending_settle());
    }

    #[test]
    fn test_zero_slot_size_treated_as_degenerate() {
        let mut carousel = Carousel::new(CarouselConfig::default());
        carousel.set_geometry(Geometry::default());
        carousel.initialize(18);

        assert_eq!(carousel.current_page(), 0);
        carousel.advance(1, 0);
        assert!(!carousel.is_gliding());
    }

    #[test]
    fn test_advance_steps_one_page() {
        let mut carousel = carousel_with(18);

        carousel.advance(1, 0);
        assert!(carousel.is_gliding());
        assert!(carousel.has_pending_settle());

        settle(&mut carousel, 0);
        assert_eq!(carousel.scroll(), 12.0 * SLOT);
        assert_eq!(carousel.active_page(), Some(1));
    }

    #[test]
    fn test_worked_example_three_advances_wrap_to_start() {
        // N = 18, P = 6: three steps land exactly on the right wrap boundary
        // and the settle teleports back by 18 slots with the page unchanged.
        let mut carousel = carousel_with(18);

        let mut now = 0;
        for _ in 0..3 {
            carousel.advance(1, now);
            now = settle(&mut carousel, now);
        }

        assert_eq!(carousel.scroll(), 6.0 * SLOT);
        assert_eq!(carousel.active_page(), Some(0));
    }

    #[test]
    fn test_backward_advance_wraps_through_tail_clones() {
        let mut carousel = carousel_with(18);

        carousel.advance(-1, 0);
        settle(&mut carousel, 0);

        // 6*SLOT - 6*SLOT = 0 < leftBoundary - eps, so the settle adds N
        // slots: 0 + 18 = 18 slots, which is page 2.
        assert_eq!(carousel.scroll(), 18.0 * SLOT);
        assert_eq!(carousel.active_page(), Some(2));
    }

    #[test]
    fn test_left_teleport_is_page_invisible() {
        let mut carousel = carousel_with(18);

        // Drift well into the tail clones.
        carousel.scroll_by(-(6.0 * SLOT) - 10.0, 0);
        let page_before = carousel.current_page();

        carousel.settle_boundary();

        let s = carousel.slot_size();
        let left = 6.0 * s;
        assert!(carousel.scroll() >= left);
        assert!(carousel.scroll() < left + 18.0 * s);
        assert_eq!(carousel.current_page(), page_before);
    }

    #[test]
    fn test_within_boundaries_no_correction() {
        let mut carousel = carousel_with(18);

        carousel.scroll_by(3.0 * SLOT, 0);
        let before = carousel.scroll();
        carousel.settle_boundary();
        assert_eq!(carousel.scroll(), before);
    }

    #[test]
    fn test_full_lap_returns_to_same_page() {
        let mut carousel = carousel_with(18);
        let start_page = carousel.current_page();

        carousel.scroll_by(18.0 * SLOT, 0);
        carousel.settle_boundary();

        assert_eq!(carousel.current_page(), start_page);
    }

    #[test]
    fn test_full_virtual_width_is_periodic() {
        // With N = 12 and K = 6 the virtual width (N + 2K slots) is a whole
        // number of laps, so it must land on the starting page.
        let mut carousel = carousel_with(12);
        let start_page = carousel.current_page();

        carousel.scroll_by((12.0 + 12.0) * SLOT, 0);
        carousel.settle_boundary();

        assert_eq!(carousel.current_page(), start_page);
    }

    #[test]
    fn test_current_page_always_in_range() {
        let mut carousel = carousel_with(18);
        let pages = carousel.page_count();

        let mut offset = -30.0 * SLOT;
        while offset < 60.0 * SLOT {
            carousel.scroll = offset;
            assert!(carousel.current_page() < pages, "offset {offset}");
            offset += 0.37 * SLOT;
        }
    }

    #[test]
    fn test_euclidean_modulo_left_of_origin() {
        let mut carousel = carousel_with(18);

        // One card left of the first real item: negative virtual index must
        // map to the last card, not page -1.
        carousel.scroll = 5.0 * SLOT;
        assert_eq!(carousel.leading_real_index(), Some(17));
        assert_eq!(carousel.current_page(), 2);
    }

    #[test]
    fn test_jump_to_page_lands_on_page() {
        let mut carousel = carousel_with(18);

        for page in 0..carousel.page_count() {
            carousel.jump_to_page(page, 0);
            settle(&mut carousel, 0);
            assert_eq!(carousel.current_page(), page);
            assert_eq!(carousel.active_page(), Some(page));
        }
    }

    #[test]
    fn test_publish_active_page_is_exclusive() {
        let mut carousel = carousel_with(18);

        carousel.publish_active_page(2);
        carousel.publish_active_page(1);

        let pager = carousel.pager();
        assert_eq!(pager.active_index(), Some(1));
        let active = (0..pager.len()).filter(|&i| pager.is_active(i)).count();
        assert_eq!(active, 1);
    }

    #[test]
    fn test_fixed_marker_count_overrides_page_count() {
        let mut carousel = Carousel::new(CarouselConfig::default()).with_marker_count(3);
        carousel.set_geometry(Geometry {
            card_width: CARD,
            gap: GAP,
            viewport_width: 6.0 * SLOT,
        });
        // 25 items would compute ceil(25/6) = 5 pages; the dots say 3.
        carousel.initialize(25);

        assert_eq!(carousel.page_count(), 3);
        assert_eq!(carousel.pager().len(), 3);
        assert!(carousel.current_page() < 3);
    }

    #[test]
    fn test_scroll_debounce_coalesces_settles() {
        let mut carousel = carousel_with(18);

        carousel.scroll_by(-(8.0 * SLOT), 0);
        carousel.scroll_by(0.5 * SLOT, 50);

        // First deadline (120) was replaced by the second (170).
        carousel.tick(130);
        assert!(carousel.has_pending_settle());

        carousel.tick(170);
        assert!(!carousel.has_pending_settle());
        // The single settle corrected the drift into the tail clones.
        assert!(carousel.scroll() >= 6.0 * SLOT - carousel.config().epsilon);
    }

    #[test]
    fn test_settle_after_deep_drift_lands_in_real_territory() {
        let mut carousel = carousel_with(18);

        // Held-key drift: each step lands inside the previous quiet window,
        // so nothing settles until the stream stops, 21 slots left of start.
        let mut now = 0;
        for _ in 0..21 {
            carousel.scroll_by(-SLOT, now);
            now += 50;
        }
        let page_before = carousel.current_page();

        settle(&mut carousel, now);

        let left = 6.0 * SLOT;
        assert!(carousel.scroll() >= left);
        assert!(carousel.scroll() < left + 18.0 * SLOT);
        assert_eq!(carousel.current_page(), page_before);
    }

    #[test]
    fn test_settle_after_multi_lap_right_drift() {
        let mut carousel = carousel_with(18);

        carousel.scroll_by(30.0 * SLOT, 0);
        let page_before = carousel.current_page();
        carousel.settle_boundary();

        let left = 6.0 * SLOT;
        assert!(carousel.scroll() >= left);
        assert!(carousel.scroll() < left + 18.0 * SLOT);
        assert_eq!(carousel.current_page(), page_before);
    }

    #[test]
    fn test_scroll_interrupt_uses_in_flight_position() {
        let mut carousel = carousel_with(18);

        carousel.advance(1, 0);
        carousel.tick(100);
        let rendered = carousel.scroll();

        // Input between frames: the delta applies to where the animation is
        // at that instant, not the last rendered sample.
        carousel.scroll_by(SLOT, 160);

        assert!(!carousel.is_gliding());
        assert!(carousel.scroll() > rendered + SLOT);
        assert!(carousel.scroll() < 12.0 * SLOT + SLOT);
    }

    #[test]
    fn test_resize_with_unchanged_slot_preserves_position() {
        let mut carousel = carousel_with(18);
        carousel.scroll = 14.0 * SLOT; // card 8 at origin

        // A burst of resize events before the next tick; only the viewport
        // changed, so the same card stays at the origin.
        let mut geometry = carousel.geometry();
        geometry.viewport_width = 4.0 * SLOT;
        carousel.on_resize(geometry);
        carousel.on_resize(geometry);
        carousel.tick(16);

        assert_eq!(carousel.scroll(), 14.0 * SLOT);
        assert!(carousel.active_page().is_some());
    }

    #[test]
    fn test_resize_with_new_slot_snaps_to_nearest_card() {
        let mut carousel = carousel_with(18);
        carousel.scroll = 14.0 * SLOT;

        let narrow = Geometry {
            card_width: 10.0,
            gap: 1.0,
            viewport_width: 66.0,
        };
        carousel.on_resize(narrow);
        carousel.tick(16);

        // Best-effort heuristic: the raw offset is re-read against the new
        // slot size, then snapped to a whole card.
        let expected = (14.0_f32 * SLOT / 11.0).round() * 11.0;
        assert_eq!(carousel.scroll(), expected);
    }

    #[test]
    fn test_resize_never_lands_inside_tail_clones() {
        let mut carousel = carousel_with(18);
        carousel.scroll = 2.0 * SLOT; // drifted into the clones

        carousel.on_resize(carousel.geometry());
        carousel.tick(16);

        // max(K, approx) keeps the origin at or right of the first real card.
        assert!(carousel.scroll() >= 6.0 * SLOT);
    }

    #[test]
    fn test_fewer_items_than_clones_keeps_strip_invariant() {
        let carousel = carousel_with(4);

        // len == N + 2K even when N < K; clone indices wrap.
        assert_eq!(carousel.slots().len(), 4 + 12);
        assert!(carousel.slots().iter().all(|s| s.real_index < 4));
        assert_eq!(carousel.page_count(), 1);
        assert_eq!(carousel.active_page(), Some(0));
    }

    #[test]
    fn test_clones_are_marked_non_interactive() {
        let carousel = carousel_with(18);
        let real: Vec<&Slot> = carousel.slots().iter().filter(|s| !s.is_clone).collect();
        assert_eq!(real.len(), 18);
        for (i, slot) in real.iter().enumerate() {
            assert_eq!(slot.real_index, i);
        }
    }
}
