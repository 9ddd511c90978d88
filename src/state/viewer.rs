//! Lightbox and strip interaction state.
//!
//! `ViewerState` is the state machine behind every showcase surface: which
//! slide the lightbox shows (if any), which slide is nearest the strip
//! center, the current zoom factor, and whether the strip is scrolled to
//! its end. All transitions are synchronous and total; out-of-range
//! requests are clamped or ignored rather than surfaced as errors.

/// Zoom adjustment applied per step.
pub const ZOOM_STEP: f64 = 0.25;
/// The neutral zoom factor.
pub const ZOOM_DEFAULT: f64 = 1.0;

/// Inclusive zoom bounds for one surface.
///
/// The lightbox and the inline strip intentionally carry different maxima:
/// the strip scales a whole row of slides where 2x already overflows the
/// viewport, while the lightbox shows a single asset worth inspecting at 3x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
}

impl ZoomBounds {
    /// Bounds for the lightbox image.
    pub const LIGHTBOX: ZoomBounds = ZoomBounds { min: 0.5, max: 3.0 };
    /// Bounds for the inline hub strip.
    pub const STRIP: ZoomBounds = ZoomBounds { min: 0.5, max: 2.0 };

    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }

    /// One step in, clamped to the maximum.
    pub fn increase(&self, zoom: f64) -> f64 {
        self.clamp(zoom + ZOOM_STEP)
    }

    /// One step out, clamped to the minimum.
    pub fn decrease(&self, zoom: f64) -> f64 {
        self.clamp(zoom - ZOOM_STEP)
    }
}

/// Display label for a zoom factor, e.g. `1.25` renders as `125%`.
pub fn zoom_percent_label(zoom: f64) -> String {
    format!("{}%", (zoom * 100.0).round() as i64)
}

/// Interaction state for one showcase instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    /// Slide shown in the lightbox; `None` while closed.
    active_index: Option<usize>,
    /// Slide nearest the strip's horizontal center.
    pub visible_index: usize,
    /// Lightbox zoom factor. Reset to the default on close and navigation.
    pub zoom: f64,
    /// Whether the strip is scrolled to its maximum extent.
    pub is_at_end: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            active_index: None,
            visible_index: 0,
            zoom: ZOOM_DEFAULT,
            is_at_end: false,
        }
    }
}

impl ViewerState {
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn is_open(&self) -> bool {
        self.active_index.is_some()
    }

    /// Open the lightbox at `index`. Callers only open from rendered list
    /// positions, so an out-of-range index is a caller bug; it is clamped
    /// into the list rather than trusted. Opening over an empty list is
    /// ignored.
    pub fn open(&mut self, index: usize, slide_count: usize) {
        if slide_count == 0 {
            return;
        }
        self.active_index = Some(index.min(slide_count - 1));
        self.zoom = ZOOM_DEFAULT;
    }

    /// Close the lightbox and reset zoom. No-op when already closed.
    pub fn close(&mut self) {
        self.active_index = None;
        self.zoom = ZOOM_DEFAULT;
    }

    /// Advance to the next slide with wrap-around. Zoom resets; navigation
    /// is a no-op while closed or with fewer than two slides.
    pub fn next(&mut self, slide_count: usize) {
        self.navigate(slide_count, 1);
    }

    /// Step back to the previous slide with wrap-around.
    pub fn prev(&mut self, slide_count: usize) {
        self.navigate(slide_count, -1);
    }

    fn navigate(&mut self, slide_count: usize, direction: i64) {
        if slide_count <= 1 {
            return;
        }
        let Some(current) = self.active_index else {
            return;
        };
        let count = slide_count as i64;
        let next = (current as i64 + direction).rem_euclid(count) as usize;
        self.active_index = Some(next);
        self.zoom = ZOOM_DEFAULT;
    }

    /// Reset for a new slide list (identity or fidelity change): the
    /// lightbox closes, the visible slide returns to the start, and the
    /// end-of-scroll flag clears until the next measurement.
    pub fn reset_for_relist(&mut self) {
        self.active_index = None;
        self.visible_index = 0;
        self.zoom = ZOOM_DEFAULT;
        self.is_at_end = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_sets_index_and_neutral_zoom() {
        let mut viewer = ViewerState::default();
        viewer.zoom = 2.0;
        viewer.open(2, 5);
        assert_eq!(viewer.active_index(), Some(2));
        assert_eq!(viewer.zoom, ZOOM_DEFAULT);
    }

    #[test]
    fn test_open_clamps_out_of_range_index() {
        let mut viewer = ViewerState::default();
        viewer.open(9, 3);
        assert_eq!(viewer.active_index(), Some(2));
    }

    #[test]
    fn test_open_on_empty_list_is_ignored() {
        let mut viewer = ViewerState::default();
        viewer.open(0, 0);
        assert!(!viewer.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut viewer = ViewerState::default();
        viewer.close();
        assert_eq!(viewer, ViewerState::default());
        viewer.open(1, 3);
        viewer.close();
        viewer.close();
        assert!(!viewer.is_open());
        assert_eq!(viewer.zoom, ZOOM_DEFAULT);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut viewer = ViewerState::default();
        viewer.open(0, 3);
        for _ in 0..2 {
            viewer.next(3);
        }
        assert_eq!(viewer.active_index(), Some(2));
        viewer.next(3);
        assert_eq!(viewer.active_index(), Some(0));
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut viewer = ViewerState::default();
        viewer.open(0, 4);
        viewer.prev(4);
        assert_eq!(viewer.active_index(), Some(3));
    }

    #[test]
    fn test_navigation_matches_modular_arithmetic() {
        let n = 5_usize;
        let start = 2_usize;
        let k = 13_usize;
        let mut viewer = ViewerState::default();
        viewer.open(start, n);
        for _ in 0..k {
            viewer.next(n);
        }
        assert_eq!(viewer.active_index(), Some((start + k) % n));

        let mut viewer = ViewerState::default();
        viewer.open(start, n);
        for _ in 0..k {
            viewer.prev(n);
        }
        let expected = ((start as i64 - k as i64).rem_euclid(n as i64)) as usize;
        assert_eq!(viewer.active_index(), Some(expected));
    }

    #[test]
    fn test_navigation_noop_for_single_slide_or_closed() {
        let mut viewer = ViewerState::default();
        viewer.next(3);
        assert!(!viewer.is_open());

        viewer.open(0, 1);
        viewer.next(1);
        viewer.prev(1);
        assert_eq!(viewer.active_index(), Some(0));
    }

    #[test]
    fn test_navigation_resets_zoom() {
        let mut viewer = ViewerState::default();
        viewer.open(0, 3);
        viewer.zoom = ZoomBounds::LIGHTBOX.increase(viewer.zoom);
        viewer.next(3);
        assert_eq!(viewer.zoom, ZOOM_DEFAULT);
    }

    #[test]
    fn test_zoom_never_leaks_across_sessions() {
        let mut viewer = ViewerState::default();
        viewer.open(1, 3);
        viewer.zoom = 2.75;
        viewer.close();
        viewer.open(1, 3);
        assert_eq!(viewer.zoom, ZOOM_DEFAULT);
    }

    #[test]
    fn test_reset_for_relist_clears_everything() {
        let mut viewer = ViewerState::default();
        viewer.open(2, 5);
        viewer.visible_index = 4;
        viewer.is_at_end = true;
        viewer.reset_for_relist();
        assert_eq!(viewer, ViewerState::default());
    }

    #[test]
    fn test_zoom_bounds_clamp_each_surface() {
        let mut zoom = ZOOM_DEFAULT;
        for _ in 0..20 {
            zoom = ZoomBounds::LIGHTBOX.increase(zoom);
        }
        assert_eq!(zoom, ZoomBounds::LIGHTBOX.max);
        for _ in 0..20 {
            zoom = ZoomBounds::LIGHTBOX.decrease(zoom);
        }
        assert_eq!(zoom, ZoomBounds::LIGHTBOX.min);

        let mut strip = ZOOM_DEFAULT;
        for _ in 0..20 {
            strip = ZoomBounds::STRIP.increase(strip);
        }
        assert_eq!(strip, ZoomBounds::STRIP.max);
    }

    #[test]
    fn test_zoom_percent_label_rounds() {
        assert_eq!(zoom_percent_label(1.0), "100%");
        assert_eq!(zoom_percent_label(0.5), "50%");
        assert_eq!(zoom_percent_label(1.25), "125%");
    }
}
