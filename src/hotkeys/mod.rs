//! Hotkey system
//!
//! Centralized keyboard handling for the lightbox.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by keys
//! - **HotkeyContext**: Determines which hotkeys are active based on viewer state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! The dispatcher is pure: the lightbox overlay owns the actual `onkeydown`
//! handler and exists only while the overlay is mounted, so bindings are
//! acquired on open and released on every exit path by construction.

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Close the lightbox and reset zoom.
    CloseLightbox,
    /// Advance to the next slide (wraps around).
    NextSlide,
    /// Step back to the previous slide (wraps around).
    PrevSlide,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether a lightbox is currently open.
    pub lightbox_open: bool,
    /// Number of slides in the displayed list; navigation needs at least two.
    pub slide_count: usize,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed in the current context
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
///
/// Returns `Suppressed` for navigation keys on a single-slide list so the
/// caller can still swallow the event without moving anything.
pub fn handle_hotkey(key: &Key, context: &HotkeyContext) -> HotkeyResult {
    if !context.lightbox_open {
        return HotkeyResult::NoMatch;
    }

    match key {
        Key::Escape => HotkeyResult::Action(HotkeyAction::CloseLightbox),
        Key::ArrowRight if context.slide_count > 1 => {
            HotkeyResult::Action(HotkeyAction::NextSlide)
        }
        Key::ArrowLeft if context.slide_count > 1 => HotkeyResult::Action(HotkeyAction::PrevSlide),
        Key::ArrowRight | Key::ArrowLeft => HotkeyResult::Suppressed,
        _ => HotkeyResult::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_context(slide_count: usize) -> HotkeyContext {
        HotkeyContext {
            lightbox_open: true,
            slide_count,
        }
    }

    #[test]
    fn test_escape_closes_open_lightbox() {
        let result = handle_hotkey(&Key::Escape, &open_context(3));
        assert!(matches!(
            result,
            HotkeyResult::Action(HotkeyAction::CloseLightbox)
        ));
    }

    #[test]
    fn test_arrows_navigate_open_lightbox() {
        let ctx = open_context(3);
        assert!(matches!(
            handle_hotkey(&Key::ArrowRight, &ctx),
            HotkeyResult::Action(HotkeyAction::NextSlide)
        ));
        assert!(matches!(
            handle_hotkey(&Key::ArrowLeft, &ctx),
            HotkeyResult::Action(HotkeyAction::PrevSlide)
        ));
    }

    #[test]
    fn test_no_bindings_while_closed() {
        let ctx = HotkeyContext::default();
        assert!(matches!(
            handle_hotkey(&Key::Escape, &ctx),
            HotkeyResult::NoMatch
        ));
        assert!(matches!(
            handle_hotkey(&Key::ArrowRight, &ctx),
            HotkeyResult::NoMatch
        ));
    }

    #[test]
    fn test_navigation_suppressed_for_single_slide() {
        let ctx = open_context(1);
        assert!(matches!(
            handle_hotkey(&Key::ArrowRight, &ctx),
            HotkeyResult::Suppressed
        ));
        assert!(matches!(
            handle_hotkey(&Key::ArrowLeft, &ctx),
            HotkeyResult::Suppressed
        ));
        // Escape still works with one slide.
        assert!(matches!(
            handle_hotkey(&Key::Escape, &ctx),
            HotkeyResult::Action(HotkeyAction::CloseLightbox)
        ));
    }

    #[test]
    fn test_unbound_keys_pass_through() {
        let result = handle_hotkey(&Key::Character("a".to_string()), &open_context(3));
        assert!(matches!(result, HotkeyResult::NoMatch));
    }

    #[test]
    fn test_arrow_right_wrap_scenario() {
        // Three slides, open at index 0: two ArrowRight presses land on the
        // last slide, a third wraps back to the start.
        let ctx = open_context(3);
        let mut viewer = crate::state::ViewerState::default();
        viewer.open(0, 3);
        for _ in 0..2 {
            if let HotkeyResult::Action(HotkeyAction::NextSlide) =
                handle_hotkey(&Key::ArrowRight, &ctx)
            {
                viewer.next(3);
            }
        }
        assert_eq!(viewer.active_index(), Some(2));
        if let HotkeyResult::Action(HotkeyAction::NextSlide) =
            handle_hotkey(&Key::ArrowRight, &ctx)
        {
            viewer.next(3);
        }
        assert_eq!(viewer.active_index(), Some(0));
    }
}
