//! Scroll geometry for the showcase strip.
//!
//! The webview script reports an explicit snapshot of the strip: scroll
//! position, viewport width, total content width, and one rectangle per
//! slide anchor. The functions here derive the "currently centered" slide
//! and the end-of-scroll flag from that snapshot, with no live DOM access
//! from component code.

use serde::Deserialize;

/// Tolerance for end-of-scroll detection. Webview scroll positions land on
/// sub-pixel values, so an exact comparison against the maximum extent
/// would flicker.
pub const SCROLL_END_EPSILON_PX: f64 = 10.0;

/// Horizontal extent of one rendered slide anchor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AnchorRect {
    pub left: f64,
    pub width: f64,
}

/// One measurement of the strip, as sent by the observation script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewportMetrics {
    pub scroll_left: f64,
    pub client_width: f64,
    pub scroll_width: f64,
    pub anchors: Vec<AnchorRect>,
}

/// Index of the anchor whose center is nearest the viewport center.
/// Ties break to the lowest index (strict less-than comparison); an empty
/// anchor list yields 0.
pub fn nearest_center_index(metrics: &ViewportMetrics) -> usize {
    let viewport_center = metrics.scroll_left + metrics.client_width / 2.0;

    let mut closest_index = 0;
    let mut smallest_delta = f64::INFINITY;
    for (index, anchor) in metrics.anchors.iter().enumerate() {
        let center = anchor.left + anchor.width / 2.0;
        let delta = (center - viewport_center).abs();
        if delta < smallest_delta {
            smallest_delta = delta;
            closest_index = index;
        }
    }
    closest_index
}

/// Whether the strip is scrolled to its maximum extent, within tolerance.
pub fn is_at_end(metrics: &ViewportMetrics) -> bool {
    let max_scroll = metrics.scroll_width - metrics.client_width;
    metrics.scroll_left >= max_scroll - SCROLL_END_EPSILON_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_left: f64, anchors: &[(f64, f64)]) -> ViewportMetrics {
        ViewportMetrics {
            scroll_left,
            client_width: 400.0,
            scroll_width: 1200.0,
            anchors: anchors
                .iter()
                .map(|&(left, width)| AnchorRect { left, width })
                .collect(),
        }
    }

    #[test]
    fn test_nearest_center_at_origin() {
        // Viewport center at 200; slide centers at 100, 500, 900.
        let m = metrics(0.0, &[(0.0, 200.0), (400.0, 200.0), (800.0, 200.0)]);
        assert_eq!(nearest_center_index(&m), 0);
    }

    #[test]
    fn test_nearest_center_tracks_scroll_position() {
        let m = metrics(350.0, &[(0.0, 200.0), (400.0, 200.0), (800.0, 200.0)]);
        // Viewport center at 550; closest slide center is 500.
        assert_eq!(nearest_center_index(&m), 1);
        let m = metrics(800.0, &[(0.0, 200.0), (400.0, 200.0), (800.0, 200.0)]);
        assert_eq!(nearest_center_index(&m), 2);
    }

    #[test]
    fn test_exact_tie_goes_to_lowest_index() {
        // Viewport center at 300, equidistant from centers 200 and 400.
        let m = metrics(100.0, &[(100.0, 200.0), (300.0, 200.0)]);
        assert_eq!(nearest_center_index(&m), 0);
    }

    #[test]
    fn test_empty_anchor_list_yields_zero() {
        let m = metrics(250.0, &[]);
        assert_eq!(nearest_center_index(&m), 0);
    }

    #[test]
    fn test_end_detection_with_epsilon() {
        // Max scroll is 800.
        let mut m = metrics(800.0, &[]);
        assert!(is_at_end(&m));
        m.scroll_left = 791.0;
        assert!(is_at_end(&m));
        m.scroll_left = 789.9;
        assert!(!is_at_end(&m));
        m.scroll_left = 0.0;
        assert!(!is_at_end(&m));
    }

    #[test]
    fn test_metrics_deserialize_from_script_payload() {
        let payload = r#"{
            "scroll_left": 12.5,
            "client_width": 640.0,
            "scroll_width": 2000.0,
            "anchors": [{ "left": 0.0, "width": 375.0 }, { "left": 391.0, "width": 375.0 }]
        }"#;
        let m: ViewportMetrics = serde_json::from_str(payload).unwrap();
        assert_eq!(m.anchors.len(), 2);
        assert_eq!(m.anchors[1].left, 391.0);
    }
}
