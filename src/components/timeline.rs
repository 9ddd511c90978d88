//! Milestone timeline.
//!
//! Milestones spread evenly along a horizontal axis; the connecting line
//! fills up to the most recently reached milestone and no further.

use dioxus::prelude::*;

use crate::constants::*;
use crate::state::{Milestone, MilestoneIcon};

/// Horizontal position of milestone `index` as a percentage of the axis.
/// A single milestone sits centered.
pub fn milestone_position(index: usize, total: usize) -> f64 {
    if total <= 1 {
        return 50.0;
    }
    index as f64 / (total as f64 - 1.0) * 100.0
}

/// Whether the segment from milestone `segment` to `segment + 1` is filled.
/// A segment is active iff its *end* milestone has been reached, so the
/// fill stops at the last completed/current milestone.
pub fn segment_is_active(milestones: &[Milestone], segment: usize) -> bool {
    milestones
        .get(segment + 1)
        .map(Milestone::is_reached)
        .unwrap_or(false)
}

#[component]
pub fn Timeline(milestones: Vec<Milestone>) -> Element {
    let total = milestones.len();
    if total == 0 {
        return rsx! {};
    }
    let segment_width = if total > 1 {
        100.0 / (total as f64 - 1.0)
    } else {
        0.0
    };

    rsx! {
        div {
            style: "position: relative; width: 100%; padding: 16px 0 140px;",

            // Connecting line, one segment per adjacent milestone pair
            div {
                style: "
                    position: relative; height: 3px; margin: 0 40px;
                    background-color: {BORDER_SUBTLE}; border-radius: 2px;
                ",
                for segment in 0..total.saturating_sub(1) {
                    {
                        let left = milestone_position(segment, total);
                        let color = if segment_is_active(&milestones, segment) {
                            BG_INK
                        } else {
                            BORDER_SUBTLE
                        };
                        rsx! {
                            div {
                                key: "segment-{segment}",
                                style: "
                                    position: absolute; top: 0; height: 100%;
                                    left: {left}%; width: {segment_width}%;
                                    background-color: {color}; border-radius: 2px;
                                ",
                            }
                        }
                    }
                }

                // Milestone nodes
                for (index, milestone) in milestones.iter().enumerate() {
                    {
                        let position = milestone_position(index, total);
                        let reached = milestone.is_reached();
                        let (node_bg, node_color, node_border) = if reached {
                            (BG_INK, TEXT_INVERTED, BG_INK)
                        } else {
                            (BG_SURFACE, TEXT_DIM, BORDER_DEFAULT)
                        };
                        rsx! {
                            div {
                                key: "{milestone.date}-{index}",
                                style: "
                                    position: absolute; top: -18px; left: {position}%;
                                    transform: translateX(-50%);
                                    display: flex; flex-direction: column; align-items: center;
                                    width: 150px; text-align: center;
                                ",
                                div {
                                    style: "
                                        width: 40px; height: 40px; border-radius: 50%;
                                        background-color: {node_bg}; color: {node_color};
                                        border: 2px solid {node_border};
                                        display: flex; align-items: center; justify-content: center;
                                        box-shadow: 0 1px 3px rgba(0,0,0,0.12);
                                    ",
                                    MilestoneGlyph {
                                        icon: milestone.icon,
                                        percentage: milestone.percentage.clone(),
                                    }
                                }
                                div {
                                    style: "
                                        margin-top: 10px; font-size: 11px; font-weight: 600;
                                        color: {TEXT_MUTED}; text-transform: uppercase;
                                        letter-spacing: 1px;
                                    ",
                                    "{milestone.date}"
                                }
                                div {
                                    style: "margin-top: 2px; font-size: 13px; font-weight: 600; color: {TEXT_PRIMARY};",
                                    "{milestone.title}"
                                }
                                div {
                                    style: "margin-top: 2px; font-size: 12px; color: {TEXT_MUTED}; line-height: 1.4;",
                                    "{milestone.description}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The glyph inside a milestone node. Unspecified icons fall back to a
/// check mark; the percentage icon renders its display string.
#[component]
fn MilestoneGlyph(icon: Option<MilestoneIcon>, percentage: Option<String>) -> Element {
    match icon {
        Some(MilestoneIcon::Rocket) => rsx! {
            svg {
                view_box: "0 0 24 24",
                width: "20",
                height: "20",
                fill: "none",
                path {
                    d: "M12 2L13.09 8.26L22 9L13.09 9.74L12 16L10.91 9.74L2 9L10.91 8.26L12 2Z",
                    fill: "currentColor",
                }
            }
        },
        Some(MilestoneIcon::Percentage) if percentage.is_some() => rsx! {
            span {
                style: "font-size: 11px; font-weight: 700;",
                {percentage.unwrap_or_default()}
            }
        },
        // Check is both the explicit variant and the default
        _ => rsx! {
            svg {
                view_box: "0 0 24 24",
                width: "20",
                height: "20",
                fill: "none",
                path {
                    d: "M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41L9 16.17z",
                    fill: "currentColor",
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MilestoneStatus;

    fn milestone(status: MilestoneStatus) -> Milestone {
        Milestone {
            date: "Q1".to_string(),
            title: "Milestone".to_string(),
            description: String::new(),
            status,
            icon: None,
            percentage: None,
        }
    }

    #[test]
    fn test_single_milestone_is_centered() {
        assert_eq!(milestone_position(0, 1), 50.0);
    }

    #[test]
    fn test_positions_spread_evenly() {
        assert_eq!(milestone_position(0, 5), 0.0);
        assert_eq!(milestone_position(1, 5), 25.0);
        assert_eq!(milestone_position(2, 5), 50.0);
        assert_eq!(milestone_position(4, 5), 100.0);
        assert_eq!(milestone_position(1, 2), 100.0);
    }

    #[test]
    fn test_segments_fill_up_to_last_reached_milestone() {
        use MilestoneStatus::*;
        let milestones: Vec<Milestone> = [Completed, Completed, Current, Future, Future]
            .into_iter()
            .map(milestone)
            .collect();
        assert!(segment_is_active(&milestones, 0));
        assert!(segment_is_active(&milestones, 1));
        assert!(!segment_is_active(&milestones, 2));
        assert!(!segment_is_active(&milestones, 3));
    }

    #[test]
    fn test_single_milestone_has_no_segments() {
        let milestones = vec![milestone(MilestoneStatus::Completed)];
        // The only queryable segment index has no end milestone.
        assert!(!segment_is_active(&milestones, 0));
    }
}
