//! Project milestones rendered on the case-study timeline.

use serde::{Deserialize, Serialize};

/// Where a milestone sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    Completed,
    Current,
    Future,
}

/// Which glyph the milestone node renders. Unspecified icons fall back to
/// a check mark; `Percentage` renders the milestone's display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneIcon {
    Rocket,
    Check,
    Percentage,
}

/// A dated point on the project timeline. Dates are display strings
/// ("Q1 2025", "Mar 2024") rather than parsed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub date: String,
    pub title: String,
    pub description: String,
    pub status: MilestoneStatus,
    #[serde(default)]
    pub icon: Option<MilestoneIcon>,
    #[serde(default)]
    pub percentage: Option<String>,
}

impl Milestone {
    /// Whether progress has reached this milestone. The timeline fills
    /// segments up to and including the most recently reached milestone.
    pub fn is_reached(&self) -> bool {
        matches!(
            self.status,
            MilestoneStatus::Completed | MilestoneStatus::Current
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(status: MilestoneStatus) -> Milestone {
        Milestone {
            date: "Q1 2025".to_string(),
            title: "Kickoff".to_string(),
            description: "Discovery sessions".to_string(),
            status,
            icon: None,
            percentage: None,
        }
    }

    #[test]
    fn test_reached_statuses() {
        assert!(milestone(MilestoneStatus::Completed).is_reached());
        assert!(milestone(MilestoneStatus::Current).is_reached());
        assert!(!milestone(MilestoneStatus::Future).is_reached());
    }

    #[test]
    fn test_status_serialization_round_trip() {
        let m = milestone(MilestoneStatus::Current);
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"current\""));
        let parsed: Milestone = serde_json::from_str(&json).unwrap();
        assert_eq!(m, parsed);
    }
}
