//! Case-study content model.
//!
//! One `CaseStudy` is everything a study page renders: hero, overview
//! cards, problem framing, process steps with their galleries, the design
//! showcase, the project timeline, results, and prev/next navigation.
//! Content is authored as JSON, parsed once at startup, and read-only
//! afterwards.

use serde::{Deserialize, Serialize};

use super::milestone::Milestone;
use super::slide::{Slide, SlideImage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub slug: String,
    pub hero: Hero,
    pub overview: Overview,
    pub problem: Problem,
    pub process: Process,
    pub showcase: Showcase,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    pub results: Results,
    #[serde(default)]
    pub navigation: Navigation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub image: SlideImage,
    pub project_type: String,
    pub year: String,
    pub duration: String,
    pub role: String,
    #[serde(default)]
    pub client: Option<String>,
    /// Copy shown in the hero detail overlay.
    #[serde(default)]
    pub detail: Option<HeroDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroDetail {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub challenge: String,
    pub role: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub stat: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub title: String,
    pub context: Vec<String>,
    #[serde(default)]
    pub quote: Option<Quote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub gallery: Vec<SlideImage>,
}

/// The showcase input contract: the lo-fi slide list, an optional explicit
/// hi-fi list, and the two behavior flags (hub layout vs. the legacy
/// arrow carousel; whether the fidelity toggle is offered).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showcase {
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub hi_fi_slides: Option<Vec<Slide>>,
    #[serde(default)]
    pub hub_layout: bool,
    #[serde(default)]
    pub enable_fidelity_toggle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results {
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub testimonial: Option<Quote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
    #[serde(default)]
    pub previous: Option<StudyLink>,
    #[serde(default)]
    pub next: Option<StudyLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyLink {
    pub slug: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_case_study_parses() {
        let json = r#"{
            "slug": "sample",
            "hero": {
                "title": "Sample",
                "subtitle": "A study",
                "image": { "src": "/cover.png", "alt": "Cover", "width": 1440, "height": 900 },
                "project_type": "Dashboard",
                "year": "2025",
                "duration": "6 Months",
                "role": "Product Designer"
            },
            "overview": {
                "challenge": "Scattered reporting.",
                "role": "Led design.",
                "outcome": { "stat": "100%", "label": "Adoption", "description": "Everyone switched." }
            },
            "problem": { "title": "Fragmented tools", "context": ["Too many tabs."] },
            "process": { "steps": [{ "title": "Step 01", "description": "Discovery." }] },
            "showcase": { "slides": [] },
            "results": { "metrics": [{ "value": "2x", "label": "Faster" }] }
        }"#;
        let study: CaseStudy = serde_json::from_str(json).unwrap();
        assert_eq!(study.slug, "sample");
        assert!(study.milestones.is_empty());
        assert!(!study.showcase.hub_layout);
        assert!(study.navigation.previous.is_none());
    }
}
