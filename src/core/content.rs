//! Embedded case-study content.
//!
//! Content ships inside the binary as a JSON document and is parsed once
//! at startup. Loading is the only fallible path in the application;
//! everything downstream degrades to placeholders instead of failing.

use thiserror::Error;

use crate::state::CaseStudy;

const CASE_STUDY_DATA: &str = include_str!("../../data/case_studies.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid case study data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate case study slug `{0}`")]
    DuplicateSlug(String),
    #[error("duplicate slide id `{id}` in case study `{slug}`")]
    DuplicateSlideId { slug: String, id: String },
}

/// Load and validate the embedded case studies.
pub fn load_case_studies() -> Result<Vec<CaseStudy>, ContentError> {
    parse_case_studies(CASE_STUDY_DATA)
}

/// Parse a case-study document and enforce the content invariants:
/// slugs are unique, and slide ids are unique within each slide list.
pub fn parse_case_studies(json: &str) -> Result<Vec<CaseStudy>, ContentError> {
    let studies: Vec<CaseStudy> = serde_json::from_str(json)?;

    let mut slugs = std::collections::HashSet::new();
    for study in &studies {
        if !slugs.insert(study.slug.as_str()) {
            return Err(ContentError::DuplicateSlug(study.slug.clone()));
        }
        check_slide_ids(&study.slug, &study.showcase.slides)?;
        if let Some(hi_fi) = &study.showcase.hi_fi_slides {
            check_slide_ids(&study.slug, hi_fi)?;
        }
    }
    Ok(studies)
}

fn check_slide_ids(slug: &str, slides: &[crate::state::Slide]) -> Result<(), ContentError> {
    let mut ids = std::collections::HashSet::new();
    for slide in slides {
        if !ids.insert(slide.id.as_str()) {
            return Err(ContentError::DuplicateSlideId {
                slug: slug.to_string(),
                id: slide.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let studies = load_case_studies().unwrap();
        assert!(!studies.is_empty());
        // Every study page needs at least a hero and one showcase slide.
        for study in &studies {
            assert!(!study.hero.title.is_empty());
            assert!(!study.showcase.slides.is_empty());
        }
    }

    #[test]
    fn test_embedded_content_has_both_viewer_variants() {
        let studies = load_case_studies().unwrap();
        assert!(studies.iter().any(|s| s.showcase.hub_layout));
        assert!(studies.iter().any(|s| !s.showcase.hub_layout));
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let studies = load_case_studies().unwrap();
        let mut doubled = studies.clone();
        doubled.push(studies[0].clone());
        let json = serde_json::to_string(&doubled).unwrap();
        assert!(matches!(
            parse_case_studies(&json),
            Err(ContentError::DuplicateSlug(_))
        ));
    }

    #[test]
    fn test_duplicate_slide_id_is_rejected() {
        let mut studies = load_case_studies().unwrap();
        let slide = studies[0].showcase.slides[0].clone();
        studies[0].showcase.slides.push(slide);
        let json = serde_json::to_string(&studies).unwrap();
        assert!(matches!(
            parse_case_studies(&json),
            Err(ContentError::DuplicateSlideId { .. })
        ));
    }

    #[test]
    fn test_malformed_document_reports_parse_error() {
        assert!(matches!(
            parse_case_studies("[{ not json"),
            Err(ContentError::Parse(_))
        ));
    }
}
