//! Showcase slides and fidelity preparation.
//!
//! A `Slide` is authored content; a `PreparedSlide` is what the viewer
//! actually renders, with the image source resolved against the active
//! fidelity mode. Preparation never fails: a slide with no usable source
//! falls back to a synthesized placeholder.

use serde::{Deserialize, Serialize};

use crate::core::placeholder::placeholder_data_uri;

/// Label used when a lo-fi slide has neither alt text nor a caption.
pub const FALLBACK_SLIDE_LABEL: &str = "Design screen";
/// Label used when a hi-fi slide has neither alt text nor a caption.
pub const FALLBACK_HI_FI_LABEL: &str = "Hi-fi design screen";
/// Suffix appended to hi-fi placeholder labels so synthesized hi-fi art is
/// distinguishable from its lo-fi counterpart.
pub const HI_FI_PLACEHOLDER_SUFFIX: &str = " (Hi-Fi placeholder)";
/// Category assigned to slides in a derived hi-fi list.
pub const HI_FI_CATEGORY: &str = "Hi-Fi";
/// Id suffix for slides in a derived hi-fi list, keeping ids unique across
/// the two fidelity tracks.
pub const HI_FI_ID_SUFFIX: &str = "-hi";

/// Image metadata for one slide. An empty `src` means "no real asset"; the
/// preparer substitutes a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideImage {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Optional external link shown next to the image caption.
    #[serde(default)]
    pub link: Option<String>,
}

/// One showcase slide. When `video` is present it takes precedence over the
/// image in the lightbox; the image still provides the inline thumbnail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub category: String,
    pub caption: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    pub image: SlideImage,
    #[serde(default)]
    pub hi_fi_src: Option<String>,
    #[serde(default)]
    pub hi_fi_caption: Option<String>,
}

impl Slide {
    /// The caption to show for the given fidelity mode. Hi-fi prefers the
    /// dedicated hi-fi caption and falls back to the base caption.
    pub fn caption_for(&self, fidelity: Fidelity) -> &str {
        match fidelity {
            Fidelity::Hi => self.hi_fi_caption.as_deref().unwrap_or(&self.caption),
            Fidelity::Lo => &self.caption,
        }
    }
}

/// Which asset track the viewer displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fidelity {
    #[default]
    Lo,
    Hi,
}

/// A slide with its display source resolved. Derived, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSlide {
    pub slide: Slide,
    pub computed_src: String,
}

/// Resolve the lo-fi track: each slide keeps its own image source, or gets
/// a placeholder keyed on its alt text, caption, or a generic label.
pub fn prepare_lo_fi(slides: &[Slide]) -> Vec<PreparedSlide> {
    slides
        .iter()
        .map(|slide| {
            let computed_src = if slide.image.src.is_empty() {
                placeholder_data_uri(lo_fi_label(slide))
            } else {
                slide.image.src.clone()
            };
            PreparedSlide {
                slide: slide.clone(),
                computed_src,
            }
        })
        .collect()
}

/// Resolve the hi-fi track. An explicit hi-fi list is used as-is; without
/// one, a synthetic list is derived from the lo-fi slides. Either way the
/// source resolution order is: dedicated hi-fi source, then the slide's
/// own image source, then a placeholder.
pub fn prepare_hi_fi(slides: &[Slide], explicit: Option<&[Slide]>) -> Vec<PreparedSlide> {
    let derived;
    let source: &[Slide] = match explicit {
        Some(list) if !list.is_empty() => list,
        _ => {
            derived = derive_hi_fi_slides(slides);
            &derived
        }
    };

    source
        .iter()
        .map(|slide| {
            let computed_src = slide
                .hi_fi_src
                .clone()
                .or_else(|| (!slide.image.src.is_empty()).then(|| slide.image.src.clone()))
                .unwrap_or_else(|| {
                    let label = format!("{}{}", hi_fi_label(slide), HI_FI_PLACEHOLDER_SUFFIX);
                    placeholder_data_uri(&label)
                });
            PreparedSlide {
                slide: slide.clone(),
                computed_src,
            }
        })
        .collect()
}

/// Fabricate a hi-fi list from lo-fi slides: suffix the id, relabel the
/// category, prefer the hi-fi caption, and swap in the hi-fi source when
/// one exists. Ordering follows the input exactly.
fn derive_hi_fi_slides(slides: &[Slide]) -> Vec<Slide> {
    slides
        .iter()
        .map(|slide| Slide {
            id: format!("{}{}", slide.id, HI_FI_ID_SUFFIX),
            category: HI_FI_CATEGORY.to_string(),
            caption: slide.hi_fi_caption.clone().unwrap_or_else(|| slide.caption.clone()),
            image: SlideImage {
                src: slide.hi_fi_src.clone().unwrap_or_else(|| slide.image.src.clone()),
                ..slide.image.clone()
            },
            ..slide.clone()
        })
        .collect()
}

fn lo_fi_label(slide: &Slide) -> &str {
    first_non_empty(&slide.image.alt, &slide.caption, FALLBACK_SLIDE_LABEL)
}

fn hi_fi_label(slide: &Slide) -> &str {
    first_non_empty(&slide.image.alt, &slide.caption, FALLBACK_HI_FI_LABEL)
}

fn first_non_empty<'a>(primary: &'a str, secondary: &'a str, fallback: &'a str) -> &'a str {
    if !primary.is_empty() {
        primary
    } else if !secondary.is_empty() {
        secondary
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(id: &str, src: &str) -> Slide {
        Slide {
            id: id.to_string(),
            category: "Wireframe".to_string(),
            caption: format!("Caption {id}"),
            image: SlideImage {
                src: src.to_string(),
                alt: format!("Alt {id}"),
                width: 1440,
                height: 900,
                link: None,
            },
            ..Slide::default()
        }
    }

    #[test]
    fn test_lo_fi_keeps_real_sources() {
        let slides = vec![slide("a", "/a.png"), slide("b", "/b.png")];
        let prepared = prepare_lo_fi(&slides);
        assert_eq!(prepared.len(), 2);
        assert_eq!(prepared[0].computed_src, "/a.png");
        assert_eq!(prepared[1].computed_src, "/b.png");
    }

    #[test]
    fn test_lo_fi_substitutes_placeholder_for_missing_source() {
        let slides = vec![slide("a", "")];
        let prepared = prepare_lo_fi(&slides);
        assert!(prepared[0].computed_src.starts_with("data:image/svg+xml"));
    }

    #[test]
    fn test_lo_fi_placeholder_label_falls_back_to_caption() {
        let mut s = slide("a", "");
        s.image.alt = String::new();
        let prepared = prepare_lo_fi(&[s]);
        assert_eq!(
            prepared[0].computed_src,
            placeholder_data_uri("Caption a")
        );
    }

    #[test]
    fn test_lo_fi_generic_label_when_alt_and_caption_missing() {
        let mut s = slide("a", "");
        s.image.alt = String::new();
        s.caption = String::new();
        let prepared = prepare_lo_fi(&[s]);
        assert_eq!(
            prepared[0].computed_src,
            placeholder_data_uri(FALLBACK_SLIDE_LABEL)
        );
    }

    #[test]
    fn test_ordering_is_stable_and_nothing_is_dropped() {
        let slides = vec![slide("a", ""), slide("b", "/b.png"), slide("c", "")];
        let prepared = prepare_lo_fi(&slides);
        let ids: Vec<&str> = prepared.iter().map(|p| p.slide.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_hi_fi_uses_explicit_list_when_supplied() {
        let lo = vec![slide("a", "/a.png")];
        let hi = vec![slide("hi-a", "/hi-a.png")];
        let prepared = prepare_hi_fi(&lo, Some(&hi));
        assert_eq!(prepared.len(), 1);
        assert_eq!(prepared[0].slide.id, "hi-a");
        assert_eq!(prepared[0].computed_src, "/hi-a.png");
    }

    #[test]
    fn test_hi_fi_derives_list_when_not_supplied() {
        let mut s = slide("a", "/a.png");
        s.hi_fi_src = Some("/a-hi.png".to_string());
        s.hi_fi_caption = Some("Polished caption".to_string());
        let prepared = prepare_hi_fi(&[s], None);
        assert_eq!(prepared.len(), 1);
        assert_eq!(prepared[0].slide.id, "a-hi");
        assert_eq!(prepared[0].slide.category, HI_FI_CATEGORY);
        assert_eq!(prepared[0].slide.caption, "Polished caption");
        assert_eq!(prepared[0].computed_src, "/a-hi.png");
    }

    #[test]
    fn test_derived_hi_fi_keeps_lo_fi_source_without_hi_fi_asset() {
        let prepared = prepare_hi_fi(&[slide("a", "/a.png")], None);
        assert_eq!(prepared[0].computed_src, "/a.png");
        assert_eq!(prepared[0].slide.caption, "Caption a");
    }

    #[test]
    fn test_hi_fi_placeholder_label_is_suffixed() {
        let mut s = slide("a", "");
        s.image.alt = String::new();
        s.caption = String::new();
        let prepared = prepare_hi_fi(&[s], None);
        let expected = placeholder_data_uri(&format!(
            "{FALLBACK_HI_FI_LABEL}{HI_FI_PLACEHOLDER_SUFFIX}"
        ));
        assert_eq!(prepared[0].computed_src, expected);
    }

    #[test]
    fn test_caption_for_prefers_hi_fi_caption() {
        let mut s = slide("a", "/a.png");
        s.hi_fi_caption = Some("hi".to_string());
        assert_eq!(s.caption_for(Fidelity::Hi), "hi");
        assert_eq!(s.caption_for(Fidelity::Lo), "Caption a");
        s.hi_fi_caption = None;
        assert_eq!(s.caption_for(Fidelity::Hi), "Caption a");
    }
}
