//! Root application component
//!
//! This defines the main App component and the case-study page layout.

use dioxus::prelude::*;

use crate::components::{
    HeroMedia, ResultsPanel, ShowcaseCarousel, StepGallery, Timeline, TitleBar,
};
use crate::constants::*;
use crate::core::content::load_case_studies;
use crate::state::CaseStudy;

/// Main application component
#[component]
pub fn App() -> Element {
    // Content is embedded and parsed once; the Result drives either the
    // page or the error banner.
    let loaded = use_signal(|| {
        load_case_studies().map_err(|err| {
            println!("Failed to load case studies: {err}");
            err.to_string()
        })
    });
    let mut selected_slug = use_signal(|| None::<String>);

    let studies: Vec<CaseStudy> = match loaded.read().as_ref() {
        Ok(studies) => studies.clone(),
        Err(message) => {
            let message = message.clone();
            return rsx! {
                div {
                    style: "
                        display: flex; align-items: center; justify-content: center;
                        width: 100vw; height: 100vh; background-color: {BG_PAGE};
                        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                    ",
                    div {
                        style: "
                            max-width: 480px; padding: 24px 28px; border-radius: 12px;
                            background-color: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT};
                            box-shadow: 0 4px 16px rgba(0,0,0,0.08);
                        ",
                        h2 {
                            style: "margin: 0 0 8px; font-size: 16px; color: {TEXT_PRIMARY};",
                            "Content failed to load"
                        }
                        p {
                            style: "margin: 0; font-size: 13px; color: {TEXT_MUTED}; line-height: 1.6;",
                            "{message}"
                        }
                    }
                }
            };
        }
    };

    let study = selected_slug
        .read()
        .as_ref()
        .and_then(|slug| studies.iter().find(|s| &s.slug == slug))
        .or_else(|| studies.first())
        .cloned();
    let Some(study) = study else {
        return rsx! {};
    };
    let slug = study.slug.clone();
    let switcher: Vec<(String, String)> = studies
        .iter()
        .map(|s| (s.slug.clone(), s.hero.title.clone()))
        .collect();

    let hero_meta = [
        ("Project Type", study.hero.project_type.clone()),
        ("Year", study.hero.year.clone()),
        ("Duration", study.hero.duration.clone()),
        ("Role", study.hero.role.clone()),
    ];
    let overview_cards = [
        ("The Challenge", study.overview.challenge.clone(), None),
        ("My Role", study.overview.role.clone(), None),
        (
            "Outcome",
            study.overview.outcome.description.clone(),
            Some((
                study.overview.outcome.stat.clone(),
                study.overview.outcome.label.clone(),
            )),
        ),
    ];

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; background-color: {BG_PAGE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 8px; height: 8px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 4px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            button:focus-visible, a:focus-visible {{ outline: 2px solid {TEXT_PRIMARY}; outline-offset: 2px; }}
            .hover-chip {{ transition: background-color 0.15s ease; }}
            .hover-chip:hover {{ background-color: {BG_HOVER} !important; }}
            "#
        }

        div {
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh; overflow: hidden;
                background-color: {BG_PAGE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
            ",

            TitleBar {
                studies: switcher,
                selected_slug: slug.clone(),
                on_select: move |slug: String| selected_slug.set(Some(slug)),
            }

            // Page body. Keyed by study so switching studies remounts every
            // showcase and discards its viewer state.
            div {
                key: "{slug}",
                style: "flex: 1; overflow-y: auto;",
                main {
                    style: "
                        max-width: 1080px; margin: 0 auto; padding: 40px 32px 80px;
                        display: flex; flex-direction: column; gap: 56px;
                    ",

                    // Hero
                    section {
                        style: "display: flex; flex-direction: column; gap: 24px;",
                        div {
                            if let Some(client) = study.hero.client.as_ref() {
                                p {
                                    style: "
                                        margin: 0 0 8px; font-size: 11px; font-weight: 600;
                                        color: {TEXT_MUTED}; text-transform: uppercase;
                                        letter-spacing: 1.8px;
                                    ",
                                    "{client}"
                                }
                            }
                            h1 {
                                style: "margin: 0; font-size: 34px; font-weight: 700; letter-spacing: -0.5px; color: {TEXT_PRIMARY};",
                                "{study.hero.title}"
                            }
                            p {
                                style: "margin: 10px 0 0; font-size: 16px; color: {TEXT_SECONDARY}; line-height: 1.6; max-width: 720px;",
                                "{study.hero.subtitle}"
                            }
                        }
                        HeroMedia {
                            image: study.hero.image.clone(),
                            detail: study.hero.detail.clone(),
                        }
                        div {
                            style: "display: flex; flex-wrap: wrap; gap: 32px;",
                            for (label, value) in hero_meta.iter() {
                                div {
                                    key: "{label}",
                                    p {
                                        style: "
                                            margin: 0; font-size: 10px; font-weight: 600;
                                            color: {TEXT_DIM}; text-transform: uppercase;
                                            letter-spacing: 1.6px;
                                        ",
                                        "{label}"
                                    }
                                    p {
                                        style: "margin: 2px 0 0; font-size: 14px; font-weight: 600; color: {TEXT_PRIMARY};",
                                        "{value}"
                                    }
                                }
                            }
                        }
                    }

                    // Overview cards
                    section {
                        style: "display: flex; flex-wrap: wrap; gap: 16px;",
                        for (title, description, stat) in overview_cards.iter() {
                            div {
                                key: "{title}",
                                style: "
                                    flex: 1; min-width: 260px; padding: 22px 24px;
                                    background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE};
                                    border-radius: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.06);
                                ",
                                h3 {
                                    style: "
                                        margin: 0 0 10px; font-size: 11px; font-weight: 600;
                                        color: {TEXT_MUTED}; text-transform: uppercase;
                                        letter-spacing: 1.8px;
                                    ",
                                    "{title}"
                                }
                                if let Some((value, label)) = stat.as_ref() {
                                    div {
                                        style: "margin-bottom: 10px;",
                                        span {
                                            style: "font-size: 28px; font-weight: 700; color: {TEXT_PRIMARY};",
                                            "{value}"
                                        }
                                        span {
                                            style: "margin-left: 8px; font-size: 12px; font-weight: 600; color: {TEXT_MUTED};",
                                            "{label}"
                                        }
                                    }
                                }
                                p {
                                    style: "margin: 0; font-size: 13px; color: {TEXT_SECONDARY}; line-height: 1.6;",
                                    "{description}"
                                }
                            }
                        }
                    }

                    // Problem
                    section {
                        style: "display: flex; flex-direction: column; gap: 16px;",
                        SectionHeading { text: "The Problem" }
                        h3 {
                            style: "margin: 0; font-size: 22px; font-weight: 700; color: {TEXT_PRIMARY};",
                            "{study.problem.title}"
                        }
                        for (index, paragraph) in study.problem.context.iter().enumerate() {
                            p {
                                key: "context-{index}",
                                style: "margin: 0; font-size: 14px; color: {TEXT_SECONDARY}; line-height: 1.7; max-width: 760px;",
                                "{paragraph}"
                            }
                        }
                        if let Some(quote) = study.problem.quote.as_ref() {
                            blockquote {
                                style: "
                                    margin: 8px 0 0; padding: 16px 20px;
                                    border-left: 3px solid {BG_INK};
                                    background-color: {BG_ELEVATED}; border-radius: 0 8px 8px 0;
                                ",
                                p {
                                    style: "margin: 0; font-size: 15px; font-style: italic; color: {TEXT_PRIMARY}; line-height: 1.6;",
                                    "\u{201c}{quote.text}\u{201d}"
                                }
                                footer {
                                    style: "margin-top: 8px; font-size: 12px; color: {TEXT_MUTED};",
                                    "{quote.author}"
                                    if let Some(role) = quote.role.as_ref() {
                                        span { " · {role}" }
                                    }
                                }
                            }
                        }
                    }

                    // Process
                    section {
                        style: "display: flex; flex-direction: column; gap: 32px;",
                        SectionHeading { text: "The Process" }
                        for (index, step) in study.process.steps.iter().enumerate() {
                            div {
                                key: "step-{index}",
                                style: "display: flex; flex-direction: column; gap: 12px;",
                                h3 {
                                    style: "margin: 0; font-size: 18px; font-weight: 700; color: {TEXT_PRIMARY};",
                                    "{step.title}"
                                }
                                p {
                                    style: "margin: 0; font-size: 14px; color: {TEXT_SECONDARY}; line-height: 1.7; max-width: 760px;",
                                    "{step.description}"
                                }
                                if !step.gallery.is_empty() {
                                    StepGallery {
                                        key: "{slug}-step-{index}",
                                        gallery_id: format!("{slug}-step-{index}"),
                                        images: step.gallery.clone(),
                                    }
                                }
                            }
                        }
                    }

                    // Design showcase
                    section {
                        style: "display: flex; flex-direction: column; gap: 20px;",
                        SectionHeading { text: "Design Showcase" }
                        ShowcaseCarousel {
                            key: "{slug}-showcase",
                            slides: study.showcase.slides.clone(),
                            hi_fi_slides: study.showcase.hi_fi_slides.clone(),
                            hub_layout: study.showcase.hub_layout,
                            enable_fidelity_toggle: study.showcase.enable_fidelity_toggle,
                        }
                    }

                    // Timeline
                    if !study.milestones.is_empty() {
                        section {
                            style: "display: flex; flex-direction: column; gap: 8px;",
                            SectionHeading { text: "Project Timeline" }
                            Timeline { milestones: study.milestones.clone() }
                        }
                    }

                    // Results
                    section {
                        style: "display: flex; flex-direction: column; gap: 20px;",
                        SectionHeading { text: "Results" }
                        ResultsPanel { results: study.results.clone() }
                    }

                    // Prev / next study navigation
                    nav {
                        style: "
                            display: flex; justify-content: space-between; gap: 16px;
                            padding-top: 24px; border-top: 1px solid {BORDER_SUBTLE};
                        ",
                        if let Some(previous) = study.navigation.previous.clone() {
                            StudyNavButton {
                                title: previous.title.clone(),
                                eyebrow: "Previous",
                                arrow: "←",
                                on_select: move |_| selected_slug.set(Some(previous.slug.clone())),
                            }
                        } else {
                            div {}
                        }
                        if let Some(next) = study.navigation.next.clone() {
                            StudyNavButton {
                                title: next.title.clone(),
                                eyebrow: "Next",
                                arrow: "→",
                                on_select: move |_| selected_slug.set(Some(next.slug.clone())),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SectionHeading(text: String) -> Element {
    rsx! {
        h2 {
            style: "
                margin: 0; font-size: 12px; font-weight: 700;
                color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 2.4px;
            ",
            "{text}"
        }
    }
}

#[component]
fn StudyNavButton(
    title: String,
    eyebrow: String,
    arrow: String,
    on_select: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "hover-chip",
            style: "
                display: flex; flex-direction: column; gap: 2px; text-align: left;
                padding: 14px 18px; border-radius: 10px; cursor: pointer;
                background-color: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT};
            ",
            onclick: move |e| on_select.call(e),
            span {
                style: "
                    font-size: 10px; font-weight: 600; color: {TEXT_DIM};
                    text-transform: uppercase; letter-spacing: 1.6px;
                ",
                "{eyebrow} {arrow}"
            }
            span {
                style: "font-size: 13px; font-weight: 600; color: {TEXT_PRIMARY};",
                "{title}"
            }
        }
    }
}
