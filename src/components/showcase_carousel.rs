//! Design showcase carousel.
//!
//! Two variants over the same slide contract. The legacy variant is a
//! scroll-arrow strip with a lightbox, used by the older case studies. The
//! hub variant adds the lo-fi/hi-fi toggle, an inline strip zoom, and
//! scroll tracking: a webview script streams viewport metrics and the Rust
//! side derives the centered slide and the end-of-scroll flag from them.

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{FidelityToggle, Lightbox, ZoomControl};
use crate::constants::*;
use crate::core::scroll::{is_at_end, nearest_center_index, ViewportMetrics};
use crate::state::{
    prepare_hi_fi, prepare_lo_fi, Fidelity, PreparedSlide, Slide, ViewerState, ZoomBounds,
    ZOOM_DEFAULT,
};

#[component]
pub fn ShowcaseCarousel(
    slides: Vec<Slide>,
    hi_fi_slides: Option<Vec<Slide>>,
    hub_layout: bool,
    enable_fidelity_toggle: bool,
) -> Element {
    if slides.is_empty() {
        return rsx! {};
    }
    if hub_layout {
        rsx! {
            HubShowcase { slides, hi_fi_slides, enable_fidelity_toggle }
        }
    } else {
        rsx! {
            LegacyCarousel { slides }
        }
    }
}

/// Smooth-scroll so the anchor for `index` is centered in the strip. An
/// index with no rendered anchor is a silent no-op.
fn scroll_to_slide(index: usize) {
    let js = format!(
        r#"const target = document.getElementById("showcase-slide-{index}");
if (target) {{ target.scrollIntoView({{ behavior: "smooth", block: "nearest", inline: "center" }}); }}"#
    );
    document::eval(&js);
}

/// Smooth-scroll the legacy strip by most of a viewport width.
fn scroll_legacy_strip(direction: f64) {
    let js = format!(
        r#"const host = document.getElementById("legacy-showcase-viewport");
if (host) {{ host.scrollBy({{ left: host.clientWidth * 0.8 * {direction}, behavior: "smooth" }}); }}"#
    );
    document::eval(&js);
}

#[component]
fn HubShowcase(
    slides: Vec<Slide>,
    hi_fi_slides: Option<Vec<Slide>>,
    enable_fidelity_toggle: bool,
) -> Element {
    let mut fidelity = use_signal(Fidelity::default);
    let mut viewer = use_signal(ViewerState::default);
    let mut strip_zoom = use_signal(|| ZOOM_DEFAULT);
    let mut viewport_eval = use_signal(|| None::<document::Eval>);

    // Prepared lists derive from the props and the fidelity mode; absent
    // sources degrade to placeholders inside the preparers.
    let displayed: Vec<PreparedSlide> = match fidelity() {
        Fidelity::Lo => prepare_lo_fi(&slides),
        Fidelity::Hi => prepare_hi_fi(&slides, hi_fi_slides.as_deref()),
    };
    let slide_count = displayed.len();

    // A fidelity switch swaps the displayed list: close the lightbox and
    // drop back to the first slide until the next measurement arrives.
    use_effect(move || {
        let _ = fidelity();
        viewer.write().reset_for_relist();
    });

    use_effect(move || {
        if viewport_eval().is_some() {
            return;
        }
        viewport_eval.set(Some(document::eval(SHOWCASE_VIEWPORT_SCRIPT)));
    });

    // Receive viewport metrics from the observation script and derive the
    // centered slide and end-of-scroll state.
    use_future(move || {
        let viewport_eval = viewport_eval.clone();
        let mut viewer = viewer.clone();
        async move {
            loop {
                let Some(eval) = viewport_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<ViewportMetrics>().await {
                        Ok(metrics) => {
                            let visible = nearest_center_index(&metrics);
                            let at_end = is_at_end(&metrics);
                            let current = viewer();
                            if current.visible_index != visible || current.is_at_end != at_end {
                                let mut state = viewer.write();
                                state.visible_index = visible;
                                state.is_at_end = at_end;
                            }
                        }
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    let zoom = strip_zoom();
    let at_end = viewer.read().is_at_end;
    let edge_label = if at_end {
        "Scroll back to previous screens"
    } else {
        "Scroll right to see more screens"
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px; width: 100%;",

            // Controls row: fidelity toggle (when offered) and strip zoom
            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 16px;",
                if enable_fidelity_toggle {
                    FidelityToggle {
                        fidelity: fidelity(),
                        on_select: move |mode| fidelity.set(mode),
                    }
                } else {
                    div {}
                }
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span {
                        style: "
                            font-size: 11px; font-weight: 600; color: {TEXT_MUTED};
                            text-transform: uppercase; letter-spacing: 1.8px;
                        ",
                        "Zoom"
                    }
                    ZoomControl {
                        zoom,
                        bounds: ZoomBounds::STRIP,
                        show_reset: true,
                        on_zoom_out: move |_| {
                            let current = strip_zoom();
                            strip_zoom.set(ZoomBounds::STRIP.decrease(current));
                        },
                        on_zoom_in: move |_| {
                            let current = strip_zoom();
                            strip_zoom.set(ZoomBounds::STRIP.increase(current));
                        },
                        on_reset: move |_| strip_zoom.set(ZOOM_DEFAULT),
                    }
                }
            }

            div {
                style: "position: relative;",
                div {
                    id: "{SHOWCASE_VIEWPORT_ID}",
                    aria_label: "Design showcase carousel",
                    style: "
                        display: flex; gap: 16px; overflow-x: auto;
                        scroll-snap-type: x mandatory; padding-bottom: 16px;
                        transform: scale({zoom}); transform-origin: top left;
                        transition: transform 0.2s ease;
                    ",
                    for (index, item) in displayed.iter().enumerate() {
                        article {
                            key: "{item.slide.id}",
                            id: "showcase-slide-{index}",
                            "data-slide-anchor": "true",
                            style: "flex: 0 0 auto; scroll-snap-align: start;",
                            div {
                                style: "
                                    display: flex; flex-direction: column; gap: 10px;
                                    width: {HUB_SLIDE_WIDTH_PX}px;
                                ",
                                button {
                                    style: "
                                        display: block; padding: 0; background: transparent;
                                        border: none; cursor: zoom-in;
                                    ",
                                    aria_label: "Open {item.slide.category} design in a modal",
                                    onclick: move |_| viewer.write().open(index, slide_count),
                                    img {
                                        src: "{item.computed_src}",
                                        alt: "{item.slide.image.alt}",
                                        loading: "lazy",
                                        style: "
                                            display: block; width: 100%;
                                            height: {HUB_SLIDE_HEIGHT_PX}px; object-fit: cover;
                                            border-radius: 10px; border: 1px solid {BORDER_SUBTLE};
                                            background-color: {BG_ELEVATED};
                                        ",
                                    }
                                }
                                div {
                                    style: "display: flex; flex-direction: column; gap: 4px; padding: 0 4px;",
                                    p {
                                        style: "
                                            margin: 0; font-size: 11px; font-weight: 600;
                                            color: {TEXT_MUTED}; text-transform: uppercase;
                                            letter-spacing: 1.8px;
                                        ",
                                        "{item.slide.category}"
                                    }
                                    p {
                                        style: "margin: 0; font-size: 13px; color: {TEXT_SECONDARY}; line-height: 1.5;",
                                        "{item.slide.caption_for(fidelity())}"
                                    }
                                }
                            }
                        }
                    }
                }

                // Edge button: pages forward until the end, then back
                button {
                    style: "
                        position: absolute; right: 8px; top: 50%; transform: translateY(-50%);
                        display: flex; align-items: center; gap: 6px;
                        padding: 8px 12px; border-radius: 999px;
                        background-color: rgba(255, 255, 255, 0.92);
                        border: 1px solid {BORDER_DEFAULT}; color: {TEXT_SECONDARY};
                        cursor: pointer; font-size: 11px; font-weight: 600;
                        text-transform: uppercase; letter-spacing: 1px;
                        box-shadow: 0 1px 3px rgba(0,0,0,0.1);
                    ",
                    aria_label: "{edge_label}",
                    onclick: move |_| {
                        if slide_count == 0 {
                            return;
                        }
                        let state = viewer();
                        let target = if state.is_at_end {
                            (state.visible_index + slide_count - 1) % slide_count
                        } else {
                            (state.visible_index + 1) % slide_count
                        };
                        scroll_to_slide(target);
                    },
                    if at_end {
                        span { "←" }
                        span { "Previous" }
                    } else {
                        span { "Scroll" }
                        span { "→" }
                    }
                }
            }

            if let Some(active_index) = viewer.read().active_index() {
                Lightbox {
                    slides: displayed.clone(),
                    active_index,
                    zoom: viewer.read().zoom,
                    on_close: move |_| viewer.write().close(),
                    on_prev: move |_| viewer.write().prev(slide_count),
                    on_next: move |_| viewer.write().next(slide_count),
                    on_zoom_out: move |_| {
                        let current = viewer.read().zoom;
                        viewer.write().zoom = ZoomBounds::LIGHTBOX.decrease(current);
                    },
                    on_zoom_in: move |_| {
                        let current = viewer.read().zoom;
                        viewer.write().zoom = ZoomBounds::LIGHTBOX.increase(current);
                    },
                    on_zoom_reset: move |_| {
                        viewer.write().zoom = ZOOM_DEFAULT;
                    },
                }
            }
        }
    }
}

#[component]
fn LegacyCarousel(slides: Vec<Slide>) -> Element {
    let mut viewer = use_signal(ViewerState::default);

    let prepared = prepare_lo_fi(&slides);
    let slide_count = prepared.len();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px; width: 100%;",

            div {
                id: "legacy-showcase-viewport",
                aria_label: "Design showcase carousel",
                style: "
                    display: flex; gap: 16px; overflow-x: auto;
                    scroll-snap-type: x mandatory; padding-bottom: 8px;
                ",
                for (index, item) in prepared.iter().enumerate() {
                    article {
                        key: "{item.slide.id}",
                        style: "
                            flex: 0 0 auto; width: min(640px, 80vw);
                            scroll-snap-align: start;
                            display: flex; flex-direction: column; gap: 10px;
                        ",
                        button {
                            style: "
                                display: block; padding: 0; background: transparent;
                                border: none; cursor: zoom-in;
                            ",
                            aria_label: "Open {item.slide.category} design in a modal",
                            onclick: move |_| viewer.write().open(index, slide_count),
                            img {
                                src: "{item.computed_src}",
                                alt: "{item.slide.image.alt}",
                                loading: "lazy",
                                style: "
                                    display: block; width: 100%; height: auto;
                                    border-radius: 10px; border: 1px solid {BORDER_SUBTLE};
                                    background-color: {BG_ELEVATED};
                                ",
                            }
                        }
                        footer {
                            style: "display: flex; flex-direction: column; gap: 4px; padding: 0 4px;",
                            p {
                                style: "
                                    margin: 0; font-size: 11px; font-weight: 600;
                                    color: {TEXT_MUTED}; text-transform: uppercase;
                                    letter-spacing: 1.8px;
                                ",
                                "{item.slide.category}"
                            }
                            p {
                                style: "margin: 0; font-size: 13px; color: {TEXT_SECONDARY}; line-height: 1.5;",
                                "{item.slide.caption}"
                                if let Some(link) = item.slide.link.as_ref() {
                                    a {
                                        href: "{link}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        style: "margin-left: 4px; font-weight: 600; color: {ACCENT_LINK};",
                                        "Open in Figma ↗"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                style: "display: flex; gap: 8px;",
                button {
                    class: "hover-chip",
                    style: "
                        width: 34px; height: 34px; border-radius: 50%;
                        background-color: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT};
                        color: {TEXT_SECONDARY}; cursor: pointer; font-size: 14px;
                    ",
                    aria_label: "Previous design slide",
                    onclick: move |_| scroll_legacy_strip(-1.0),
                    "↙"
                }
                button {
                    class: "hover-chip",
                    style: "
                        width: 34px; height: 34px; border-radius: 50%;
                        background-color: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT};
                        color: {TEXT_SECONDARY}; cursor: pointer; font-size: 14px;
                    ",
                    aria_label: "Next design slide",
                    onclick: move |_| scroll_legacy_strip(1.0),
                    "↗"
                }
            }

            if let Some(active_index) = viewer.read().active_index() {
                Lightbox {
                    slides: prepared.clone(),
                    active_index,
                    zoom: viewer.read().zoom,
                    on_close: move |_| viewer.write().close(),
                    on_prev: move |_| viewer.write().prev(slide_count),
                    on_next: move |_| viewer.write().next(slide_count),
                    on_zoom_out: move |_| {
                        let current = viewer.read().zoom;
                        viewer.write().zoom = ZoomBounds::LIGHTBOX.decrease(current);
                    },
                    on_zoom_in: move |_| {
                        let current = viewer.read().zoom;
                        viewer.write().zoom = ZoomBounds::LIGHTBOX.increase(current);
                    },
                    on_zoom_reset: move |_| {
                        viewer.write().zoom = ZOOM_DEFAULT;
                    },
                }
            }
        }
    }
}
