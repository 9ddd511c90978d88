//! Step gallery.
//!
//! A horizontally scrolling strip of process images. Arrows page the strip
//! by one viewport width with a fire-and-forget smooth scroll; clicking an
//! image opens the lightbox with the full zoom range.

use dioxus::prelude::*;

use crate::components::Lightbox;
use crate::constants::*;
use crate::state::{prepare_lo_fi, Slide, SlideImage, ViewerState, ZoomBounds};

/// Smooth-scroll a gallery host by `direction` viewport widths. A missing
/// host (gallery unmounted mid-animation) is a silent no-op.
fn scroll_gallery(host_id: &str, direction: f64) {
    let js = format!(
        r#"const host = document.getElementById("{host_id}");
if (host) {{ host.scrollBy({{ left: host.clientWidth * {direction}, behavior: "smooth" }}); }}"#
    );
    document::eval(&js);
}

#[component]
pub fn StepGallery(gallery_id: String, images: Vec<SlideImage>) -> Element {
    let mut viewer = use_signal(ViewerState::default);

    let gallery_id_for_slides = gallery_id.clone();
    let images_for_slides = images.clone();
    let prepared = use_memo(move || {
        let slides: Vec<Slide> = images_for_slides
            .iter()
            .enumerate()
            .map(|(index, image)| Slide {
                id: format!("{gallery_id_for_slides}-{index}"),
                caption: image.alt.clone(),
                link: image.link.clone(),
                image: image.clone(),
                ..Slide::default()
            })
            .collect();
        prepare_lo_fi(&slides)
    });

    let slide_count = prepared.read().len();
    if slide_count == 0 {
        return rsx! {};
    }
    let host_id = format!("step-gallery-{gallery_id}");
    let host_id_prev = host_id.clone();
    let host_id_next = host_id.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",

            div {
                id: "{host_id}",
                style: "
                    display: flex; gap: 16px; overflow-x: auto;
                    scroll-snap-type: x mandatory; padding-bottom: 8px;
                ",
                for (index, item) in prepared.read().iter().enumerate() {
                    figure {
                        key: "{item.slide.id}",
                        style: "
                            flex: 0 0 auto; width: {STEP_SLIDE_WIDTH_PX}px; margin: 0;
                            scroll-snap-align: start;
                            display: flex; flex-direction: column; gap: 8px;
                        ",
                        button {
                            style: "
                                display: block; padding: 0; background: transparent;
                                border: none; cursor: zoom-in;
                            ",
                            aria_label: "Open {item.slide.image.alt} in a larger view",
                            onclick: move |_| viewer.write().open(index, slide_count),
                            img {
                                src: "{item.computed_src}",
                                alt: "{item.slide.image.alt}",
                                loading: if index == 0 { "eager" } else { "lazy" },
                                style: "
                                    display: block; width: 100%; height: auto;
                                    border-radius: 10px; border: 1px solid {BORDER_SUBTLE};
                                    background-color: {BG_ELEVATED};
                                ",
                            }
                        }
                        figcaption {
                            style: "font-size: 12px; color: {TEXT_MUTED}; line-height: 1.5;",
                            "{item.slide.image.alt}"
                            if let Some(link) = item.slide.link.as_ref() {
                                a {
                                    href: "{link}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    style: "margin-left: 4px; font-weight: 600; color: {ACCENT_LINK};",
                                    "Open source ↗"
                                }
                            }
                        }
                    }
                }
            }

            if slide_count > 1 {
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        class: "hover-chip",
                        style: "
                            width: 34px; height: 34px; border-radius: 50%;
                            background-color: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT};
                            color: {TEXT_SECONDARY}; cursor: pointer; font-size: 14px;
                        ",
                        aria_label: "Scroll gallery backward",
                        onclick: move |_| scroll_gallery(&host_id_prev, -1.0),
                        "←"
                    }
                    button {
                        class: "hover-chip",
                        style: "
                            width: 34px; height: 34px; border-radius: 50%;
                            background-color: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT};
                            color: {TEXT_SECONDARY}; cursor: pointer; font-size: 14px;
                        ",
                        aria_label: "Scroll gallery forward",
                        onclick: move |_| scroll_gallery(&host_id_next, 1.0),
                        "→"
                    }
                }
            }

            if let Some(active_index) = viewer.read().active_index() {
                Lightbox {
                    slides: prepared.read().clone(),
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
                        viewer.write().zoom = crate::state::ZOOM_DEFAULT;
                    },
                }
            }
        }
    }
}
