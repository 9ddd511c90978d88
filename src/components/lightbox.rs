//! Lightbox overlay.
//!
//! Presents one prepared slide at full size with wrap-around navigation
//! and zoom. Video slides render a playable element instead of the
//! zoomable image, so the zoom control disappears for them. Keyboard
//! bindings live on the autofocused overlay node: they exist exactly as
//! long as the overlay is mounted, and every exit path unmounts it.

use dioxus::prelude::*;

use crate::constants::*;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{PreparedSlide, ZoomBounds};

#[component]
pub fn Lightbox(
    slides: Vec<PreparedSlide>,
    active_index: usize,
    zoom: f64,
    on_close: EventHandler<()>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_zoom_out: EventHandler<()>,
    on_zoom_in: EventHandler<()>,
    on_zoom_reset: EventHandler<()>,
) -> Element {
    let slide_count = slides.len();
    if slide_count == 0 {
        return rsx! {};
    }
    // The state machine only hands out valid indices; clamp anyway so a
    // stale render against a shrunken list cannot panic.
    let index = active_index.min(slide_count - 1);
    let active = slides[index].clone();
    let is_video = active.slide.video.is_some();
    let nav_disabled = slide_count <= 1;
    let arrow_style = |disabled: bool| {
        let color = if disabled { TEXT_DIM } else { TEXT_PRIMARY };
        let cursor = if disabled { "not-allowed" } else { "pointer" };
        format!(
            "width: 36px; height: 36px; border-radius: 50%;
             background-color: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT};
             color: {color}; cursor: {cursor}; font-size: 15px;"
        )
    };
    let prev_style = arrow_style(nav_disabled);
    let next_style = arrow_style(nav_disabled);
    let caption = active.slide.caption.clone();

    rsx! {
        div {
            role: "dialog",
            aria_modal: "true",
            aria_label: "Expanded view of {caption}",
            tabindex: "0",
            autofocus: true,
            style: "
                position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                background-color: {OVERLAY_BACKDROP}; z-index: 1000;
                display: flex; align-items: center; justify-content: center;
                outline: none;
            ",
            onclick: move |_| on_close.call(()),
            onkeydown: move |e: KeyboardEvent| {
                let context = HotkeyContext {
                    lightbox_open: true,
                    slide_count,
                };
                match handle_hotkey(&e.key(), &context) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::CloseLightbox => on_close.call(()),
                            HotkeyAction::NextSlide => on_next.call(()),
                            HotkeyAction::PrevSlide => on_prev.call(()),
                        }
                    }
                    HotkeyResult::Suppressed => e.prevent_default(),
                    HotkeyResult::NoMatch => {}
                }
            },

            div {
                style: "
                    display: flex; flex-direction: column; gap: 14px;
                    width: min(1100px, 92vw); max-height: 92vh;
                ",
                onclick: move |e| e.stop_propagation(),

                div {
                    style: "display: flex; justify-content: flex-end;",
                    button {
                        style: "
                            width: 32px; height: 32px; border-radius: 50%;
                            background-color: {BG_SURFACE}; border: none; cursor: pointer;
                            font-size: 16px; color: {TEXT_PRIMARY};
                        ",
                        aria_label: "Close lightbox",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                // Media frame
                div {
                    style: "
                        flex: 1; min-height: 0; overflow: hidden;
                        display: flex; align-items: center; justify-content: center;
                        border-radius: 12px; background-color: rgba(15, 23, 42, 0.4);
                    ",
                    if let Some(video_src) = active.slide.video.as_ref() {
                        video {
                            controls: true,
                            preload: "metadata",
                            src: "{video_src}",
                            poster: "{active.slide.image.src}",
                            style: "max-width: 100%; max-height: 76vh; border-radius: 8px;",
                        }
                    } else {
                        img {
                            src: "{active.computed_src}",
                            alt: "{active.slide.image.alt}",
                            style: "
                                max-width: 100%; max-height: 76vh; border-radius: 8px;
                                transform: scale({zoom}); transform-origin: center;
                                transition: transform 0.15s ease;
                            ",
                        }
                    }
                }

                div {
                    style: "display: flex; align-items: center; justify-content: space-between; gap: 16px;",
                    div {
                        style: "display: flex; align-items: center; gap: 8px;",
                        button {
                            style: "{prev_style}",
                            disabled: nav_disabled,
                            aria_label: "View previous slide",
                            onclick: move |_| on_prev.call(()),
                            "←"
                        }
                        button {
                            style: "{next_style}",
                            disabled: nav_disabled,
                            aria_label: "View next slide",
                            onclick: move |_| on_next.call(()),
                            "→"
                        }
                        span {
                            style: "font-size: 12px; color: {TEXT_DIM};",
                            "{index + 1} / {slide_count}"
                        }
                    }

                    // Zoom is meaningless for video
                    if !is_video {
                        crate::components::ZoomControl {
                            zoom,
                            bounds: ZoomBounds::LIGHTBOX,
                            show_reset: true,
                            on_zoom_out: move |_| on_zoom_out.call(()),
                            on_zoom_in: move |_| on_zoom_in.call(()),
                            on_reset: move |_| on_zoom_reset.call(()),
                        }
                    }
                }

                footer {
                    style: "
                        display: flex; align-items: baseline; justify-content: space-between;
                        gap: 16px; padding: 10px 14px; border-radius: 8px;
                        background-color: {BG_SURFACE};
                    ",
                    p {
                        style: "margin: 0; font-size: 13px; color: {TEXT_SECONDARY}; line-height: 1.5;",
                        span {
                            style: "
                                display: block; font-size: 10px; font-weight: 600;
                                color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 1.6px;
                            ",
                            "{active.slide.category}"
                        }
                        "{caption}"
                    }
                    if let Some(link) = active.slide.link.as_ref() {
                        a {
                            href: "{link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            style: "font-size: 12px; font-weight: 600; color: {ACCENT_LINK}; white-space: nowrap;",
                            "Open in Figma ↗"
                        }
                    }
                }
            }
        }
    }
}
