use dioxus::prelude::*;

use crate::constants::*;
use crate::state::{HeroDetail, SlideImage};

/// Case-study hero image. An image carrying an external link renders as a
/// plain link; otherwise clicking opens the detail overlay.
#[component]
pub fn HeroMedia(image: SlideImage, detail: Option<HeroDetail>) -> Element {
    let mut open = use_signal(|| false);

    let frame = rsx! {
        img {
            src: "{image.src}",
            alt: "{image.alt}",
            style: "
                display: block; width: 100%; height: auto;
                border-radius: 12px; border: 1px solid {BORDER_SUBTLE};
                box-shadow: 0 4px 16px rgba(15, 23, 42, 0.08);
            ",
        }
    };

    rsx! {
        div {
            if let Some(link) = image.link.as_ref() {
                a {
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    aria_label: "Open project website",
                    style: "display: block; cursor: pointer;",
                    {frame}
                }
            } else {
                button {
                    style: "
                        display: block; width: 100%; padding: 0;
                        background: transparent; border: none; cursor: pointer;
                    ",
                    aria_label: "Open hero image details",
                    onclick: move |_| open.set(true),
                    {frame}
                }
            }

            if open() {
                if let Some(detail) = detail.as_ref() {
                    div {
                        role: "dialog",
                        aria_modal: "true",
                        style: "
                            position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                            background-color: {OVERLAY_BACKDROP}; z-index: 900;
                            display: flex; align-items: center; justify-content: center;
                        ",
                        onclick: move |_| open.set(false),
                        div {
                            style: "
                                width: min(560px, 90vw); max-height: 80vh; overflow-y: auto;
                                background-color: {BG_SURFACE}; border-radius: 12px;
                                padding: 24px 28px;
                                box-shadow: 0 25px 60px rgba(0,0,0,0.4);
                            ",
                            onclick: move |e| e.stop_propagation(),
                            header {
                                style: "
                                    display: flex; align-items: flex-start; justify-content: space-between;
                                    gap: 16px; margin-bottom: 12px;
                                ",
                                div {
                                    if let Some(subtitle) = detail.subtitle.as_ref() {
                                        p {
                                            style: "
                                                margin: 0 0 4px; font-size: 11px; font-weight: 600;
                                                color: {TEXT_MUTED}; text-transform: uppercase;
                                                letter-spacing: 1.8px;
                                            ",
                                            "{subtitle}"
                                        }
                                    }
                                    h3 {
                                        style: "margin: 0; font-size: 18px; font-weight: 700; color: {TEXT_PRIMARY};",
                                        "{detail.title}"
                                    }
                                }
                                button {
                                    style: "
                                        background: transparent; border: none; cursor: pointer;
                                        font-size: 20px; color: {TEXT_MUTED}; line-height: 1;
                                    ",
                                    aria_label: "Close modal",
                                    onclick: move |_| open.set(false),
                                    "×"
                                }
                            }
                            for (index, paragraph) in detail.paragraphs.iter().enumerate() {
                                p {
                                    key: "paragraph-{index}",
                                    style: "margin: 0 0 12px; font-size: 14px; line-height: 1.6; color: {TEXT_SECONDARY};",
                                    "{paragraph}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
