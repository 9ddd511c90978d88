use dioxus::prelude::*;

use crate::constants::*;

/// App header: brand mark plus one switcher button per case study.
#[component]
pub fn TitleBar(
    studies: Vec<(String, String)>,
    selected_slug: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 52px; padding: 0 24px; flex-shrink: 0;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_SUBTLE};
                user-select: none;
            ",
            span {
                style: "font-size: 14px; font-weight: 700; color: {TEXT_PRIMARY}; letter-spacing: -0.2px;",
                "Folio Showcase"
            }
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                for (slug, title) in studies.iter() {
                    {
                        let active = *slug == selected_slug;
                        let (bg, color, border) = if active {
                            (BG_INK, TEXT_INVERTED, BG_INK)
                        } else {
                            (BG_SURFACE, TEXT_SECONDARY, BORDER_DEFAULT)
                        };
                        let slug_for_click = slug.clone();
                        rsx! {
                            button {
                                key: "{slug}",
                                style: "
                                    padding: 6px 14px; font-size: 12px; font-weight: 600;
                                    background-color: {bg}; color: {color};
                                    border: 1px solid {border}; border-radius: 999px;
                                    cursor: pointer;
                                ",
                                onclick: move |_| on_select.call(slug_for_click.clone()),
                                "{title}"
                            }
                        }
                    }
                }
            }
        }
    }
}
