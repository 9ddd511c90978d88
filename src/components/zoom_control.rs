use dioxus::prelude::*;

use crate::constants::*;
use crate::state::{zoom_percent_label, ZoomBounds, ZOOM_DEFAULT};

/// The ± / reset pill. Each surface passes its own bounds; buttons disable
/// exactly at the applicable limit, and reset disables at the neutral zoom.
#[component]
pub fn ZoomControl(
    zoom: f64,
    bounds: ZoomBounds,
    show_reset: bool,
    on_zoom_out: EventHandler<MouseEvent>,
    on_zoom_in: EventHandler<MouseEvent>,
    on_reset: EventHandler<MouseEvent>,
) -> Element {
    let label = zoom_percent_label(zoom);
    let at_min = zoom <= bounds.min;
    let at_max = zoom >= bounds.max;
    let at_default = zoom == ZOOM_DEFAULT;

    let button_style = |disabled: bool| {
        let color = if disabled { TEXT_DIM } else { TEXT_SECONDARY };
        let cursor = if disabled { "not-allowed" } else { "pointer" };
        format!(
            "padding: 2px 8px; font-size: 12px; font-weight: 600;
             background: transparent; border: none; border-radius: 999px;
             color: {color}; cursor: {cursor};"
        )
    };
    let out_style = button_style(at_min);
    let in_style = button_style(at_max);
    let reset_style = button_style(at_default);

    rsx! {
        div {
            style: "
                display: inline-flex; align-items: center; gap: 2px;
                border: 1px solid {BORDER_DEFAULT}; border-radius: 999px;
                background-color: {BG_SURFACE}; padding: 2px 4px;
                box-shadow: 0 1px 2px rgba(0,0,0,0.05);
            ",
            button {
                style: "{out_style}",
                disabled: at_min,
                aria_label: "Zoom out",
                onclick: move |e| on_zoom_out.call(e),
                "−"
            }
            span {
                style: "
                    min-width: 44px; text-align: center;
                    font-size: 12px; font-weight: 500; color: {TEXT_MUTED};
                ",
                "{label}"
            }
            button {
                style: "{in_style}",
                disabled: at_max,
                aria_label: "Zoom in",
                onclick: move |e| on_zoom_in.call(e),
                "+"
            }
            if show_reset {
                button {
                    style: "{reset_style}",
                    disabled: at_default,
                    aria_label: "Reset zoom",
                    onclick: move |e| on_reset.call(e),
                    "Reset"
                }
            }
        }
    }
}
