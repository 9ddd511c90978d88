use dioxus::prelude::*;

use crate::constants::*;
use crate::state::Fidelity;

/// LO-FI / HI-FI segmented pill switching the showcase asset track.
#[component]
pub fn FidelityToggle(fidelity: Fidelity, on_select: EventHandler<Fidelity>) -> Element {
    let segment_style = |active: bool| {
        let (bg, color) = if active {
            (BG_INK, TEXT_INVERTED)
        } else {
            ("transparent", TEXT_SECONDARY)
        };
        format!(
            "padding: 4px 12px; font-size: 11px; font-weight: 600;
             text-transform: uppercase; letter-spacing: 1.4px;
             background-color: {bg}; color: {color};
             border: none; border-radius: 999px; cursor: pointer;"
        )
    };
    let lo_style = segment_style(fidelity == Fidelity::Lo);
    let hi_style = segment_style(fidelity == Fidelity::Hi);

    rsx! {
        div {
            style: "display: inline-flex; align-items: center; gap: 8px;",
            span {
                style: "
                    font-size: 11px; font-weight: 600; color: {TEXT_MUTED};
                    text-transform: uppercase; letter-spacing: 1.8px;
                ",
                "Fidelity"
            }
            div {
                style: "
                    display: inline-flex; gap: 2px; padding: 2px;
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 999px;
                    background-color: {BG_SURFACE};
                    box-shadow: 0 1px 2px rgba(0,0,0,0.05);
                ",
                button {
                    style: "{lo_style}",
                    aria_pressed: fidelity == Fidelity::Lo,
                    onclick: move |_| on_select.call(Fidelity::Lo),
                    "Lo-Fi"
                }
                button {
                    style: "{hi_style}",
                    aria_pressed: fidelity == Fidelity::Hi,
                    onclick: move |_| on_select.call(Fidelity::Hi),
                    "Hi-Fi"
                }
            }
        }
    }
}
