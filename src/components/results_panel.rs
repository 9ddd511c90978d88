use dioxus::prelude::*;

use crate::constants::*;
use crate::state::Results;

/// Outcome metrics grid plus the optional testimonial block.
#[component]
pub fn ResultsPanel(results: Results) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",
            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px;",
                for (index, metric) in results.metrics.iter().enumerate() {
                    div {
                        key: "metric-{index}",
                        style: "
                            flex: 1; min-width: 200px; padding: 20px 24px;
                            background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE};
                            border-radius: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.06);
                        ",
                        div {
                            style: "font-size: 30px; font-weight: 700; color: {TEXT_PRIMARY}; letter-spacing: -0.5px;",
                            "{metric.value}"
                        }
                        div {
                            style: "
                                margin-top: 4px; font-size: 11px; font-weight: 600;
                                color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 1.4px;
                            ",
                            "{metric.label}"
                        }
                        if let Some(description) = metric.description.as_ref() {
                            p {
                                style: "margin: 10px 0 0; font-size: 13px; color: {TEXT_SECONDARY}; line-height: 1.5;",
                                "{description}"
                            }
                        }
                    }
                }
            }

            if let Some(testimonial) = results.testimonial.as_ref() {
                blockquote {
                    style: "
                        margin: 0; padding: 24px 28px;
                        background-color: {BG_INK}; color: {TEXT_INVERTED};
                        border-radius: 12px;
                    ",
                    p {
                        style: "margin: 0; font-size: 16px; line-height: 1.6; font-style: italic;",
                        "\u{201c}{testimonial.text}\u{201d}"
                    }
                    footer {
                        style: "margin-top: 12px; font-size: 13px; color: {TEXT_DIM};",
                        "{testimonial.author}"
                        if let Some(role) = testimonial.role.as_ref() {
                            span { " · {role}" }
                        }
                    }
                }
            }
        }
    }
}
