//! Shared UI constants: the page palette, showcase sizing, and the webview
//! scripts that report layout geometry back to the Rust side.

pub const BG_PAGE: &str = "#f8fafc";
pub const BG_SURFACE: &str = "#ffffff";
pub const BG_ELEVATED: &str = "#f1f5f9";
pub const BG_HOVER: &str = "#e2e8f0";
pub const BG_INK: &str = "#0f172a";

pub const BORDER_SUBTLE: &str = "#e2e8f0";
pub const BORDER_DEFAULT: &str = "#cbd5e1";
pub const BORDER_STRONG: &str = "#94a3b8";

pub const TEXT_PRIMARY: &str = "#0f172a";
pub const TEXT_SECONDARY: &str = "#334155";
pub const TEXT_MUTED: &str = "#64748b";
pub const TEXT_DIM: &str = "#94a3b8";
pub const TEXT_INVERTED: &str = "#f8fafc";

pub const ACCENT_LINK: &str = "#2563eb";
pub const OVERLAY_BACKDROP: &str = "rgba(0, 0, 0, 0.8)";

// Showcase strip sizing. Hub slides mimic a phone frame; step-gallery
// slides are landscape cards.
pub const HUB_SLIDE_WIDTH_PX: f64 = 375.0;
pub const HUB_SLIDE_HEIGHT_PX: f64 = 640.0;
pub const STEP_SLIDE_WIDTH_PX: f64 = 420.0;

/// DOM id of the hub showcase scroll host. A single hub showcase is
/// rendered per page, so the observation script can address it directly.
pub const SHOWCASE_VIEWPORT_ID: &str = "showcase-viewport";

/// Observes the hub showcase strip and streams viewport metrics to the
/// Rust side. Scroll events are coalesced to at most one measurement per
/// animation frame; resizes and slide-list changes re-measure as well, and
/// one eager measurement runs on attach so the initial state is correct
/// before any scroll occurs.
pub const SHOWCASE_VIEWPORT_SCRIPT: &str = r#"
const hostId = "showcase-viewport";
let ticking = false;

function measure() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const anchors = Array.from(host.querySelectorAll("[data-slide-anchor]")).map((node) => ({
        left: node.offsetLeft,
        width: node.getBoundingClientRect().width
    }));
    dioxus.send({
        scroll_left: host.scrollLeft,
        client_width: host.clientWidth,
        scroll_width: host.scrollWidth,
        anchors: anchors
    });
}

function requestMeasure() {
    if (ticking) {
        return;
    }
    ticking = true;
    requestAnimationFrame(() => {
        measure();
        ticking = false;
    });
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    host.addEventListener("scroll", requestMeasure, { passive: true });
    const resize = new ResizeObserver(() => requestMeasure());
    resize.observe(host);
    const relist = new MutationObserver(() => requestMeasure());
    relist.observe(host, { childList: true });
    measure();
}

attach();
await new Promise(() => {});
"#;
