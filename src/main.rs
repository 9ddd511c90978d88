//! Folio Showcase
//!
//! A desktop portfolio viewer that renders case studies from static data,
//! with carousel/lightbox showcases and milestone timelines.

mod app;
mod components;
mod constants;
mod core;
mod hotkeys;
mod state;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Folio Showcase")
                .with_inner_size(LogicalSize::new(1280.0, 860.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
