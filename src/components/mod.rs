//! UI components grouped by feature domain.

mod fidelity_toggle;
mod hero_media;
mod lightbox;
mod results_panel;
mod showcase_carousel;
mod step_gallery;
mod timeline;
mod title_bar;
mod zoom_control;

pub use fidelity_toggle::FidelityToggle;
pub use hero_media::HeroMedia;
pub use lightbox::Lightbox;
pub use results_panel::ResultsPanel;
pub use showcase_carousel::ShowcaseCarousel;
pub use step_gallery::StepGallery;
pub use timeline::Timeline;
pub use title_bar::TitleBar;
pub use zoom_control::ZoomControl;
