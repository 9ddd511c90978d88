//! State management module
//!
//! This module contains the core data structures for the application:
//! - CaseStudy: one portfolio case study (hero, overview, showcase, results)
//! - Slide: one visual item in a showcase, plus fidelity preparation
//! - Milestone: a dated point on a project timeline
//! - ViewerState: the lightbox/strip interaction state machine

mod case_study;
mod milestone;
mod slide;
mod viewer;

pub use case_study::*;
pub use milestone::*;
pub use slide::*;
pub use viewer::*;
