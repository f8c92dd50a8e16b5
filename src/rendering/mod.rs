//! Rendering subsystem for drawing slides
//!
//! Low-level painting of the slide stage: background, title and caption band.

pub mod slide_renderer;
