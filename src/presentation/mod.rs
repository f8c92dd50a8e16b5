//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from carousel logic:
//! - Slide and indicator colours
//! - Readable text colours over arbitrary slide backgrounds

pub mod color_mapping;
