//! UI panel rendering subsystem
//!
//! This module contains all panel rendering logic for the carousel GUI:
//! - Header panel (deck controls, theme selector)
//! - Slide panel (the stage, edge arrows, swipe area)
//! - Controls bar (previous, play/pause, next, indicators)
//! - Status bar (position, autoplay state, deck source)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (keyboard and swipe translation)

pub mod header;
pub mod slide_panel;
pub mod controls_bar;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
