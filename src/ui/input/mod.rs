//! Input handling subsystem for UI interactions.
//!
//! This module translates egui input into carousel events:
//! - Keyboard keys bound in the carousel's key table
//! - Pointer and touch drags over the slide stage (swipes)

pub mod carousel_input_handler;
