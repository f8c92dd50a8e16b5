//! Translation of egui input into carousel events.
//!
//! egui reports touch drags as pointer drags, so mouse and touch swipes
//! arrive through the same response.

use eframe::egui;
use rcarousel::{InputEvent, Key};

/// egui keys the carousel can bind, paired with the carousel's key names.
const KEY_TABLE: &[(egui::Key, Key)] = &[
    (egui::Key::ArrowLeft, Key::ArrowLeft),
    (egui::Key::ArrowRight, Key::ArrowRight),
    (egui::Key::ArrowUp, Key::ArrowUp),
    (egui::Key::ArrowDown, Key::ArrowDown),
    (egui::Key::Space, Key::Space),
    (egui::Key::Enter, Key::Enter),
    (egui::Key::Home, Key::Home),
    (egui::Key::End, Key::End),
];

/// Maps an egui key to a carousel key.
pub fn map_key(key: egui::Key) -> Option<Key> {
    KEY_TABLE
        .iter()
        .find(|(egui_key, _)| *egui_key == key)
        .map(|(_, key)| *key)
}

/// A key press the carousel can bind, with the egui key and modifiers needed
/// to consume it again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselKeyPress {
    pub egui_key: egui::Key,
    pub modifiers: egui::Modifiers,
    pub key: Key,
}

/// Returns the carousel keys pressed this frame, in event order. Auto-repeat
/// presses are included, like repeated keydown events.
///
/// Nothing is reported while a text field has keyboard focus.
pub fn pressed_carousel_keys(ctx: &egui::Context) -> Vec<CarouselKeyPress> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key { key, pressed: true, modifiers, .. } => map_key(*key).map(|k| CarouselKeyPress {
                    egui_key: *key,
                    modifiers: *modifiers,
                    key: k,
                }),
                _ => None,
            })
            .collect()
    })
}

/// Turns drag start/stop on the slide stage into swipe events.
///
/// # Arguments
/// * `ctx` - The egui context for pointer positions
/// * `response` - Response of the stage, sensed for drags
pub fn swipe_events(ctx: &egui::Context, response: &egui::Response) -> Vec<InputEvent> {
    let mut events = Vec::new();

    if response.drag_started() {
        if let Some(origin) = ctx.input(|i| i.pointer.press_origin()) {
            events.push(InputEvent::PointerDown { x: origin.x });
        }
    }

    if response.drag_stopped() {
        let release = ctx.input(|i| i.pointer.interact_pos().or_else(|| i.pointer.latest_pos()));
        if let Some(pos) = release {
            events.push(InputEvent::PointerUp { x: pos.x });
        }
    }

    events
}
