//! Input vocabulary of the carousel.
//!
//! Hosts translate their native events into [`InputEvent`]s. Keyboard events
//! go through an [`InputMap`], a flat table from [`Key`] to [`Command`], so key
//! handling is data rather than control flow.

use serde::{Deserialize, Serialize};
use crate::traits::TimerHandle;

/// Keys the carousel can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Space,
    Enter,
    Home,
    End,
}

/// Something the controller can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Next,
    Prev,
    Goto(i64),
    TogglePlay,
    Pause,
    Resume,
}

/// Raw input delivered by the host.
///
/// Pointer and touch gestures share the same two events; the host extracts the
/// horizontal coordinate (mouse `x` or the first changed touch point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    NextClicked,
    PrevClicked,
    IndicatorClicked(usize),
    PlayPauseClicked,
    KeyDown(Key),
    PointerDown { x: f32 },
    PointerUp { x: f32 },
    TimerFired(TimerHandle),
}

/// How an event was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    /// The event mapped to carousel behavior
    pub handled: bool,
    /// The host should suppress its default action for this event
    pub prevent_default: bool,
}

impl InputOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self { handled: true, prevent_default: false }
    }

    pub fn handled_exclusively() -> Self {
        Self { handled: true, prevent_default: true }
    }
}

/// One row of the key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: Key,
    pub command: Command,
    #[serde(default)]
    pub prevent_default: bool,
}

impl KeyBinding {
    pub fn new(key: Key, command: Command) -> Self {
        Self { key, command, prevent_default: false }
    }

    pub fn exclusive(key: Key, command: Command) -> Self {
        Self { key, command, prevent_default: true }
    }
}

/// Default bindings: arrows navigate, Space toggles playback and keeps the
/// host from scrolling.
pub fn default_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new(Key::ArrowRight, Command::Next),
        KeyBinding::new(Key::ArrowLeft, Command::Prev),
        KeyBinding::exclusive(Key::Space, Command::TogglePlay),
    ]
}

/// Lookup table from keys to commands.
#[derive(Debug, Clone, PartialEq)]
pub struct InputMap {
    bindings: Vec<KeyBinding>,
}

impl Default for InputMap {
    fn default() -> Self {
        Self::new(default_key_bindings())
    }
}

impl InputMap {
    /// Builds a map from a binding list. When a key appears more than once the
    /// last row wins, so user overrides can simply be appended.
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let mut deduped: Vec<KeyBinding> = Vec::with_capacity(bindings.len());
        for binding in bindings {
            deduped.retain(|b| b.key != binding.key);
            deduped.push(binding);
        }
        Self { bindings: deduped }
    }

    pub fn binding_for(&self, key: Key) -> Option<&KeyBinding> {
        self.bindings.iter().find(|b| b.key == key)
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let map = InputMap::default();
        assert_eq!(map.binding_for(Key::ArrowRight).map(|b| b.command), Some(Command::Next));
        assert_eq!(map.binding_for(Key::ArrowLeft).map(|b| b.command), Some(Command::Prev));

        let space = map.binding_for(Key::Space).unwrap();
        assert_eq!(space.command, Command::TogglePlay);
        assert!(space.prevent_default);

        assert!(map.binding_for(Key::Enter).is_none());
    }

    #[test]
    fn test_later_binding_overrides_earlier() {
        let mut bindings = default_key_bindings();
        bindings.push(KeyBinding::new(Key::ArrowRight, Command::Prev));
        let map = InputMap::new(bindings);

        assert_eq!(map.bindings().len(), 3);
        assert_eq!(map.binding_for(Key::ArrowRight).map(|b| b.command), Some(Command::Prev));
    }

    #[test]
    fn test_binding_json_defaults_prevent_default_to_false() {
        let binding: KeyBinding =
            serde_json::from_str(r#"{"key":"Home","command":{"Goto":0}}"#).unwrap();
        assert_eq!(binding, KeyBinding::new(Key::Home, Command::Goto(0)));
    }
}
