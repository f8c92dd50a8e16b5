/// Opaque identifier for a timer armed through a [`Scheduler`].
///
/// Handles are never reused by a scheduler, so a handle that was cancelled
/// can be told apart from the one that replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Glyph shown on the play/pause control.
///
/// The control shows the action a click would take: `Pause` while
/// autoplay runs, `Play` while it is stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayGlyph {
    Pause,
    Play,
}

impl PlayGlyph {
    /// Icon text used by text-based hosts.
    pub fn icon(&self) -> &'static str {
        match self {
            PlayGlyph::Pause => "⏸",
            PlayGlyph::Play => "▶",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayGlyph::Pause => "Pause",
            PlayGlyph::Play => "Play",
        }
    }
}

/// Visual surface the carousel mutates.
///
/// The host owns the slide and indicator elements; the controller only flips
/// their active marker and swaps the play/pause glyph. Calls use set
/// semantics (not toggles), so repeating a call is harmless.
pub trait SlideView {
    /// Marks the slide at `index` active or inactive
    fn set_slide_active(&mut self, index: usize, active: bool);

    /// Marks the indicator at `index` active or inactive
    fn set_indicator_active(&mut self, index: usize, active: bool);

    /// Replaces the glyph displayed by the play/pause control
    fn set_play_glyph(&mut self, glyph: PlayGlyph);
}

/// Source of repeating timers.
///
/// Firings are delivered back to the controller by the host on the same
/// thread that handles input, so a tick can never interleave with a
/// transition in progress.
pub trait Scheduler {
    /// Arms a timer that fires every `period_ms` until cancelled
    fn arm_repeating(&mut self, period_ms: u64) -> TimerHandle;

    /// Cancels a timer. Cancelling an unknown or already cancelled handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

impl<V: SlideView + ?Sized> SlideView for &mut V {
    fn set_slide_active(&mut self, index: usize, active: bool) {
        (**self).set_slide_active(index, active);
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        (**self).set_indicator_active(index, active);
    }

    fn set_play_glyph(&mut self, glyph: PlayGlyph) {
        (**self).set_play_glyph(glyph);
    }
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn arm_repeating(&mut self, period_ms: u64) -> TimerHandle {
        (**self).arm_repeating(period_ms)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        (**self).cancel(handle);
    }
}
