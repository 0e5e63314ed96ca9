//! Core types for input configuration.

use crate::time::TimeDuration;

/// Default debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// How an input's actuation is turned into press events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputMode {
    /// Push button. Accepted presses are separated by more than the
    /// debounce window.
    #[default]
    Momentary,

    /// Latching switch. Every poll that reads actuated counts as a press;
    /// the debounce window is ignored.
    Toggle,
}

/// Construction-time configuration of a debounced input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig<D: TimeDuration> {
    /// Press semantics.
    pub mode: InputMode,

    /// Minimum time between two accepted presses in `Momentary` mode.
    pub debounce_window: D,
}

impl<D: TimeDuration> InputConfig<D> {
    /// Creates a configuration.
    #[inline]
    pub fn new(mode: InputMode, debounce_window: D) -> Self {
        Self {
            mode,
            debounce_window,
        }
    }

    /// Replaces the mode.
    pub fn with_mode(mut self, mode: InputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the debounce window.
    pub fn with_debounce_window(mut self, debounce_window: D) -> Self {
        self.debounce_window = debounce_window;
        self
    }
}

impl<D: TimeDuration> Default for InputConfig<D> {
    fn default() -> Self {
        Self {
            mode: InputMode::Momentary,
            debounce_window: D::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}
