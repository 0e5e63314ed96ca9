//! Debounced digital input with edge and level queries.
//!
//! Provides [`DebouncedInput`], which turns a bouncing mechanical contact into
//! discrete press events (time-window filtered) and an undebounced held level.

use crate::io::DigitalInput;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{InputConfig, InputMode};

/// A single push button or toggle switch sampled by polling.
///
/// The input compares each sample against the level captured by
/// [`initialize`](Self::initialize), so both pull-up and pull-down wiring
/// work without configuration.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Input line implementation type
/// * `T` - Time source implementation type
///
/// # Known limitations
/// Queries made before `initialize` compare against a rest level of low.
/// The result is unspecified but never panics.
pub struct DebouncedInput<'t, I: TimeInstant, P: DigitalInput, T: TimeSource<I>> {
    pin: P,
    time_source: &'t T,
    mode: InputMode,
    debounce_window: I::Duration,
    rest_level: bool,
    last_accepted: Option<I>,
}

impl<'t, I: TimeInstant, P: DigitalInput, T: TimeSource<I>> DebouncedInput<'t, I, P, T> {
    /// Creates an input with the default 500 ms debounce window.
    ///
    /// Does not touch the hardware; call [`initialize`](Self::initialize)
    /// once the pin is ready.
    pub fn new(pin: P, time_source: &'t T, mode: InputMode) -> Self {
        Self::with_config(pin, time_source, InputConfig::default().with_mode(mode))
    }

    /// Creates an input from a full configuration.
    pub fn with_config(pin: P, time_source: &'t T, config: InputConfig<I::Duration>) -> Self {
        Self {
            pin,
            time_source,
            mode: config.mode,
            debounce_window: config.debounce_window,
            rest_level: false,
            last_accepted: None,
        }
    }

    /// Configures the line for reading and records its current level as the
    /// rest level.
    ///
    /// Must be called exactly once, while the button is not actuated, before
    /// any query.
    pub fn initialize(&mut self) {
        self.pin.configure_as_input();
        self.rest_level = self.pin.read_level();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "input initialized: mode={}, rest_level={}",
            self.mode,
            self.rest_level
        );
    }

    /// Replaces the debounce window. A zero window disables debouncing.
    pub fn set_debounce_window(&mut self, debounce_window: I::Duration) {
        self.debounce_window = debounce_window;
    }

    /// Returns the current debounce window.
    pub fn debounce_window(&self) -> I::Duration {
        self.debounce_window
    }

    /// Returns the press semantics chosen at construction.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Returns the level captured by `initialize`.
    pub fn rest_level(&self) -> bool {
        self.rest_level
    }

    /// Returns true if a press event is reported for this poll.
    ///
    /// In `Momentary` mode a press is accepted only if the input is actuated
    /// and more than the debounce window has passed since the last accepted
    /// press. At most one press is accepted per window, so a button held
    /// down repeats once per window.
    ///
    /// In `Toggle` mode this is the raw actuation level.
    pub fn pressed(&mut self) -> bool {
        let actuated = self.sample();

        match self.mode {
            InputMode::Toggle => actuated,
            InputMode::Momentary => {
                if !actuated {
                    return false;
                }

                let now = self.time_source.now();
                let window_elapsed = match self.last_accepted {
                    None => true,
                    Some(last) => {
                        now.duration_since(last).as_millis() > self.debounce_window.as_millis()
                    }
                };

                if window_elapsed {
                    self.last_accepted = Some(now);

                    #[cfg(feature = "defmt")]
                    defmt::trace!("press accepted");
                }

                window_elapsed
            }
        }
    }

    /// Returns true while the input is actuated. Not debounced.
    pub fn held(&mut self) -> bool {
        self.sample()
    }

    /// Updates a caller-owned flag from this input.
    ///
    /// In `Toggle` mode the flag is set to the actuation level. In
    /// `Momentary` mode the flag is inverted once per accepted press.
    pub fn toggle_when_pressed(&mut self, flag: &mut bool) {
        match self.mode {
            InputMode::Toggle => *flag = self.sample(),
            InputMode::Momentary => {
                if self.pressed() {
                    *flag = !*flag;
                }
            }
        }
    }

    fn sample(&mut self) -> bool {
        self.pin.read_level() != self.rest_level
    }
}
