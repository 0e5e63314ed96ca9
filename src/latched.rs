//! Button with an attached output line.
//!
//! Provides [`LatchedOutput`], which owns a [`DebouncedInput`] and a
//! [`DigitalOutput`] (typically the LED inside or next to the button) and
//! tracks the output level locally so it never has to be read back.

use crate::input::DebouncedInput;
use crate::io::{DigitalInput, DigitalOutput};
use crate::time::{TimeInstant, TimeSource};
use crate::types::{InputConfig, InputMode};

/// A debounced input paired with an output line.
///
/// All input queries go through the owned [`DebouncedInput`]; this type adds
/// no debounce logic of its own. The output level is tracked in
/// `output_state`, which always matches the last level written.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Input line implementation type
/// * `O` - Output line implementation type
/// * `T` - Time source implementation type
pub struct LatchedOutput<'t, I, P, O, T>
where
    I: TimeInstant,
    P: DigitalInput,
    O: DigitalOutput,
    T: TimeSource<I>,
{
    input: DebouncedInput<'t, I, P, T>,
    output: O,
    output_state: bool,
}

impl<'t, I, P, O, T> LatchedOutput<'t, I, P, O, T>
where
    I: TimeInstant,
    P: DigitalInput,
    O: DigitalOutput,
    T: TimeSource<I>,
{
    /// Creates a latched output with the default 500 ms debounce window.
    ///
    /// Does not touch the hardware; call [`initialize`](Self::initialize).
    pub fn new(input_pin: P, output: O, time_source: &'t T, mode: InputMode) -> Self {
        Self {
            input: DebouncedInput::new(input_pin, time_source, mode),
            output,
            output_state: false,
        }
    }

    /// Creates a latched output from a full input configuration.
    pub fn with_config(
        input_pin: P,
        output: O,
        time_source: &'t T,
        config: InputConfig<I::Duration>,
    ) -> Self {
        Self {
            input: DebouncedInput::with_config(input_pin, time_source, config),
            output,
            output_state: false,
        }
    }

    /// Initializes the input, then configures the output and drives it low.
    pub fn initialize(&mut self) {
        self.input.initialize();
        self.output.configure_as_output();
        self.write(false);
    }

    /// Drives the output high.
    pub fn set_on(&mut self) {
        self.write(true);
    }

    /// Drives the output low.
    pub fn set_off(&mut self) {
        self.write(false);
    }

    /// Inverts the output, based on the tracked level.
    pub fn toggle(&mut self) {
        self.write(!self.output_state);
    }

    /// Returns the level last written to the output.
    pub fn is_on(&self) -> bool {
        self.output_state
    }

    /// Toggles the output on every accepted press. Returns whether a press
    /// was accepted during this poll.
    pub fn toggle_on_press(&mut self) -> bool {
        let pressed = self.input.pressed();
        if pressed {
            self.toggle();
        }
        pressed
    }

    /// Drives the output to the raw held level. Returns the new level.
    ///
    /// Only writes when the level changes.
    pub fn follow_held(&mut self) -> bool {
        let held = self.input.held();
        if held != self.output_state {
            self.write(held);
        }
        held
    }

    /// See [`DebouncedInput::pressed`].
    pub fn pressed(&mut self) -> bool {
        self.input.pressed()
    }

    /// See [`DebouncedInput::held`].
    pub fn held(&mut self) -> bool {
        self.input.held()
    }

    /// See [`DebouncedInput::toggle_when_pressed`].
    pub fn toggle_when_pressed(&mut self, flag: &mut bool) {
        self.input.toggle_when_pressed(flag);
    }

    /// See [`DebouncedInput::set_debounce_window`].
    pub fn set_debounce_window(&mut self, debounce_window: I::Duration) {
        self.input.set_debounce_window(debounce_window);
    }

    /// Returns the owned input.
    pub fn input(&self) -> &DebouncedInput<'t, I, P, T> {
        &self.input
    }

    /// Returns the owned input mutably.
    pub fn input_mut(&mut self) -> &mut DebouncedInput<'t, I, P, T> {
        &mut self.input
    }

    fn write(&mut self, high: bool) {
        self.output.write_level(high);
        self.output_state = high;

        #[cfg(feature = "defmt")]
        defmt::trace!("output set {}", high);
    }
}
