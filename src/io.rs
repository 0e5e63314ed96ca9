//! Digital I/O line abstractions.
//!
//! [`DigitalInput`] and [`DigitalOutput`] are the only way this crate touches
//! hardware. Implement them for your GPIO pins, or enable the `embedded-hal`
//! feature and wrap any `embedded_hal::digital` pin in [`HalInput`] /
//! [`HalOutput`].

/// Trait for abstracting a digital input line (button, switch).
pub trait DigitalInput {
    /// Prepares the line for reading (direction, pull resistors).
    ///
    /// Called exactly once, before the first `read_level`.
    fn configure_as_input(&mut self);

    /// Samples the electrical level of the line. `true` is high.
    ///
    /// Must not have side effects. Handle any hardware errors internally -
    /// this method cannot fail.
    fn read_level(&mut self) -> bool;
}

/// Trait for abstracting a digital output line (LED).
pub trait DigitalOutput {
    /// Prepares the line for writing.
    ///
    /// Called exactly once, before the first `write_level`.
    fn configure_as_output(&mut self);

    /// Drives the line to the given level. `true` is high.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn write_level(&mut self, high: bool);
}

#[cfg(feature = "embedded-hal")]
pub use hal::{HalInput, HalOutput};

#[cfg(feature = "embedded-hal")]
mod hal {
    use super::{DigitalInput, DigitalOutput};
    use embedded_hal::digital::{InputPin, OutputPin};

    /// Adapter from an `embedded_hal::digital::InputPin`.
    ///
    /// The HAL's type-state already fixed the pin direction, so configuration
    /// is a no-op. A failed read repeats the last successfully read level
    /// (low if no read has succeeded yet), so an error never looks like an
    /// edge.
    pub struct HalInput<P> {
        pin: P,
        last_level: bool,
    }

    impl<P: InputPin> HalInput<P> {
        /// Wraps an already-configured input pin.
        pub fn new(pin: P) -> Self {
            Self {
                pin,
                last_level: false,
            }
        }

        /// Returns the wrapped pin.
        pub fn into_inner(self) -> P {
            self.pin
        }
    }

    impl<P: InputPin> DigitalInput for HalInput<P> {
        fn configure_as_input(&mut self) {}

        fn read_level(&mut self) -> bool {
            if let Ok(level) = self.pin.is_high() {
                self.last_level = level;
            }
            self.last_level
        }
    }

    /// Adapter from an `embedded_hal::digital::OutputPin`.
    ///
    /// Write errors are dropped.
    pub struct HalOutput<P> {
        pin: P,
    }

    impl<P: OutputPin> HalOutput<P> {
        /// Wraps an already-configured output pin.
        pub fn new(pin: P) -> Self {
            Self { pin }
        }

        /// Returns the wrapped pin.
        pub fn into_inner(self) -> P {
            self.pin
        }
    }

    impl<P: OutputPin> DigitalOutput for HalOutput<P> {
        fn configure_as_output(&mut self) {}

        fn write_level(&mut self, high: bool) {
            let _ = if high {
                self.pin.set_high()
            } else {
                self.pin.set_low()
            };
        }
    }
}
