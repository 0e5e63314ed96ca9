#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DebouncedInput`**: A polled push button or toggle switch with debounced press events
//!   and an undebounced held level
//! - **`LatchedOutput`**: A `DebouncedInput` that owns an output line (e.g. the button's LED)
//!   and tracks its level locally
//! - **`InputMode`**: `Momentary` (time-window debounced presses) or `Toggle` (raw level)
//! - **`InputConfig`**: Mode and debounce window, with a 500 ms default
//! - **`DigitalInput`** / **`DigitalOutput`**: Traits to implement for your GPIO lines
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`ValueFormat`** / **`Decoration`**: Formatting strategies for showing values on a
//!   character display
//!
//! Everything is poll-driven: call `pressed()`/`held()` once per main-loop iteration. Nothing
//! allocates and nothing blocks.

pub mod time;
pub mod io;
pub mod types;
pub mod input;
pub mod latched;
pub mod format;
pub mod display;

pub use input::DebouncedInput;
pub use latched::LatchedOutput;
pub use types::{DEFAULT_DEBOUNCE_MS, InputConfig, InputMode};
pub use io::{DigitalInput, DigitalOutput};
#[cfg(feature = "embedded-hal")]
pub use io::{HalInput, HalOutput};
pub use time::{Millis, MillisDuration, TimeDuration, TimeInstant, TimeSource};
pub use format::{Decoration, FormatError, ValueFormat, format_value, millis_to_seconds, write_value};
pub use display::{TextDisplay, change_line, print_at, print_value_at};
