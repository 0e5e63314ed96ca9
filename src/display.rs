//! Helpers for cursor-addressed character displays.

use crate::format::{Decoration, ValueFormat, write_value};
use core::fmt::Write;

/// Trait for abstracting a character display (HD44780-style LCD and the like).
///
/// Text is written through [`core::fmt::Write`] at the current cursor.
pub trait TextDisplay: Write {
    /// Moves the cursor to a column and row, both zero-based.
    fn set_cursor(&mut self, col: u8, row: u8);
}

/// Blank run written after a value so shorter values erase longer ones.
const CLEAR_TAIL: &str = "   ";

/// Writes `text` starting at the given position.
pub fn print_at<D: TextDisplay>(
    display: &mut D,
    text: &str,
    col: u8,
    row: u8,
) -> core::fmt::Result {
    display.set_cursor(col, row);
    display.write_str(text)
}

/// Writes `text` at the start of `line`.
pub fn change_line<D: TextDisplay>(display: &mut D, text: &str, line: u8) -> core::fmt::Result {
    print_at(display, text, 0, line)
}

/// Writes a formatted value at the given position, followed by blanks that
/// clear digits left over from a previous, wider value.
pub fn print_value_at<D: TextDisplay>(
    display: &mut D,
    value: u32,
    format: ValueFormat,
    decoration: Decoration,
    col: u8,
    row: u8,
) -> core::fmt::Result {
    display.set_cursor(col, row);
    write_value(display, value, format, decoration)?;
    display.write_str(CLEAR_TAIL)
}
