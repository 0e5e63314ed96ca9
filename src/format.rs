//! Value formatting for small character displays.
//!
//! A closed set of strategies ([`ValueFormat`]) and decorations
//! ([`Decoration`]). Output goes to any [`core::fmt::Write`] sink passed in by
//! the caller, or into a fixed-capacity [`heapless::String`].

use core::fmt::Write;
use heapless::String;

/// How a numeric value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValueFormat {
    /// Decimal number, e.g. `42`.
    #[default]
    Plain,

    /// Decimal number with a percent sign, e.g. `42%`.
    Percent,

    /// Seconds as minutes and zero-padded seconds, e.g. `356` -> `5:56`.
    MinutesSeconds,
}

/// Marker drawn around a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decoration {
    /// Value only.
    #[default]
    Unselected,

    /// Value wrapped in angle brackets, e.g. `<42%>`, to show that it is
    /// being edited.
    Selected,
}

/// Formatting errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Output does not fit in the destination buffer.
    CapacityExceeded,
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::CapacityExceeded => {
                write!(f, "formatted value exceeds buffer capacity")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

impl From<core::fmt::Error> for FormatError {
    fn from(_: core::fmt::Error) -> Self {
        FormatError::CapacityExceeded
    }
}

/// Writes `value` using the given format and decoration.
pub fn write_value<W: Write>(
    sink: &mut W,
    value: u32,
    format: ValueFormat,
    decoration: Decoration,
) -> core::fmt::Result {
    if decoration == Decoration::Selected {
        sink.write_char('<')?;
    }

    match format {
        ValueFormat::Plain => write!(sink, "{}", value)?,
        ValueFormat::Percent => write!(sink, "{}%", value)?,
        ValueFormat::MinutesSeconds => write!(sink, "{}:{:02}", value / 60, value % 60)?,
    }

    if decoration == Decoration::Selected {
        sink.write_char('>')?;
    }

    Ok(())
}

/// Formats `value` into a string of capacity `N`.
pub fn format_value<const N: usize>(
    value: u32,
    format: ValueFormat,
    decoration: Decoration,
) -> Result<String<N>, FormatError> {
    let mut out = String::new();
    write_value(&mut out, value, format, decoration)?;
    Ok(out)
}

/// Renders a millisecond count as seconds with `decimals` truncated
/// fractional digits, e.g. `(1532, 2)` -> `1.53`.
///
/// `decimals` is capped at 3; zero omits the decimal point.
pub fn millis_to_seconds<const N: usize>(
    millis: u32,
    decimals: u8,
) -> Result<String<N>, FormatError> {
    let decimals = decimals.min(3);
    let mut out = String::new();

    write!(out, "{}", millis / 1000)?;
    if decimals > 0 {
        let fraction = (millis % 1000) / 10u32.pow(3 - decimals as u32);
        write!(out, ".{:0width$}", fraction, width = decimals as usize)?;
    }

    Ok(out)
}
