#![no_std]
//! Driver for a single seven-segment digit with decimal point, wired to eight
//! active-low output lines.
//!
//! ```ignore
//! let pins = SegmentPins { a, b, c, d, e, f, g, dp };
//! let mut digit = SegmentDriver::new(pins)?;
//! digit.render(9)?;
//! digit.increment()?; // shows 0
//! digit.render(b'.')?; // decimal point on
//! ```
//!
//! # Features
//!
//! - `critical-section` - `PortMutex` for `critical_section::Mutex<RefCell<_>>`
//! - `defmt` - `defmt::Format` for public types and trace logging

pub mod driver;
pub mod font;
pub mod mutex;
pub mod shared;

pub use driver::{SegmentDriver, SegmentError, SegmentPins};
pub use font::{Command, Digit, NUMERALS, Role};
pub use shared::{Handle, SharedDisplay};

use embedded_hal::digital::Error as HalError;

/// A single digit that can show 0..9, toggle its decimal point and step
/// through the digits with wraparound.
pub trait DigitDisplay {
    type Error: HalError;

    /// Show a digit (`0..=9`) or switch the decimal point (`b'.'` on,
    /// `b' '` off). Other values are ignored.
    fn render(&mut self, value: u8) -> Result<(), Self::Error>;

    /// Switch every line off, keeping the current digit.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Show the next digit, 9 wraps to 0.
    fn increment(&mut self) -> Result<(), Self::Error>;

    /// Show the previous digit, 0 wraps to 9.
    fn decrement(&mut self) -> Result<(), Self::Error>;
}
