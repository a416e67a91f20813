//! Low-level driver that directly owns the eight segment lines and tracks state.

use embedded_hal::digital::{Error as HalError, ErrorKind, OutputPin};

use crate::DigitDisplay;
use crate::font::{Command, Digit, Role};

/// Possible errors from the segment driver.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SegmentError {
    /// Underlying pin error from the HAL pin.
    PinError,
}

impl HalError for SegmentError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// The eight output lines of one digit, named by the segment they drive.
///
/// All lines are active low: driving a line low lights its segment.
pub struct SegmentPins<P> {
    pub a: P,
    pub b: P,
    pub c: P,
    pub d: P,
    pub e: P,
    pub f: P,
    pub g: P,
    pub dp: P,
}

impl<P> SegmentPins<P> {
    fn into_table(self) -> [P; 8] {
        [
            self.dp, self.g, self.f, self.e, self.d, self.c, self.b, self.a,
        ]
    }

    fn from_table(table: [P; 8]) -> Self {
        let [dp, g, f, e, d, c, b, a] = table;
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            dp,
        }
    }
}

/// The driver for one seven-segment digit with a decimal point.
pub struct SegmentDriver<P>
where
    P: OutputPin,
{
    pub(crate) lines: [P; 8],
    pub(crate) digit: Option<Digit>,
    pub(crate) decimal_point: bool,
}

impl<P> SegmentDriver<P>
where
    P: OutputPin,
{
    /// Take ownership of the lines and switch every segment off (high).
    pub fn new(pins: SegmentPins<P>) -> Result<Self, SegmentError> {
        let mut drv = Self {
            lines: pins.into_table(),
            digit: None,
            decimal_point: false,
        };
        drv.clear()?;
        Ok(drv)
    }

    /// Digit last shown, `None` until one has been.
    pub fn digit(&self) -> Option<Digit> {
        self.digit
    }

    pub fn decimal_point(&self) -> bool {
        self.decimal_point
    }

    /// Decode a digit-or-command byte and apply it.
    ///
    /// `0..=9` show that digit, `b'.'` lights the decimal point and `b' '`
    /// darkens it. Any other value is ignored.
    pub fn render(&mut self, value: u8) -> Result<(), SegmentError> {
        match Command::from_byte(value) {
            Some(cmd) => self.apply(cmd),
            None => Ok(()),
        }
    }

    pub fn apply(&mut self, cmd: Command) -> Result<(), SegmentError> {
        match cmd {
            Command::Show(digit) => self.show(digit),
            Command::DecimalPointOn => self.set_decimal_point(true),
            Command::DecimalPointOff => self.set_decimal_point(false),
        }
    }

    /// Drive the seven segments for `digit`. The decimal point is untouched.
    pub fn show(&mut self, digit: Digit) -> Result<(), SegmentError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("7seg: show {=u8}", digit.value());

        for role in Role::SEGMENTS {
            self.drive(role, digit.lights(role))?;
        }
        self.digit = Some(digit);
        Ok(())
    }

    /// Switch all eight lines off. The tracked digit is kept.
    pub fn clear(&mut self) -> Result<(), SegmentError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("7seg: clear");

        for role in Role::ALL {
            self.drive(role, false)?;
        }
        self.decimal_point = false;
        Ok(())
    }

    /// Show the next digit, 9 wraps to 0.
    pub fn increment(&mut self) -> Result<(), SegmentError> {
        let next = match self.digit {
            Some(digit) => digit.wrapping_next(),
            None => Digit::ZERO,
        };
        self.show(next)
    }

    /// Show the previous digit, 0 wraps to 9.
    pub fn decrement(&mut self) -> Result<(), SegmentError> {
        let prev = match self.digit {
            Some(digit) => digit.wrapping_prev(),
            None => Digit::NINE,
        };
        self.show(prev)
    }

    /// Give the lines back, as they were last driven.
    pub fn release(self) -> SegmentPins<P> {
        SegmentPins::from_table(self.lines)
    }

    fn set_decimal_point(&mut self, on: bool) -> Result<(), SegmentError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("7seg: decimal point {=bool}", on);

        self.drive(Role::DecimalPoint, on)?;
        self.decimal_point = on;
        Ok(())
    }

    // Lines are active low: a lit segment is driven low.
    fn drive(&mut self, role: Role, lit: bool) -> Result<(), SegmentError> {
        let line = &mut self.lines[role.index()];
        if lit {
            line.set_low().map_err(|_| SegmentError::PinError)
        } else {
            line.set_high().map_err(|_| SegmentError::PinError)
        }
    }
}

impl<P> DigitDisplay for SegmentDriver<P>
where
    P: OutputPin,
{
    type Error = SegmentError;

    fn render(&mut self, value: u8) -> Result<(), Self::Error> {
        SegmentDriver::render(self, value)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        SegmentDriver::clear(self)
    }

    fn increment(&mut self) -> Result<(), Self::Error> {
        SegmentDriver::increment(self)
    }

    fn decrement(&mut self) -> Result<(), Self::Error> {
        SegmentDriver::decrement(self)
    }
}
