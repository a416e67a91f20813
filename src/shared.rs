use crate::DigitDisplay;
use crate::driver::{SegmentDriver, SegmentError, SegmentPins};
use crate::font::Digit;
use crate::mutex::PortMutex;
use core::marker::PhantomData;
use embedded_hal::digital::OutputPin;

/// High-level wrapper: one digit driver behind a PortMutex (e.g. RefCell).
pub struct SharedDisplay<M, P>
where
    M: PortMutex<Port = SegmentDriver<P>>,
    P: OutputPin,
{
    driver: M,
    _pins: PhantomData<P>,
}

impl<M, P> SharedDisplay<M, P>
where
    M: PortMutex<Port = SegmentDriver<P>>,
    P: OutputPin,
{
    /// Configure the lines and wrap the driver in a PortMutex.
    pub fn new(pins: SegmentPins<P>) -> Result<Self, SegmentError> {
        let driver = SegmentDriver::new(pins)?;
        Ok(Self {
            driver: M::create(driver),
            _pins: PhantomData,
        })
    }

    /// A handle driving this display. Any number may be alive at once.
    pub fn handle(&self) -> Handle<'_, M, P> {
        Handle {
            driver: &self.driver,
            _pins: PhantomData,
        }
    }

    pub fn digit(&self) -> Option<Digit> {
        self.driver.lock(|drv| drv.digit())
    }

    pub fn decimal_point(&self) -> bool {
        self.driver.lock(|drv| drv.decimal_point())
    }

    pub fn into_inner(self) -> SegmentDriver<P> {
        self.driver.into_inner()
    }
}

/// A proxy implementing [`DigitDisplay`] by locking the shared driver for
/// each operation.
pub struct Handle<'a, M, P>
where
    M: PortMutex<Port = SegmentDriver<P>> + 'a,
    P: OutputPin + 'a,
{
    driver: &'a M,
    _pins: PhantomData<P>,
}

impl<'a, M, P> Clone for Handle<'a, M, P>
where
    M: PortMutex<Port = SegmentDriver<P>>,
    P: OutputPin,
{
    fn clone(&self) -> Self {
        Self {
            driver: self.driver,
            _pins: PhantomData,
        }
    }
}

impl<'a, M, P> DigitDisplay for Handle<'a, M, P>
where
    M: PortMutex<Port = SegmentDriver<P>>,
    P: OutputPin,
{
    type Error = SegmentError;

    fn render(&mut self, value: u8) -> Result<(), Self::Error> {
        self.driver.lock(|drv| drv.render(value))
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.driver.lock(|drv| drv.clear())
    }

    fn increment(&mut self) -> Result<(), Self::Error> {
        self.driver.lock(|drv| drv.increment())
    }

    fn decrement(&mut self) -> Result<(), Self::Error> {
        self.driver.lock(|drv| drv.decrement())
    }
}
