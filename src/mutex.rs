//! Lock abstraction for sharing one display driver.
//!
//! `RefCell` covers a single execution context. With the `critical-section`
//! feature, `critical_section::Mutex<RefCell<_>>` can also be shared with
//! interrupt handlers.

use core::cell::RefCell;

/// Common interface for mutex-like wrappers around a display driver.
pub trait PortMutex {
    type Port;

    fn create(port: Self::Port) -> Self;

    /// Run `f` with exclusive access to the port.
    ///
    /// Calls must not be nested on the same mutex.
    fn lock<R, F: FnOnce(&mut Self::Port) -> R>(&self, f: F) -> R;

    fn into_inner(self) -> Self::Port;
}

impl<T> PortMutex for RefCell<T> {
    type Port = T;

    fn create(port: Self::Port) -> Self {
        RefCell::new(port)
    }

    fn lock<R, F: FnOnce(&mut Self::Port) -> R>(&self, f: F) -> R {
        let mut borrowed = self.borrow_mut();
        f(&mut borrowed)
    }

    fn into_inner(self) -> Self::Port {
        RefCell::into_inner(self)
    }
}

#[cfg(feature = "critical-section")]
impl<T> PortMutex for critical_section::Mutex<RefCell<T>> {
    type Port = T;

    fn create(port: Self::Port) -> Self {
        critical_section::Mutex::new(RefCell::new(port))
    }

    fn lock<R, F: FnOnce(&mut Self::Port) -> R>(&self, f: F) -> R {
        critical_section::with(|cs| {
            let mut borrowed = self.borrow_ref_mut(cs);
            f(&mut borrowed)
        })
    }

    fn into_inner(self) -> Self::Port {
        critical_section::Mutex::into_inner(self).into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bump<M: PortMutex<Port = u8>>(m: &M) -> u8 {
        m.lock(|n| {
            *n += 1;
            *n
        })
    }

    #[test]
    fn test_refcell_lock() {
        let m = <RefCell<u8> as PortMutex>::create(1);
        assert_eq!(bump(&m), 2);
        assert_eq!(bump(&m), 3);
        assert_eq!(PortMutex::into_inner(m), 3);
    }

    #[cfg(feature = "critical-section")]
    #[test]
    fn test_critical_section_lock() {
        let m = <critical_section::Mutex<RefCell<u8>> as PortMutex>::create(7);
        assert_eq!(bump(&m), 8);
        assert_eq!(PortMutex::into_inner(m), 8);
    }
}
