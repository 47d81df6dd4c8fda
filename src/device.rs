//! Block access layer for TrueTouch Gen4 devices.

use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::spi::SpiDevice;

use crate::error::{Error, FrameError, Result};
use crate::frame::Access;
use crate::interface::Cyttsp4Interface;
use crate::interface::spi::SpiInterface;
use crate::power::PowerLifecycle;
use crate::registry::BlockAdapter;

/// Handle to one attached TrueTouch device.
///
/// Block operations on a handle are serialized by an internal lock, so a
/// handle can be shared between contexts; at most one frame transfer is in
/// flight per handle. The power collaborator is notified around every
/// operation without ever being waited on.
pub struct Cyttsp4<IFACE, PWR = ()> {
    interface: Mutex<RefCell<IFACE>>,
    power: PWR,
}

impl<IFACE> Cyttsp4<IFACE> {
    // ==================================================================
    // == Handle Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new handle from the provided bus interface.
    pub fn new(interface: IFACE) -> Self {
        Self::with_power(interface, ())
    }
}

impl<IFACE, PWR> Cyttsp4<IFACE, PWR> {
    /// Creates a new handle with a power lifecycle collaborator.
    pub fn with_power(interface: IFACE, power: PWR) -> Self {
        Self {
            interface: Mutex::new(RefCell::new(interface)),
            power,
        }
    }

    /// Consumes the handle and returns the owned interface and power
    /// collaborator.
    pub fn release(self) -> (IFACE, PWR) {
        (self.interface.into_inner().into_inner(), self.power)
    }
}

impl<SPI, PWR> Cyttsp4<SpiInterface<SPI>, PWR>
where
    SPI: SpiDevice,
{
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI, power: PWR) -> Self {
        Self::with_power(SpiInterface::new(spi), power)
    }
}

impl<IFACE, PWR> Cyttsp4<IFACE, PWR>
where
    IFACE: Cyttsp4Interface,
    PWR: PowerLifecycle,
{
    // ==================================================================
    // == Block Access ==================================================
    // ==================================================================
    /// Reads `buf.len()` bytes starting at register `addr`.
    ///
    /// Issues a header-only write positioning the device's register cursor,
    /// then the data read, both under a single lock acquisition so no other
    /// operation can interleave between the two frames.
    pub fn read(&self, addr: u16, buf: &mut [u8]) -> Result<()> {
        self.power.mark_active();
        let result = critical_section::with(|cs| {
            let mut interface = self.interface.borrow_ref_mut(cs);
            Self::read_locked(&mut interface, addr, buf)
        });
        self.power.mark_idle();
        result
    }

    /// Writes `data` to registers starting at `addr`.
    pub fn write(&self, addr: u16, data: &[u8]) -> Result<()> {
        self.power.mark_active();
        let result = critical_section::with(|cs| {
            let mut interface = self.interface.borrow_ref_mut(cs);
            match interface.transfer(addr, Access::Write(Some(data))) {
                Ok(()) => Ok(()),
                // Normal while the bootloader starts up; the caller retries
                // until sync acknowledgements appear.
                Err(FrameError::Nack) => Err(Error::Io),
                Err(e) => {
                    error!("block write of {} bytes at address {} rejected", data.len(), addr);
                    Err(Error::Frame(e))
                }
            }
        });
        self.power.mark_idle();
        result
    }

    fn read_locked(interface: &mut IFACE, addr: u16, buf: &mut [u8]) -> Result<()> {
        match interface.transfer(addr, Access::Write(None)) {
            // A nack during positioning resolves in the data phase below
            // once the device starts echoing sync bytes again.
            Ok(()) | Err(FrameError::Nack) => {}
            Err(e) => {
                error!("failed to set register address {}", addr);
                return Err(Error::AddressSetup(e));
            }
        }

        match interface.transfer(addr, Access::Read(buf)) {
            Ok(()) => Ok(()),
            // Normal while the bootloader starts up; keep retries quiet.
            Err(FrameError::Nack) => Err(Error::Io),
            Err(e) => {
                error!("block read of {} bytes at address {} rejected", buf.len(), addr);
                Err(Error::Frame(e))
            }
        }
    }
}

impl<IFACE, PWR> BlockAdapter for Cyttsp4<IFACE, PWR>
where
    IFACE: Cyttsp4Interface,
    PWR: PowerLifecycle,
{
    fn read(&self, addr: u16, buf: &mut [u8]) -> Result<()> {
        Cyttsp4::read(self, addr, buf)
    }

    fn write(&self, addr: u16, data: &[u8]) -> Result<()> {
        Cyttsp4::write(self, addr, data)
    }
}
