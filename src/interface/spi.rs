//! Frame transfer engine built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::{Operation, SpiDevice};

use super::Cyttsp4Interface;
use crate::error::FrameError;
use crate::frame::{
    Access, HeaderByte, MAX_FRAME_LEN, MAX_REG, RD_HEADER_LEN, SYNC_ACK, SYNC_BYTE, WR_HEADER_LEN,
};

/// SPI-based frame transfer engine for the TrueTouch transport.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Builds the two-byte write header for a register address.
    fn write_header(addr: u16) -> [u8; WR_HEADER_LEN] {
        let header = HeaderByte::new().with_addr_extend(addr > 255);
        [header.into(), (addr % 256) as u8]
    }

    /// Builds the single-byte read header. The address is not encoded; a
    /// read clocks out whatever the preceding write positioned.
    fn read_header() -> [u8; RD_HEADER_LEN] {
        [HeaderByte::new().with_read(true).into()]
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Cyttsp4Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    fn transfer(
        &mut self,
        addr: u16,
        access: Access<'_>,
    ) -> core::result::Result<(), FrameError> {
        debug_assert!(addr < MAX_REG);

        if access.payload_len() + access.header_len() > MAX_FRAME_LEN {
            return Err(FrameError::FrameTooLarge);
        }

        // Received header bytes start zeroed so a silent bus never fakes an
        // acknowledgement.
        let mut rx_header = [0u8; WR_HEADER_LEN];

        let bus_status = match access {
            Access::Write(data) => {
                let tx_header = Self::write_header(addr);

                match data {
                    Some(data) => self.spi.transaction(&mut [
                        Operation::Transfer(&mut rx_header, &tx_header),
                        Operation::Write(data),
                    ]),
                    None => self
                        .spi
                        .transaction(&mut [Operation::Transfer(&mut rx_header, &tx_header)]),
                }
            }
            Access::Read(buf) => {
                let tx_header = Self::read_header();

                self.spi.transaction(&mut [
                    Operation::Transfer(&mut rx_header[..RD_HEADER_LEN], &tx_header),
                    Operation::Read(buf),
                ])
            }
        };

        if bus_status.is_err() {
            // Usually a stale acknowledgement sequence rather than a genuine
            // bus fault. The sync check below is authoritative either way.
            debug!("spi transaction fault at address {}", addr);
        }

        if rx_header[SYNC_BYTE] != SYNC_ACK {
            trace!(
                "sync nack at address {}: header byte {}",
                addr,
                rx_header[SYNC_BYTE]
            );
            return Err(FrameError::Nack);
        }

        Ok(())
    }
}
