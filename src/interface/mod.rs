//! Bus interface abstraction for the TrueTouch SPI transport.

pub mod spi;

use crate::error::FrameError;
use crate::frame::Access;

/// Abstraction over the frame transfer engine used by the block access
/// layer.
pub trait Cyttsp4Interface {
    /// Performs one header-framed bus exchange.
    ///
    /// The header and (optional) payload phases are issued as a single
    /// atomic bus transaction; the device's sync acknowledgement is only
    /// valid within one continuous chip-select assertion.
    fn transfer(
        &mut self,
        addr: u16,
        access: Access<'_>,
    ) -> core::result::Result<(), FrameError>;
}
