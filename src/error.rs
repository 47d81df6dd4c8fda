//! Error handling primitives for the TrueTouch SPI transport.

/// Crate-wide result type alias.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by the frame transfer engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Combined header and payload would exceed the protocol frame limit.
    FrameTooLarge,
    /// The device did not echo the sync acknowledgement byte. Expected and
    /// frequent while the bootloader is starting; callers retry at their
    /// own cadence.
    Nack,
}

/// Errors surfaced by block read/write operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Retryable transfer failure; the device has not started echoing sync
    /// acknowledgements for this exchange.
    Io,
    /// The cursor-positioning write ahead of a block read was rejected.
    AddressSetup(FrameError),
    /// A frame was rejected before any bus activity.
    Frame(FrameError),
}
