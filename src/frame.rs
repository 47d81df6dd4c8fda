//! Frame vocabulary for the TrueTouch Gen4 SPI protocol.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

/// Write header length in bytes (direction byte plus low address byte).
pub const WR_HEADER_LEN: usize = 2;
/// Read header length in bytes.
pub const RD_HEADER_LEN: usize = 1;
/// Offset of the sync acknowledgement within the received header phase.
pub const SYNC_BYTE: usize = 0;
/// Marker byte the device echoes while a transaction is framed correctly.
pub const SYNC_ACK: u8 = 0x62;
/// Upper bound for header plus payload within a single frame.
pub const MAX_FRAME_LEN: usize = 3 * 256;
/// Number of addressable registers; the ninth address bit travels in the
/// header's extension flag.
pub const MAX_REG: u16 = 512;
/// The protocol is clocked as plain bytes over SPI mode 0.
pub const BITS_PER_WORD: u8 = 8;

/// Leading header byte selecting the frame direction.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderByte {
    // Direction flag (bit 0): 0 = write, 1 = read.
    pub read: bool,
    // Ninth address bit for registers at 0x100 and above (bit 1).
    // Only meaningful in write headers; reads rely on prior positioning.
    pub addr_extend: bool,
    #[skip]
    __: B6,
}

impl From<HeaderByte> for u8 {
    fn from(value: HeaderByte) -> Self {
        value.into_bytes()[0]
    }
}

impl From<u8> for HeaderByte {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

/// Direction of one frame exchange together with its payload phase.
#[derive(Debug)]
pub enum Access<'b> {
    /// Program registers starting at the addressed cursor. `None` sends a
    /// header-only frame that merely positions the cursor ahead of a read.
    Write(Option<&'b [u8]>),
    /// Clock payload bytes out of the device into the destination buffer.
    Read(&'b mut [u8]),
}

impl Access<'_> {
    /// Length of the payload phase in bytes.
    pub fn payload_len(&self) -> usize {
        match self {
            Self::Write(data) => data.map_or(0, <[u8]>::len),
            Self::Read(buf) => buf.len(),
        }
    }

    /// Length of the header phase for this direction.
    pub const fn header_len(&self) -> usize {
        match self {
            Self::Write(_) => WR_HEADER_LEN,
            Self::Read(_) => RD_HEADER_LEN,
        }
    }
}
