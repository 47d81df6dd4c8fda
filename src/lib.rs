#![no_std]

#[macro_use]
mod log;

mod error;

pub mod device;
pub mod frame;
pub mod interface;
pub mod power;
pub mod registry;

pub use crate::device::Cyttsp4;
pub use crate::error::{Error, FrameError, Result};
pub use crate::registry::{AdapterRegistry, BlockAdapter, RegistryError};
