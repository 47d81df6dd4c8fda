//! Adapter registry binding device identifiers to block operations.

use heapless::Vec;

use crate::error::Result;

/// Adapter identifier used when the platform supplies none.
pub const DEFAULT_ADAPTER_ID: &str = "cyttsp4_spi_adapter";

/// Block-level operations exposed by an attached transport adapter.
pub trait BlockAdapter {
    /// Reads `buf.len()` bytes starting at register `addr`.
    fn read(&self, addr: u16, buf: &mut [u8]) -> Result<()>;

    /// Writes `data` to registers starting at `addr`.
    fn write(&self, addr: u16, data: &[u8]) -> Result<()>;
}

/// Errors produced while attaching or detaching adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// The registry already holds an adapter under this identifier.
    AlreadyAttached,
    /// No free slot remains for another adapter.
    Full,
    /// No adapter is attached under this identifier.
    NotAttached,
}

/// Fixed-capacity map from device identifiers to their block adapters.
///
/// Adapters transition between Attached and Detached here; the transport
/// handles themselves carry no lifecycle state.
pub struct AdapterRegistry<'a, const N: usize> {
    adapters: Vec<(&'a str, &'a dyn BlockAdapter), N>,
}

impl<'a, const N: usize> AdapterRegistry<'a, N> {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self { adapters: Vec::new() }
    }

    /// Attaches `adapter` under `id`.
    pub fn attach(
        &mut self,
        id: &'a str,
        adapter: &'a dyn BlockAdapter,
    ) -> core::result::Result<(), RegistryError> {
        if self.lookup(id).is_some() {
            return Err(RegistryError::AlreadyAttached);
        }

        self.adapters
            .push((id, adapter))
            .map_err(|_| RegistryError::Full)
    }

    /// Detaches the adapter registered under `id`.
    pub fn detach(&mut self, id: &str) -> core::result::Result<(), RegistryError> {
        let slot = self
            .adapters
            .iter()
            .position(|(name, _)| *name == id)
            .ok_or(RegistryError::NotAttached)?;

        self.adapters.swap_remove(slot);
        Ok(())
    }

    /// Returns the adapter registered under `id`, if any.
    pub fn lookup(&self, id: &str) -> Option<&'a dyn BlockAdapter> {
        self.adapters
            .iter()
            .find(|(name, _)| *name == id)
            .map(|(_, adapter)| *adapter)
    }

    /// Number of attached adapters.
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Whether no adapter is attached.
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl<const N: usize> Default for AdapterRegistry<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}
