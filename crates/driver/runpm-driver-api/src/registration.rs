//! Driver registration records.
//!
//! A driver module builds one [`PciDriverEntry`] as a `static` and hands it
//! to the host's [`DriverRegistry`] at load time. The registry owns device
//! discovery and decides when to call into the entry's driver.

use crate::category::PciDriver;
use crate::driver::DriverInfo;
use crate::error::DriverError;
use crate::pci::{PciDeviceId, PciDeviceInfo};

/// Binds a driver's metadata and ID table to its callbacks.
pub struct PciDriverEntry {
    /// Module metadata; `info.name` identifies the entry in the registry.
    pub info: DriverInfo,
    /// Device IDs this driver supports.
    pub id_table: &'static [PciDeviceId],
    /// Callback set invoked for matched devices.
    pub driver: &'static dyn PciDriver,
}

impl PciDriverEntry {
    /// Driver name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.info.name
    }

    /// Returns the first ID-table row matching `info`, if any.
    #[must_use]
    pub fn match_device(&self, info: &PciDeviceInfo) -> Option<&'static PciDeviceId> {
        self.id_table.iter().find(|id| id.matches(info))
    }
}

impl core::fmt::Debug for PciDriverEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PciDriverEntry")
            .field("info", &self.info)
            .field("id_table", &self.id_table)
            .finish_non_exhaustive()
    }
}

/// The host framework's registry of PCI drivers.
pub trait DriverRegistry {
    /// Makes `entry` eligible for matching against present and future devices.
    ///
    /// # Errors
    ///
    /// Implementations reject entries they cannot accept, e.g. with
    /// [`DriverError::AlreadyRegistered`] for a duplicate name.
    fn register_pci_driver(&mut self, entry: &'static PciDriverEntry) -> Result<(), DriverError>;

    /// Unbinds `entry` from all its devices and forgets it.
    fn unregister_pci_driver(&mut self, entry: &'static PciDriverEntry);
}
