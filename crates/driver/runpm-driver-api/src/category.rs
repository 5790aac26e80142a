//! Callback set of a PCI driver.

use crate::device::PciDevice;
use crate::error::DriverError;
use crate::pci::PciDeviceId;

/// Callbacks the framework invokes on a driver bound to a PCI function.
///
/// The framework guarantees, per device: `probe` happens-before every other
/// callback; `runtime_suspend` and `runtime_resume` never overlap; `remove`
/// happens-after everything else. Drivers receive the device only for the
/// duration of each call and must not retain it.
///
/// The runtime PM hooks default to `Err(DriverError::Unsupported)`, so
/// drivers override only what they handle.
pub trait PciDriver: Sync {
    /// Binds to `dev`, which matched table row `id`.
    ///
    /// # Errors
    ///
    /// Any error leaves the device unbound.
    fn probe(&self, dev: &mut dyn PciDevice, id: &PciDeviceId) -> Result<(), DriverError>;

    /// Unbinds from `dev`. Best-effort: there is nothing to report to.
    fn remove(&self, dev: &mut dyn PciDevice);

    /// Called when runtime PM decides the device is idle.
    ///
    /// # Errors
    ///
    /// An error keeps the device active.
    fn runtime_suspend(&self, dev: &mut dyn PciDevice) -> Result<(), DriverError> {
        let _ = dev;
        Err(DriverError::Unsupported)
    }

    /// Called to bring a runtime-suspended device back.
    ///
    /// # Errors
    ///
    /// An error leaves the device suspended.
    fn runtime_resume(&self, dev: &mut dyn PciDevice) -> Result<(), DriverError> {
        let _ = dev;
        Err(DriverError::Unsupported)
    }
}
