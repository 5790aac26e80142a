//! Per-device primitives a host framework hands to PCI drivers.
//!
//! A driver never owns a device. The framework passes `&mut dyn PciDevice`
//! into each callback and takes it back when the callback returns, so the
//! exclusive borrow is the only synchronisation a driver needs.

use core::time::Duration;

use runpm_core::Errno;

use crate::pci::{PciDeviceInfo, PciResource};
use crate::power::PowerState;

/// Runtime power-management accounting for one device.
///
/// These calls only adjust the framework's bookkeeping; the framework's
/// own machinery decides when to actually suspend or resume.
pub trait RuntimePm {
    /// Enables delayed auto-suspend, waiting `delay` after the last use.
    fn configure_autosuspend(&mut self, delay: Duration);

    /// Records the device as runtime-active, overwriting whatever status
    /// (including a latched error) was recorded before.
    fn set_active(&mut self);

    /// Lets runtime PM act on the device, undoing an earlier forbid.
    fn allow(&mut self);

    /// Stamps the last-busy time used by the autosuspend timer.
    fn mark_last_busy(&mut self);

    /// Drops one usage reference.
    fn put(&mut self);

    /// Current usage reference count.
    fn usage_count(&self) -> u32;
}

/// A PCI function as seen by its bound driver.
pub trait PciDevice: RuntimePm {
    /// Identification and BARs captured at enumeration.
    fn info(&self) -> &PciDeviceInfo;

    /// Powers the function up and turns on I/O and memory decoding.
    ///
    /// # Errors
    ///
    /// Returns the platform's error number if the function could not be
    /// enabled.
    fn enable_device(&mut self) -> Result<(), Errno>;

    /// Inverse of [`enable_device`](Self::enable_device). Best-effort.
    fn disable_device(&mut self);

    /// Sets the Bus Master bit in the Command register.
    fn set_master(&mut self);

    /// Power state last recorded for the function.
    fn current_state(&self) -> PowerState;

    /// Asks the framework not to tear the device down on hotplug events.
    fn ignore_hotplug(&mut self);

    /// Bounds of resource region `bar`.
    ///
    /// Indices past the last BAR yield [`PciResource::EMPTY`].
    fn resource(&self, bar: usize) -> PciResource {
        self.info()
            .bars
            .get(bar)
            .map_or(PciResource::EMPTY, |b| b.resource())
    }
}
