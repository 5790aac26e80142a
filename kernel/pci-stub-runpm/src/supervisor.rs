//! Runtime PM supervisor callbacks.
//!
//! The supervisor keeps no per-device state: everything it touches lives
//! behind the borrowed [`PciDevice`], so callbacks for different devices
//! never share anything but the immutable [`StubConfig`].

use runpm_core::{kerr, kinfo, ktrace};
use runpm_driver_api::{DriverError, PciDevice, PciDeviceId, PciDriver};

use crate::config::StubConfig;

/// Drives a device through attach, runtime suspend/resume and detach,
/// logging its runtime PM usage count along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Supervisor {
    config: StubConfig,
}

impl Supervisor {
    /// Creates a supervisor applying `config`.
    #[must_use]
    pub const fn new(config: StubConfig) -> Self {
        Self { config }
    }

    /// Policy in effect.
    #[must_use]
    pub const fn config(&self) -> &StubConfig {
        &self.config
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new(StubConfig::DEFAULT)
    }
}

fn log_usage_count(dev: &dyn PciDevice) {
    kinfo!("dev->pm.usage_count: {}", dev.usage_count());
}

impl PciDriver for Supervisor {
    /// Forces the device's runtime PM status back to active, hands the
    /// framework's probe reference back, then enables the device.
    ///
    /// Nothing done before a failed enable is undone.
    fn probe(&self, dev: &mut dyn PciDevice, _id: &PciDeviceId) -> Result<(), DriverError> {
        dev.ignore_hotplug();
        dev.configure_autosuspend(self.config.autosuspend_delay);
        // Overwrites whatever status a broken transition left behind.
        dev.set_active();
        dev.allow();
        dev.mark_last_busy();
        dev.put();
        log_usage_count(dev);

        dev.enable_device().map_err(DriverError::EnableFailed)?;

        let bar = self.config.primary_bar;
        let region = dev.resource(bar);
        ktrace!("{}: BAR{} {}", dev.info().address, bar, region);

        dev.set_master();
        Ok(())
    }

    fn remove(&self, dev: &mut dyn PciDevice) {
        dev.disable_device();
        log_usage_count(dev);
    }

    fn runtime_suspend(&self, dev: &mut dyn PciDevice) -> Result<(), DriverError> {
        dev.disable_device();
        Ok(())
    }

    /// Re-enables the device, refusing to touch it unless it is in D0.
    fn runtime_resume(&self, dev: &mut dyn PciDevice) -> Result<(), DriverError> {
        if !dev.current_state().is_d0() {
            kerr!("device not in D0 state. Aborting resume!");
            return Err(DriverError::InvalidPowerState);
        }

        dev.enable_device().map_err(DriverError::EnableFailed)?;
        dev.set_master();
        Ok(())
    }
}
