//! Module entry points and the driver's registration record.

use runpm_core::kdebug;
use runpm_driver_api::{DriverError, DriverInfo, DriverRegistry, PciDeviceId, PciDriverEntry};

use crate::config::StubConfig;
use crate::supervisor::Supervisor;

/// Name the driver registers under.
pub const DRIVER_NAME: &str = "pci_stub_runpm";

/// Module metadata.
pub const DRIVER_INFO: DriverInfo = DriverInfo {
    name: DRIVER_NAME,
    description: "Module for debugging runpm issues",
    author: env!("CARGO_PKG_AUTHORS"),
    license: env!("CARGO_PKG_LICENSE"),
    version: env!("CARGO_PKG_VERSION"),
};

/// Every NVIDIA display controller, whatever its subclass.
pub static ID_TABLE: [PciDeviceId; 1] = [StubConfig::DEFAULT.device_id()];

static SUPERVISOR: Supervisor = Supervisor::new(StubConfig::DEFAULT);

static DRIVER: PciDriverEntry = PciDriverEntry {
    info: DRIVER_INFO,
    id_table: &ID_TABLE,
    driver: &SUPERVISOR,
};

/// The record handed to the registry.
#[must_use]
pub fn driver_entry() -> &'static PciDriverEntry {
    &DRIVER
}

/// Registers the driver; matching devices are probed by the registry.
///
/// # Errors
///
/// Whatever the registry refuses the registration with.
pub fn module_init(registry: &mut dyn DriverRegistry) -> Result<(), DriverError> {
    registry.register_pci_driver(&DRIVER)?;
    kdebug!("{}: registered", DRIVER_NAME);
    Ok(())
}

/// Unregisters the driver, detaching every device bound to it.
pub fn module_exit(registry: &mut dyn DriverRegistry) {
    registry.unregister_pci_driver(&DRIVER);
    kdebug!("{}: unregistered", DRIVER_NAME);
}
