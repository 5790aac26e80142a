//! Compile-time policy for the stub.
//!
//! Every tunable lives here as a named constant; [`StubConfig`] bundles
//! them so a host (or a test) can build a [`Supervisor`](crate::Supervisor)
//! with a different policy without touching the callbacks.

use core::time::Duration;

use runpm_driver_api::PciDeviceId;

pub use runpm_driver_api::pci::class::PCI_BASE_CLASS_DISPLAY;

/// NVIDIA's PCI vendor ID.
pub const PCI_VENDOR_ID_NVIDIA: u16 = 0x10DE;

/// Idle time before runtime PM may auto-suspend the device, in milliseconds.
pub const AUTOSUSPEND_DELAY_MS: u64 = 2000;

/// [`AUTOSUSPEND_DELAY_MS`] as a [`Duration`].
pub const AUTOSUSPEND_DELAY: Duration = Duration::from_millis(AUTOSUSPEND_DELAY_MS);

/// BAR whose bounds are captured on attach.
pub const PRIMARY_BAR: usize = 0;

/// Policy applied by the stub's callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubConfig {
    /// Vendor to match.
    pub vendor: u16,
    /// Base class to match; subclass and programming interface are ignored.
    pub base_class: u8,
    /// Auto-suspend delay configured on attach.
    pub autosuspend_delay: Duration,
    /// BAR read on attach.
    pub primary_bar: usize,
}

impl StubConfig {
    /// The shipped policy.
    pub const DEFAULT: Self = Self {
        vendor: PCI_VENDOR_ID_NVIDIA,
        base_class: PCI_BASE_CLASS_DISPLAY,
        autosuspend_delay: AUTOSUSPEND_DELAY,
        primary_bar: PRIMARY_BAR,
    };

    /// Same policy with a different auto-suspend delay.
    #[must_use]
    pub const fn with_autosuspend_delay(self, autosuspend_delay: Duration) -> Self {
        Self {
            autosuspend_delay,
            ..self
        }
    }

    /// ID-table row selecting the devices this policy targets.
    #[must_use]
    pub const fn device_id(&self) -> PciDeviceId {
        PciDeviceId::with_vendor_base_class(self.vendor, self.base_class)
    }
}

impl Default for StubConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
