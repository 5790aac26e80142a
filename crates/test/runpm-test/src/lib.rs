//! Host-side test doubles for runpm drivers.
//!
//! - [`MockPciDevice`] records every primitive a driver calls.
//! - [`MockBus`] plays the host driver core: registration, matching,
//!   callback dispatch and binding state.
//! - [`LogCapture`] routes driver log output into a per-thread buffer so
//!   parallel tests only see their own lines.

pub mod log;

pub use bus::{DeviceHandle, MockBus};
pub use device::{Call, GPU_BAR0, MockPciDevice, PmFlags};
pub use log::{LogCapture, LogRecord};
